//! Transfer operations.

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{Collection, ListParams, Transfer, TransferCreateInfo},
    services::{decode_response, form_body, paged_path},
    transport::{Endpoint, Transport},
};

/// Transfer operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Transfers<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Schedules a payout of the given amount.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules, or a transport,
    /// API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn create(&self, info: &TransferCreateInfo) -> Result<Transfer> {
        let body = form_body(info)?;
        info!(amount = info.amount, "creating transfer");
        let response = self.transport.post(Endpoint::Api, "/transfers", &body).await?;
        decode_response(response, "transfer")
    }

    /// Retrieves a single transfer by id.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Transfer> {
        let response = self.transport.get(Endpoint::Api, &format!("/transfers/{id}")).await?;
        decode_response(response, "transfer")
    }

    /// Lists transfers.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListParams) -> Result<Collection<Transfer>> {
        let path = paged_path("/transfers", params);
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "transfer list")
    }
}
