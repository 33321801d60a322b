//! Charge operations.

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{Charge, ChargeCreateInfo, ChargeUpdateInfo, Collection, ListParams},
    services::{decode_response, form_body, paged_path},
    transport::{Endpoint, Transport},
};

/// Charge operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Charges<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Charges<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Creates a charge against a card or a customer's default card.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules, or a transport,
    /// API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn create(&self, info: &ChargeCreateInfo) -> Result<Charge> {
        let body = form_body(info)?;
        info!(amount = info.amount, currency = %info.currency, "creating charge");
        let response = self.transport.post(Endpoint::Api, "/charges", &body).await?;
        decode_response(response, "charge")
    }

    /// Retrieves a single charge by id.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Charge> {
        let response = self.transport.get(Endpoint::Api, &format!("/charges/{id}")).await?;
        decode_response(response, "charge")
    }

    /// Updates a charge's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules, or a transport,
    /// API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn update(&self, id: &str, info: &ChargeUpdateInfo) -> Result<Charge> {
        let body = form_body(info)?;
        let response =
            self.transport.patch(Endpoint::Api, &format!("/charges/{id}"), &body).await?;
        decode_response(response, "charge")
    }

    /// Lists charges, newest first per the server's ordering.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListParams) -> Result<Collection<Charge>> {
        let path = paged_path("/charges", params);
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "charge list")
    }

    /// Captures a previously authorized, uncaptured charge.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn capture(&self, id: &str) -> Result<Charge> {
        info!(id, "capturing charge");
        let response =
            self.transport.post(Endpoint::Api, &format!("/charges/{id}/capture"), "").await?;
        decode_response(response, "charge")
    }
}
