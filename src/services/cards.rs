//! Card operations.
//!
//! Cards live under their owning customer; every operation takes the
//! customer id alongside the card id. New cards are attached via token
//! (see [`Tokens`](crate::services::Tokens)), never created here.

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{Card, CardUpdateInfo, Collection, Deleted, ListParams},
    services::{decode_response, form_body, paged_path},
    transport::{Endpoint, Transport},
};

/// Card operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Cards<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Retrieves a single card of a customer.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, customer_id: &str, card_id: &str) -> Result<Card> {
        let path = format!("/customers/{customer_id}/cards/{card_id}");
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "card")
    }

    /// Lists the cards attached to a customer.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self, params))]
    pub async fn list(&self, customer_id: &str, params: &ListParams) -> Result<Collection<Card>> {
        let path = paged_path(&format!("/customers/{customer_id}/cards"), params);
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "card list")
    }

    /// Updates a card's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules, or a transport,
    /// API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn update(
        &self,
        customer_id: &str,
        card_id: &str,
        info: &CardUpdateInfo,
    ) -> Result<Card> {
        let body = form_body(info)?;
        let path = format!("/customers/{customer_id}/cards/{card_id}");
        let response = self.transport.patch(Endpoint::Api, &path, &body).await?;
        decode_response(response, "card")
    }

    /// Removes a card from a customer.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn delete(&self, customer_id: &str, card_id: &str) -> Result<Deleted> {
        info!(customer_id, card_id, "deleting card");
        let path = format!("/customers/{customer_id}/cards/{card_id}");
        let response = self.transport.delete(Endpoint::Api, &path).await?;
        decode_response(response, "deletion acknowledgment")
    }
}
