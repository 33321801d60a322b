//! Account and balance operations.

use tracing::instrument;

use crate::{
    error::Result,
    models::{Account, Balance},
    services::decode_response,
    transport::{Endpoint, Transport},
};

/// Account operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Accounts<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Retrieves the account the API keys belong to.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Account> {
        let response = self.transport.get(Endpoint::Api, "/account").await?;
        decode_response(response, "account")
    }

    /// Retrieves the account's current balance.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn balance(&self) -> Result<Balance> {
        let response = self.transport.get(Endpoint::Api, "/balance").await?;
        decode_response(response, "balance")
    }
}
