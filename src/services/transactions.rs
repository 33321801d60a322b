//! Transaction operations.

use tracing::instrument;

use crate::{
    error::Result,
    models::{Collection, Transaction, TransactionListParams},
    services::{decode_response, paged_path},
    transport::{Endpoint, Transport},
};

/// Transaction operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Transactions<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Retrieves a single transaction by id.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Transaction> {
        let response = self.transport.get(Endpoint::Api, &format!("/transactions/{id}")).await?;
        decode_response(response, "transaction")
    }

    /// Lists transactions, optionally filtered by creation window.
    ///
    /// Omitted `from`/`to` filters mean no filter; omitted pagination
    /// means the server's default page.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &TransactionListParams) -> Result<Collection<Transaction>> {
        let path = paged_path("/transactions", params);
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "transaction list")
    }
}
