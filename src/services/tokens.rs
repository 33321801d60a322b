//! Card token operations.
//!
//! Tokenization is the only operation that carries raw card data, and it
//! goes to the vault host under the public key.

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{Token, TokenCreateInfo},
    services::{decode_response, form_body},
    transport::{Endpoint, Transport},
};

/// Token operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Tokens<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Tokenizes card details into a single-use token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if the card details fail their rules, or a
    /// transport, API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn create(&self, info: &TokenCreateInfo) -> Result<Token> {
        let body = form_body(info)?;
        info!("tokenizing card");
        let response = self.transport.post(Endpoint::Vault, "/tokens", &body).await?;
        decode_response(response, "token")
    }

    /// Retrieves a token by id.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Token> {
        let response = self.transport.get(Endpoint::Vault, &format!("/tokens/{id}")).await?;
        decode_response(response, "token")
    }
}
