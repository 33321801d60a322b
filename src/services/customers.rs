//! Customer operations.

use tracing::{info, instrument};

use crate::{
    error::Result,
    models::{Collection, Customer, CustomerCreateInfo, CustomerUpdateInfo, Deleted, ListParams},
    services::{decode_response, form_body, paged_path},
    transport::{Endpoint, Transport},
};

/// Customer operations, borrowed from a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Customers<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules, or a transport,
    /// API, or decode error from the round trip.
    #[instrument(skip(self, info))]
    pub async fn create(&self, info: &CustomerCreateInfo) -> Result<Customer> {
        let body = form_body(info)?;
        info!(email = %info.email, "creating customer");
        let response = self.transport.post(Endpoint::Api, "/customers", &body).await?;
        decode_response(response, "customer")
    }

    /// Retrieves a single customer by id.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Customer> {
        let response = self.transport.get(Endpoint::Api, &format!("/customers/{id}")).await?;
        decode_response(response, "customer")
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) without
    /// touching the network if `info` fails its rules (including the
    /// token/card exclusivity rule), or a transport, API, or decode error
    /// from the round trip.
    #[instrument(skip(self, info))]
    pub async fn update(&self, id: &str, info: &CustomerUpdateInfo) -> Result<Customer> {
        let body = form_body(info)?;
        let response =
            self.transport.patch(Endpoint::Api, &format!("/customers/{id}"), &body).await?;
        decode_response(response, "customer")
    }

    /// Deletes a customer and returns the deletion acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Deleted> {
        info!(id, "deleting customer");
        let response = self.transport.delete(Endpoint::Api, &format!("/customers/{id}")).await?;
        decode_response(response, "deletion acknowledgment")
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Returns a transport, API, or decode error from the round trip.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &ListParams) -> Result<Collection<Customer>> {
        let path = paged_path("/customers", params);
        let response = self.transport.get(Endpoint::Api, &path).await?;
        decode_response(response, "customer list")
    }
}
