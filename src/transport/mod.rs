//! HTTP transport abstraction.
//!
//! The client core never performs I/O itself: every service operation
//! hands a method, host selector, path, and optional form body to a
//! [`Transport`] and gets back a status code and raw body. The trait is
//! deliberately open so callers can inject their own implementation, and
//! test code can stub responses without a network.
//!
//! Retry, backoff, cancellation, and timeouts all live behind this trait;
//! the core treats every transport failure as terminal for the call.

use crate::error::Result;

pub mod http;

pub use http::HttpTransport;

/// Which of the two gateway hosts a request targets.
///
/// Tokenization is the only operation allowed to carry raw card data, and
/// it goes to a dedicated vault host authenticated with the public key;
/// everything else hits the main API host with the secret key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Main API host.
    Api,
    /// Card vault host.
    Vault,
}

/// Raw response from a transport operation.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP execution facility injected into the client.
///
/// Implementations perform one synchronous request/response cycle per
/// call and hold no state on behalf of the core. Bodies are
/// `application/x-www-form-urlencoded` strings produced by
/// [`ParamList::encode`](crate::params::ParamList::encode).
pub trait Transport: Send + Sync {
    /// Executes a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the HTTP
    /// call fails at the network level.
    fn get(
        &self,
        endpoint: Endpoint,
        path: &str,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Executes a POST request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the HTTP
    /// call fails at the network level.
    fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &str,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Executes a PATCH request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the HTTP
    /// call fails at the network level.
    fn patch(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &str,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Executes a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the HTTP
    /// call fails at the network level.
    fn delete(
        &self,
        endpoint: Endpoint,
        path: &str,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse { status: 200, body: vec![] }.is_success());
        assert!(TransportResponse { status: 204, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 199, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 300, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 404, body: vec![] }.is_success());
        assert!(!TransportResponse { status: 500, body: vec![] }.is_success());
    }

    #[test]
    fn test_endpoint_is_copy() {
        let endpoint = Endpoint::Vault;
        let copy = endpoint;
        assert_eq!(endpoint, copy);
    }
}
