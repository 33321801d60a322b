//! HTTP transport implementation over reqwest.
//!
//! Requests are authenticated with HTTP basic auth: the key for the
//! target host as username, blank password.

use std::{fmt, sync::LazyLock, time::Duration};

use reqwest::{Client, Method};
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    error::Result,
    transport::{Endpoint, Transport, TransportResponse},
};

/// Shared HTTP client with connection pooling enabled.
///
/// A singleton avoids recreating the client per transport instance,
/// preserving connection pooling across all default transports.
static SHARED_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build shared HTTP client")
});

/// Transport over HTTP/1.1 and HTTP/2 using reqwest.
///
/// Holds the resolved base URLs and credentials for both gateway hosts.
/// Timeouts (30 s total, 10 s connect) are fixed at the shared client;
/// per-call cancellation is the caller's business via future dropping.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_base: String,
    vault_base: String,
    secret_key: String,
    public_key: String,
}

impl HttpTransport {
    /// Creates a transport from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the
    /// configuration fails validation.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: SHARED_HTTP_CLIENT.clone(),
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            vault_base: config.vault_base.trim_end_matches('/').to_owned(),
            secret_key: config.secret_key.clone(),
            public_key: config.public_key.clone(),
        })
    }

    fn target(&self, endpoint: Endpoint) -> (&str, &str) {
        match endpoint {
            Endpoint::Api => (&self.api_base, &self.secret_key),
            Endpoint::Vault => (&self.vault_base, &self.public_key),
        }
    }

    #[instrument(skip(self, body))]
    async fn execute(
        &self,
        method: Method,
        endpoint: Endpoint,
        path: &str,
        body: Option<&str>,
    ) -> Result<TransportResponse> {
        let (base, key) = self.target(endpoint);
        let url = format!("{base}{path}");

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(key, Some(""))
            .header("Accept", "application/json");

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body.to_owned());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "request completed");
        Ok(TransportResponse { status, body })
    }
}

impl fmt::Debug for HttpTransport {
    // Credentials are deliberately left out of the Debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_base", &self.api_base)
            .field("vault_base", &self.vault_base)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<TransportResponse> {
        self.execute(Method::GET, endpoint, path, None).await
    }

    async fn post(&self, endpoint: Endpoint, path: &str, body: &str) -> Result<TransportResponse> {
        self.execute(Method::POST, endpoint, path, Some(body)).await
    }

    async fn patch(&self, endpoint: Endpoint, path: &str, body: &str) -> Result<TransportResponse> {
        self.execute(Method::PATCH, endpoint, path, Some(body)).await
    }

    async fn delete(&self, endpoint: Endpoint, path: &str) -> Result<TransportResponse> {
        self.execute(Method::DELETE, endpoint, path, None).await
    }
}
