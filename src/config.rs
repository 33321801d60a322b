//! Client configuration.
//!
//! A [`ClientConfig`] carries the API credentials and the two base URLs
//! (main API host and card vault host). It can be built directly,
//! deserialized from TOML, or loaded from environment variables.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Default main API host.
pub const DEFAULT_API_BASE: &str = "https://api.opalpay.io";

/// Default card vault host.
pub const DEFAULT_VAULT_BASE: &str = "https://vault.opalpay.io";

/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "OPALPAY_SECRET_KEY";

/// Environment variable holding the public key.
pub const ENV_PUBLIC_KEY: &str = "OPALPAY_PUBLIC_KEY";

/// Environment variable overriding the main API base URL.
pub const ENV_API_BASE: &str = "OPALPAY_API_BASE";

/// Environment variable overriding the vault base URL.
pub const ENV_VAULT_BASE: &str = "OPALPAY_VAULT_BASE";

/// Credentials and endpoints for an Opal Payments account.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Secret key, used against the main API host.
    pub secret_key: String,

    /// Public key, used against the vault host for tokenization.
    pub public_key: String,

    /// Main API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Card vault base URL.
    #[serde(default = "default_vault_base")]
    pub vault_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_owned()
}

fn default_vault_base() -> String {
    DEFAULT_VAULT_BASE.to_owned()
}

impl ClientConfig {
    /// Creates a configuration for the given key pair against the
    /// default hosts.
    #[must_use]
    pub fn new(secret_key: &str, public_key: &str) -> Self {
        Self {
            secret_key: secret_key.to_owned(),
            public_key: public_key.to_owned(),
            api_base: default_api_base(),
            vault_base: default_vault_base(),
        }
    }

    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is malformed or fails
    /// [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use opalpay::ClientConfig;
    ///
    /// let toml = r#"
    ///     secret_key = "skey_test_123"
    ///     public_key = "pkey_test_123"
    /// "#;
    ///
    /// let config = ClientConfig::from_toml(toml)?;
    /// assert_eq!(config.api_base, "https://api.opalpay.io");
    /// # Ok::<(), opalpay::Error>(())
    /// ```
    pub fn from_toml(document: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(document).map_err(|e| Error::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from `OPALPAY_*` environment variables.
    ///
    /// `OPALPAY_SECRET_KEY` and `OPALPAY_PUBLIC_KEY` are required;
    /// `OPALPAY_API_BASE` and `OPALPAY_VAULT_BASE` override the default
    /// hosts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or the
    /// resulting configuration fails [`validate`](Self::validate).
    pub fn from_env() -> Result<Self> {
        let config = Self {
            secret_key: require_env(ENV_SECRET_KEY)?,
            public_key: require_env(ENV_PUBLIC_KEY)?,
            api_base: std::env::var(ENV_API_BASE).unwrap_or_else(|_| default_api_base()),
            vault_base: std::env::var(ENV_VAULT_BASE).unwrap_or_else(|_| default_vault_base()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that both keys are non-empty and that both base URLs parse,
    /// use HTTPS, and do not point at localhost or loopback addresses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            return Err(Error::Config("secret_key cannot be blank".to_owned()));
        }
        if self.public_key.is_empty() {
            return Err(Error::Config("public_key cannot be blank".to_owned()));
        }
        validate_base_url("api_base", &self.api_base)?;
        validate_base_url("vault_base", &self.vault_base)?;
        Ok(())
    }
}

/// Validates a base URL for scheme and host constraints.
fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| Error::Config(format!("invalid {name} '{value}': {e}")))?;

    if url.scheme() != "https" {
        return Err(Error::Config(format!("{name} must use HTTPS, got: {}", url.scheme())));
    }

    if let Some(host) = url.host_str() {
        let host_lower = host.to_lowercase();
        if host_lower == "localhost"
            || host_lower == "::1"
            || host_lower == "[::1]"
            || host_lower.starts_with("127.")
        {
            return Err(Error::Config(format!(
                "{name} must not be localhost or loopback: {host}"
            )));
        }
    }

    Ok(())
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| Error::Config(format!("environment variable {name} is not set")))
}
