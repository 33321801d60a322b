//! Error types for the Opal Payments client.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`]. Every error is terminal for the call in progress:
//! the client never retries on its own, the caller decides what happens
//! next.
//!
//! # Error Categories
//!
//! - **Validation** ([`Error::Validation`]): a request model failed its
//!   local validation rules; no network call was made
//! - **Transport** ([`Error::Transport`]): the HTTP layer failed
//!   (DNS, TLS, timeout), surfaced unmodified from `reqwest`
//! - **Api** ([`Error::Api`]): the server answered with a non-2xx status
//!   and a structured error envelope
//! - **Decode** ([`Error::Decode`]): a response body did not match the
//!   documented shape
//! - **Config** ([`Error::Config`]): the client configuration is unusable

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Opal Payments API.
///
/// Validation errors are raised locally before any network traffic; the
/// remaining variants map one-to-one onto the phases of a single HTTP
/// round trip.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum Error {
    /// A request model failed validation.
    ///
    /// Carries the full field-to-message mapping produced by the model's
    /// rule set. The request was never sent.
    #[error("request validation failed: {0}")]
    Validation(ValidationErrors),

    /// The HTTP transport failed.
    ///
    /// Wraps [`reqwest::Error`]: network timeouts, connection refused,
    /// DNS resolution failures, TLS errors. Not retried by this crate.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported an error.
    ///
    /// Produced from a non-2xx response; `code` and `message` are the
    /// server's own words, surfaced verbatim.
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Machine-readable error code from the error envelope.
        code: String,
        /// Human-readable message from the error envelope.
        message: String,
        /// Documentation location reported by the server, if any.
        location: Option<String>,
    },

    /// A response body did not match the expected shape.
    ///
    /// `payload` holds a truncated copy of the offending body for
    /// diagnostics.
    #[error("failed to decode {context}: {message} (payload: {payload})")]
    Decode {
        /// What was being decoded (e.g. "charge", "transaction list").
        context: &'static str,
        /// The underlying deserialization error.
        message: String,
        /// Truncated raw payload that failed to decode.
        payload: String,
    },

    /// The client configuration is invalid.
    ///
    /// Covers malformed base URLs, non-HTTPS endpoints, and missing
    /// credentials.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Maximum number of payload bytes preserved in a [`Error::Decode`].
const DECODE_PAYLOAD_LIMIT: usize = 256;

impl Error {
    /// Builds a [`Error::Decode`] from a serde failure and the raw body.
    pub(crate) fn decode(context: &'static str, source: &serde_json::Error, body: &[u8]) -> Self {
        let mut payload = String::from_utf8_lossy(body).into_owned();
        if payload.len() > DECODE_PAYLOAD_LIMIT {
            let mut cut = DECODE_PAYLOAD_LIMIT;
            while !payload.is_char_boundary(cut) {
                cut -= 1;
            }
            payload.truncate(cut);
            payload.push_str("...");
        }
        Self::Decode { context, message: source.to_string(), payload }
    }
}

/// Ordered mapping from field name to validation message.
///
/// Produced by [`RequestParams::validate`](crate::params::RequestParams::validate)
/// as a pure function of the model's current field state. Each field
/// appears at most once; the rule set visits every field a single time
/// and the first message for a field wins. Iteration order is rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field` unless one is already present.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    /// Returns the message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.iter().find(|(name, _)| *name == field).map(|(_, msg)| msg.as_str())
    }

    /// Returns true if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with a recorded violation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(field, message)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    /// Converts the accumulated map into a validation result.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if any violation was recorded.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}
