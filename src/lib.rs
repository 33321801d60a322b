//! Opal Payments client SDK.
//!
//! A typed Rust client for the Opal Payments HTTP API: charges,
//! customers, vaulted cards, card tokens, transactions, transfers, and
//! account balance. The crate is API glue by design; there is no retry
//! loop, no cache, and no shared mutable state, just data-shape
//! translation with validation on top of a single HTTP call per
//! operation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   Your code      │
//! └────────┬─────────┘
//!          │ request models (validated, form-encoded)
//! ┌────────▼─────────────────────────────────────┐
//! │            opalpay (this crate)              │
//! │  ┌───────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │ services  │───│  models  │   │ params  │  │
//! │  └─────┬─────┘   └──────────┘   └─────────┘  │
//! │        │ Transport trait (injectable)        │
//! └────────┼─────────────────────────────────────┘
//!          │ HTTPS (basic auth)
//! ┌────────▼─────────┐   ┌──────────────────┐
//! │  api.opalpay.io  │   │ vault.opalpay.io │
//! └──────────────────┘   └──────────────────┘
//! ```
//!
//! Request models validate as a pure function of their current field
//! state and serialize to ordered `key=value&...` form parameters with
//! absent optional fields omitted. Response models are tolerant serde
//! decode targets. Services glue the two together around exactly one
//! transport call.
//!
//! # Quick Start
//!
//! ## Charge a customer's default card
//!
//! ```rust,no_run
//! use opalpay::{Client, ClientConfig, models::ChargeCreateInfo};
//!
//! # async fn example() -> opalpay::Result<()> {
//! let client = Client::new(&ClientConfig::new("skey_test_123", "pkey_test_123"))?;
//!
//! let info = ChargeCreateInfo::with_customer(
//!     100_000, // smallest currency unit
//!     "thb",
//!     "https://merchant.example/done",
//!     "cust_test_123",
//! );
//! let charge = client.charges().create(&info).await?;
//! println!("authorized: {}", charge.authorized);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokenize a card and attach it to a new customer
//!
//! ```rust,no_run
//! use opalpay::{
//!     Client, ClientConfig,
//!     models::{CardCreateInfo, CustomerCreateInfo, TokenCreateInfo},
//! };
//!
//! # async fn example() -> opalpay::Result<()> {
//! let client = Client::new(&ClientConfig::new("skey_test_123", "pkey_test_123"))?;
//!
//! let card = CardCreateInfo::new("JOHN DOE", "4242424242424242", 10, 2027);
//! let token = client.tokens().create(&TokenCreateInfo::new(card)).await?;
//!
//! let mut info = CustomerCreateInfo::new("john.doe@example.com");
//! info.card_token = Some(token.id);
//! let customer = client.customers().create(&info).await?;
//! println!("customer: {}", customer.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## List transactions in a window
//!
//! ```rust,no_run
//! use opalpay::{Client, ClientConfig, models::TransactionListParams};
//!
//! # async fn example() -> opalpay::Result<()> {
//! let client = Client::new(&ClientConfig::new("skey_test_123", "pkey_test_123"))?;
//!
//! let params = TransactionListParams { offset: Some(0), limit: Some(20), ..Default::default() };
//! let page = client.transactions().list(&params).await?;
//! println!("{} of {} transactions", page.data.len(), page.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Validation
//!
//! Mutating operations validate their request model before any network
//! traffic. Validation is idempotent and side-effect free: it returns
//! either `Ok(())` or the full field-to-message map.
//!
//! ```rust
//! use opalpay::{models::ChargeCreateInfo, params::RequestParams};
//!
//! let info = ChargeCreateInfo::new(0, "", "https://merchant.example/done");
//! let errors = info.validate().unwrap_err();
//! assert_eq!(errors.get("amount"), Some("must be greater than 0"));
//! assert_eq!(errors.get("currency"), Some("cannot be blank"));
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: the [`Client`] entry point
//! - [`config`]: credentials and base URLs
//! - [`models`]: request and response models plus the paged [`models::Collection`]
//! - [`params`]: validation and form-serialization capability
//! - [`services`]: per-resource operations
//! - [`transport`]: the injectable [`transport::Transport`] trait and its
//!   reqwest implementation
//! - [`error`]: the [`Error`] taxonomy
//!
//! # Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Every error is
//! terminal for the single call in progress; the caller decides whether
//! to retry:
//!
//! - [`Error::Validation`]: rejected locally, nothing was sent
//! - [`Error::Transport`]: the HTTP layer failed (DNS, TLS, timeout)
//! - [`Error::Api`]: the server answered non-2xx with code and message
//! - [`Error::Decode`]: the response body did not match the documented
//!   shape

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod services;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result, ValidationErrors};
pub use params::{ParamList, RequestParams};
