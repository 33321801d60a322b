//! Data models for the Opal Payments API.
//!
//! Response models are plain serde decode targets: unknown fields are
//! ignored for forward compatibility and missing optional fields default
//! to `None`, while the handful of mandatory fields (identifiers,
//! amounts) fail the decode and are surfaced by the service layer.
//! Request models implement [`RequestParams`](crate::params::RequestParams):
//! pure validation plus ordered form serialization.

pub mod account;
pub mod card;
pub mod charge;
pub mod collection;
pub mod customer;
pub mod token;
pub mod transaction;
pub mod transfer;

use serde::{Deserialize, Serialize};

pub use account::{Account, Balance};
pub use card::{Brand, Card, CardCreateInfo, CardUpdateInfo};
pub use charge::{Charge, ChargeCreateInfo, ChargeUpdateInfo};
pub use collection::{Collection, ListParams};
pub use customer::{Customer, CustomerCreateInfo, CustomerUpdateInfo};
pub use token::{Token, TokenCreateInfo};
pub use transaction::{Transaction, TransactionListParams};
pub use transfer::{Transfer, TransferCreateInfo};

/// Acknowledgment body returned by DELETE endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    /// Resource type marker of the deleted resource.
    #[serde(default)]
    pub object: String,
    /// Identifier of the deleted resource.
    pub id: String,
    /// Always true on a successful deletion.
    #[serde(default)]
    pub deleted: bool,
}
