//! Account and balance models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The merchant account the API keys belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Resource type marker, always `"account"`.
    #[serde(default)]
    pub object: String,
    /// Account identifier.
    pub id: String,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// The account's current balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Resource type marker, always `"balance"`.
    #[serde(default)]
    pub object: String,
    /// Whether this is the live-environment balance.
    #[serde(default)]
    pub livemode: bool,
    /// Funds available for transfer, in the smallest currency unit.
    pub available: i64,
    /// Total funds including amounts not yet settled.
    pub total: i64,
    /// Currency code (ISO 4217).
    #[serde(default)]
    pub currency: Option<String>,
}
