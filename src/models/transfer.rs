//! Transfer models: payouts from the account balance to the registered
//! bank account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    params::{ParamList, RequestParams},
};

/// A payout to the registered bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Resource type marker, always `"transfer"`.
    #[serde(default)]
    pub object: String,
    /// Transfer identifier.
    pub id: String,
    /// Whether the transfer belongs to the live environment.
    #[serde(default)]
    pub livemode: bool,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// Currency code (ISO 4217).
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the transfer has been paid out.
    #[serde(default)]
    pub paid: bool,
    /// Whether the transfer has been sent to the bank.
    #[serde(default)]
    pub sent: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Parameters for creating a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferCreateInfo {
    /// Amount to pay out, in the smallest currency unit; must be positive.
    pub amount: i64,
}

impl TransferCreateInfo {
    /// Creates transfer parameters for the given amount.
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }
}

impl RequestParams for TransferCreateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.amount <= 0 {
            errors.add("amount", "must be greater than 0");
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_int("amount", self.amount);
        params
    }
}
