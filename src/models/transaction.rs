//! Settlement transaction models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    params::{ParamList, RequestParams},
};

/// A ledger transaction (credit into or debit out of the account).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Resource type marker, always `"transaction"`.
    #[serde(default)]
    pub object: String,
    /// Transaction identifier.
    pub id: String,
    /// Direction of the transaction, `"credit"` or `"debit"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// Currency code (ISO 4217).
    pub currency: String,
    /// Timezone-aware creation instant.
    pub created: DateTime<Utc>,
}

/// Filter and pagination parameters for listing transactions.
///
/// Omitted timestamps mean no filter; omitted pagination means the server
/// default page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionListParams {
    /// Only include transactions created at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Only include transactions created at or before this instant.
    pub to: Option<DateTime<Utc>>,
    /// Window offset into the full result set.
    pub offset: Option<u32>,
    /// Maximum number of items per page.
    pub limit: Option<u32>,
}

impl RequestParams for TransactionListParams {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt_datetime("from", self.from);
        params.push_opt_datetime("to", self.to);
        params.push_opt_int("offset", self.offset.map(i64::from));
        params.push_opt_int("limit", self.limit.map(i64::from));
        params
    }
}
