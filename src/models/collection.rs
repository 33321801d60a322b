//! Paged list envelope shared by all index endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    params::{ParamList, RequestParams},
};

/// One page of resources as returned by list endpoints.
///
/// `offset` and `limit` describe the requested window, not a guarantee on
/// the returned count, and `total` is the match count across the server's
/// full result set, so `total` may legitimately exceed `data.len()`.
/// `data` keeps the server-defined order; the client never reorders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    /// Envelope type marker, always `"list"`.
    #[serde(default)]
    pub object: String,
    /// Start of the window the server searched, if reported.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// End of the window the server searched, if reported.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    /// Requested window offset.
    pub offset: u32,
    /// Requested window size.
    pub limit: u32,
    /// Total matches across the full result set.
    pub total: u64,
    /// Items in this page, in server order.
    pub data: Vec<T>,
}

/// Pagination window for list calls.
///
/// Omitted values are not sent and the server applies its defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Window offset into the full result set.
    pub offset: Option<u32>,
    /// Maximum number of items per page.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Creates an explicit pagination window.
    #[must_use]
    pub fn window(offset: u32, limit: u32) -> Self {
        Self { offset: Some(offset), limit: Some(limit) }
    }
}

impl RequestParams for ListParams {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt_int("offset", self.offset.map(i64::from));
        params.push_opt_int("limit", self.limit.map(i64::from));
        params
    }
}
