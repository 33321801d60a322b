//! Card token models.
//!
//! Tokens are the only resource that travels through the vault host: raw
//! card data goes in, a single-use token comes back, and every other
//! endpoint accepts the token instead of card data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    models::{Card, CardCreateInfo},
    params::{ParamList, RequestParams},
};

/// A single-use card token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Resource type marker, always `"token"`.
    #[serde(default)]
    pub object: String,
    /// Token identifier.
    pub id: String,
    /// Whether the token belongs to the live environment.
    #[serde(default)]
    pub livemode: bool,
    /// Whether the token has already been spent.
    #[serde(default)]
    pub used: bool,
    /// The vaulted card behind this token.
    pub card: Card,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Parameters for tokenizing a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCreateInfo {
    /// Full card details to vault.
    pub card: CardCreateInfo,
}

impl TokenCreateInfo {
    /// Creates token parameters around the given card details.
    #[must_use]
    pub fn new(card: CardCreateInfo) -> Self {
        Self { card }
    }
}

impl RequestParams for TokenCreateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.card.is_valid() {
            errors.add("card", "card details are invalid");
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_nested("card", self.card.to_params());
        params
    }
}
