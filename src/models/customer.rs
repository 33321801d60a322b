//! Customer models: the customer resource with its embedded card list,
//! plus the request models for creating and updating customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    models::{Card, CardCreateInfo, Collection},
    params::{ParamList, RequestParams},
};

/// A customer with zero or more vaulted cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Resource type marker, always `"customer"`.
    #[serde(default)]
    pub object: String,
    /// Customer identifier.
    pub id: String,
    /// Whether the customer belongs to the live environment.
    #[serde(default)]
    pub livemode: bool,
    /// API path of this customer.
    #[serde(default)]
    pub location: Option<String>,
    /// Identifier of the card charged when none is named explicitly.
    #[serde(default)]
    pub default_card: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Cards attached to this customer, decoded recursively as a paged
    /// collection.
    #[serde(default)]
    pub cards: Option<Collection<Card>>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Parameters for creating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerCreateInfo {
    /// Customer email; required.
    pub email: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Card token to attach as the customer's first card.
    pub card_token: Option<String>,
}

impl CustomerCreateInfo {
    /// Creates customer parameters with the required email populated.
    #[must_use]
    pub fn new(email: &str) -> Self {
        Self { email: email.to_owned(), description: None, card_token: None }
    }
}

impl RequestParams for CustomerCreateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.is_empty() {
            errors.add("email", "cannot be blank");
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push("email", &self.email);
        params.push_opt("description", self.description.as_deref());
        params.push_opt("card", self.card_token.as_deref());
        params
    }
}

/// Parameters for updating a customer.
///
/// A card may be attached either by token or by full card details, never
/// both in one call. Full card details are not form-serialized here; the
/// service routes them through the vault's tokenization endpoint first.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdateInfo {
    /// New customer email.
    pub email: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Card token to attach.
    pub card_token: Option<String>,
    /// Full card details to tokenize and attach.
    pub card: Option<CardCreateInfo>,
    /// Card to make the default payment source.
    pub default_card_id: Option<String>,
}

impl CustomerUpdateInfo {
    fn card_token_blank(&self) -> bool {
        self.card_token.as_deref().unwrap_or("").is_empty()
    }
}

impl RequestParams for CustomerUpdateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match &self.card {
            Some(_) if !self.card_token_blank() => {
                errors.add("card", "specifying both a card token and full card details is not allowed");
            }
            Some(card) if !card.is_valid() => {
                errors.add("card", "card details are invalid");
            }
            _ => {}
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("email", self.email.as_deref());
        params.push_opt("description", self.description.as_deref());
        params.push_opt("card", self.card_token.as_deref());
        params.push_opt("default_card_id", self.default_card_id.as_deref());
        params
    }
}
