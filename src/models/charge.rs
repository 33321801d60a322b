//! Charge models: the charge resource plus the request models for
//! creating and updating charges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    models::Card,
    params::{ParamList, RequestParams},
};

/// A charge against a card or a customer's default card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    /// Resource type marker, always `"charge"`.
    #[serde(default)]
    pub object: String,
    /// Charge identifier.
    pub id: String,
    /// Whether the charge belongs to the live environment.
    #[serde(default)]
    pub livemode: bool,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// Currency code (ISO 4217).
    pub currency: String,
    /// Caller-supplied description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the charge captures funds immediately on authorization.
    #[serde(default)]
    pub capture: bool,
    /// Whether authorization succeeded.
    #[serde(default)]
    pub authorized: bool,
    /// Whether funds were captured.
    #[serde(default)]
    pub captured: bool,
    /// Identifier of the settlement transaction, once captured.
    #[serde(default)]
    pub transaction: Option<String>,
    /// URI the payer is redirected to after authorization.
    #[serde(default)]
    pub return_uri: Option<String>,
    /// Gateway-assigned reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// URI the payer must visit to authorize the charge.
    #[serde(default)]
    pub authorize_uri: Option<String>,
    /// Failure code when the charge was declined.
    #[serde(default)]
    pub failure_code: Option<String>,
    /// Failure message when the charge was declined.
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Card the charge was made against.
    #[serde(default)]
    pub card: Option<Card>,
    /// Identifier of the charged customer, if any.
    #[serde(default)]
    pub customer: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Parameters for creating a charge.
///
/// A charge needs exactly one payment source: a customer id alone charges
/// that customer's default card, while a card id must always be
/// accompanied by the customer id that owns the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeCreateInfo {
    /// Amount in the smallest currency unit; must be positive.
    pub amount: i64,
    /// Currency code (ISO 4217).
    pub currency: String,
    /// Free-form description attached to the charge.
    pub description: Option<String>,
    /// URI the payer is redirected to when charging completes.
    pub return_uri: String,
    /// Caller-chosen reference attached to the charge.
    pub reference: Option<String>,
    /// Card id (or card token) to charge.
    pub card_id: Option<String>,
    /// Customer id owning the card, or whose default card to charge.
    pub customer_id: Option<String>,
    /// Capture funds immediately on authorization.
    pub capture: bool,
}

impl ChargeCreateInfo {
    /// Creates charge parameters with no payment source attached yet.
    ///
    /// Capture defaults to immediate, matching the gateway default.
    #[must_use]
    pub fn new(amount: i64, currency: &str, return_uri: &str) -> Self {
        Self {
            amount,
            currency: currency.to_owned(),
            description: None,
            return_uri: return_uri.to_owned(),
            reference: None,
            card_id: None,
            customer_id: None,
            capture: true,
        }
    }

    /// Creates charge parameters against a customer's default card.
    #[must_use]
    pub fn with_customer(amount: i64, currency: &str, return_uri: &str, customer_id: &str) -> Self {
        let mut info = Self::new(amount, currency, return_uri);
        info.customer_id = Some(customer_id.to_owned());
        info
    }

    /// Creates charge parameters against a specific card of a customer.
    #[must_use]
    pub fn with_card(
        amount: i64,
        currency: &str,
        return_uri: &str,
        customer_id: &str,
        card_id: &str,
    ) -> Self {
        let mut info = Self::with_customer(amount, currency, return_uri, customer_id);
        info.card_id = Some(card_id.to_owned());
        info
    }

    fn card_id_blank(&self) -> bool {
        self.card_id.as_deref().unwrap_or("").is_empty()
    }

    fn customer_id_blank(&self) -> bool {
        self.customer_id.as_deref().unwrap_or("").is_empty()
    }
}

impl RequestParams for ChargeCreateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.amount <= 0 {
            errors.add("amount", "must be greater than 0");
        }
        if self.currency.is_empty() {
            errors.add("currency", "cannot be blank");
        }
        if self.return_uri.is_empty() {
            errors.add("return_uri", "cannot be blank");
        }
        match (self.card_id_blank(), self.customer_id_blank()) {
            (true, true) => errors.add(
                "card",
                "cannot be blank. Pass a card id together with its customer id, \
                 or a customer id alone to charge the default card",
            ),
            (false, true) => {
                errors.add("card", "a card id requires an accompanying customer id");
            }
            _ => {}
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_int("amount", self.amount);
        params.push("currency", &self.currency);
        params.push_opt("description", self.description.as_deref());
        params.push("return_uri", &self.return_uri);
        params.push_opt("reference", self.reference.as_deref());
        params.push_bool("capture", self.capture);
        params.push_opt("customer", self.customer_id.as_deref());
        params.push_opt("card", self.card_id.as_deref());
        params
    }
}

/// Parameters for updating a charge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeUpdateInfo {
    /// New description for the charge.
    pub description: Option<String>,
}

impl RequestParams for ChargeUpdateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("description", self.description.as_deref());
        params
    }
}
