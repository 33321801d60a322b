//! Card models: the vaulted-card resource and the request models used to
//! create and update cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationErrors,
    params::{ParamList, RequestParams},
};

/// Card network reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brand {
    /// Visa.
    Visa,
    /// Mastercard.
    MasterCard,
    /// JCB.
    #[serde(rename = "JCB")]
    Jcb,
    /// American Express.
    #[serde(rename = "American Express")]
    AmericanExpress,
    /// Diners Club.
    #[serde(rename = "Diners Club")]
    DinersClub,
    /// Discover.
    Discover,
    /// UnionPay.
    UnionPay,
    /// Any brand this client does not know about yet.
    #[serde(other)]
    Other,
}

/// A card stored in the vault, as embedded in customers, charges, and
/// tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Resource type marker, always `"card"`.
    #[serde(default)]
    pub object: String,
    /// Card identifier.
    pub id: String,
    /// Whether the card belongs to the live environment.
    #[serde(default)]
    pub livemode: bool,
    /// Issuing country (ISO 3166-1 alpha-2).
    #[serde(default)]
    pub country: Option<String>,
    /// Cardholder city.
    #[serde(default)]
    pub city: Option<String>,
    /// Cardholder postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Financing type reported by the issuer (`"credit"` or `"debit"`).
    #[serde(default)]
    pub financing: Option<String>,
    /// Last four digits of the card number.
    #[serde(default)]
    pub last_digits: Option<String>,
    /// Card network.
    #[serde(default)]
    pub brand: Option<Brand>,
    /// Expiration month (1 to 12).
    #[serde(default)]
    pub expiration_month: Option<u32>,
    /// Expiration year (four digits).
    #[serde(default)]
    pub expiration_year: Option<i32>,
    /// Stable fingerprint of the card number.
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Cardholder name.
    #[serde(default)]
    pub name: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Full card details for tokenization.
///
/// Only ever sent to the vault host, nested under `card[...]` keys inside
/// a token creation request; customer operations reference cards by token
/// or id instead of carrying raw card data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCreateInfo {
    /// Cardholder name.
    pub name: String,
    /// Full card number.
    pub number: String,
    /// Expiration month (1 to 12).
    pub expiration_month: u32,
    /// Expiration year (four digits).
    pub expiration_year: i32,
    /// Card security code.
    pub security_code: Option<String>,
    /// Cardholder city.
    pub city: Option<String>,
    /// Cardholder postal code.
    pub postal_code: Option<String>,
}

impl CardCreateInfo {
    /// Creates card details with the required fields populated.
    #[must_use]
    pub fn new(name: &str, number: &str, expiration_month: u32, expiration_year: i32) -> Self {
        Self {
            name: name.to_owned(),
            number: number.to_owned(),
            expiration_month,
            expiration_year,
            security_code: None,
            city: None,
            postal_code: None,
        }
    }
}

impl RequestParams for CardCreateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.is_empty() {
            errors.add("name", "cannot be blank");
        }
        if self.number.is_empty() {
            errors.add("number", "cannot be blank");
        }
        if !(1..=12).contains(&self.expiration_month) {
            errors.add("expiration_month", "must be between 1 and 12");
        }
        if self.expiration_year <= 0 {
            errors.add("expiration_year", "must be greater than 0");
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push("name", &self.name);
        params.push("number", &self.number);
        params.push_int("expiration_month", i64::from(self.expiration_month));
        params.push_int("expiration_year", i64::from(self.expiration_year));
        params.push_opt("security_code", self.security_code.as_deref());
        params.push_opt("city", self.city.as_deref());
        params.push_opt("postal_code", self.postal_code.as_deref());
        params
    }
}

/// Fields that may be changed on a vaulted card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdateInfo {
    /// New cardholder name.
    pub name: Option<String>,
    /// New cardholder city.
    pub city: Option<String>,
    /// New cardholder postal code.
    pub postal_code: Option<String>,
    /// New expiration month (1 to 12).
    pub expiration_month: Option<u32>,
    /// New expiration year.
    pub expiration_year: Option<i32>,
}

impl RequestParams for CardUpdateInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(month) = self.expiration_month
            && !(1..=12).contains(&month)
        {
            errors.add("expiration_month", "must be between 1 and 12");
        }
        errors.into_result()
    }

    fn to_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("city", self.city.as_deref());
        params.push_opt("postal_code", self.postal_code.as_deref());
        params.push_opt_int("expiration_month", self.expiration_month.map(i64::from));
        params.push_opt_int("expiration_year", self.expiration_year.map(i64::from));
        params
    }
}
