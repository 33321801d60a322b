//! Request parameter serialization.
//!
//! Mutating API calls send `application/x-www-form-urlencoded` bodies and
//! list calls append query strings. Both are built from a [`ParamList`]:
//! an insertion-ordered sequence of key/value pairs with empty optional
//! fields omitted entirely, never emitted as `key=`.
//!
//! The [`RequestParams`] trait is the capability every request model
//! implements: a pure validation function over the current field state
//! plus serialization into a [`ParamList`].

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

use crate::error::ValidationErrors;

/// Capability of a request model: validation plus form serialization.
///
/// `validate` is a pure function of the model's current field state; it
/// allocates a fresh [`ValidationErrors`] on every call, so two calls
/// without intervening mutation always agree and there is no stale error
/// state to consult by accident.
pub trait RequestParams {
    /// Applies this model's validation rules to its current field state.
    ///
    /// Rules run in a fixed order, one rule per field, so each field
    /// appears at most once in the error map.
    ///
    /// # Errors
    ///
    /// Returns the full field-to-message map if any rule is violated.
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Serializes the populated fields into an ordered parameter list.
    ///
    /// Keys follow the documented wire names (snake_case); inclusion
    /// order is declaration order. Absent optional fields are omitted.
    fn to_params(&self) -> ParamList;

    /// Returns true if [`validate`](Self::validate) reports no violations.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Insertion-ordered list of wire parameters.
///
/// Keys are lower-cased at insertion. [`encode`](Self::encode) produces
/// the `key=value&key=value` form-urlencoded rendition with no trailing
/// separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a string parameter, skipping empty values.
    pub fn push(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key.to_lowercase(), value.to_owned()));
        }
    }

    /// Appends an optional string parameter; `None` and `Some("")` are
    /// both omitted.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends an integer parameter (locale-invariant formatting).
    pub fn push_int(&mut self, key: &str, value: i64) {
        self.pairs.push((key.to_lowercase(), value.to_string()));
    }

    /// Appends an optional integer parameter.
    pub fn push_opt_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.push_int(key, value);
        }
    }

    /// Appends a boolean parameter as its lowercase literal.
    pub fn push_bool(&mut self, key: &str, value: bool) {
        self.pairs.push((key.to_lowercase(), if value { "true" } else { "false" }.to_owned()));
    }

    /// Appends an optional UTC timestamp in ISO-8601 format.
    pub fn push_opt_datetime(&mut self, key: &str, value: Option<DateTime<Utc>>) {
        if let Some(value) = value {
            self.pairs
                .push((key.to_lowercase(), value.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
    }

    /// Appends every pair of `other` under `prefix[...]` keys.
    ///
    /// Used for nested resources, e.g. full card details inside a token
    /// creation request become `card[name]`, `card[number]`, and so on.
    pub fn push_nested(&mut self, prefix: &str, other: ParamList) {
        for (key, value) in other.pairs {
            self.pairs.push((format!("{prefix}[{key}]"), value));
        }
    }

    /// Returns true if no parameters were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of recorded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Renders the list as a form-urlencoded string.
    ///
    /// Pairs appear in insertion order, joined by `&` with no trailing
    /// separator. Values are percent-encoded per the form rules.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
