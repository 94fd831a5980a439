//! Customer — a person who owns zero or more locations.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::id::CustomerId;
use crate::location::Location;
use crate::validate::{self, Rule, ValidationErrors};

/// Loose phone pattern: optional leading `+`, digits, spaces, dots and
/// hyphens, with at most one parenthesized group.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[-\s.0-9]*(?:\([\s.0-9]*\))?[-\s.0-9]*$").expect("valid regex")
});

/// A customer record, with its owned locations eagerly attached.
///
/// The representation always carries the `locations` field, even when the
/// customer has none yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Submitted customer fields, before validation.
///
/// Missing fields default to the empty string so absent and empty inputs
/// both fail the required rule the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl CustomerDraft {
    /// Check the submitted fields against the customer rule set.
    ///
    /// The email uniqueness rule is store-backed and runs in the
    /// application service; its violation is appended after these.
    ///
    /// # Errors
    ///
    /// Returns every violation, keyed by field, in rule declaration order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field, value, rules) in self.rules() {
            validate::check_field(&mut errors, field, value, &rules);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn rules(&self) -> [(&'static str, &str, Vec<Rule>); 4] {
        [
            (
                "first_name",
                &self.first_name,
                vec![Rule::Required, Rule::MaxLength(255)],
            ),
            (
                "last_name",
                &self.last_name,
                vec![Rule::Required, Rule::MaxLength(255)],
            ),
            (
                "email",
                &self.email,
                vec![Rule::Required, Rule::Email, Rule::MaxLength(255)],
            ),
            (
                "phone",
                &self.phone,
                vec![Rule::Required, Rule::Pattern(&PHONE_RE), Rule::MaxLength(30)],
            ),
        ]
    }
}
