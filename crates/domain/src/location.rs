//! Location — an address owned by exactly one customer.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, LocationId};
use crate::validate::{self, Rule, ValidationErrors};

/// Zip pattern: digits, spaces, dots and hyphens only.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\s.0-9]*$").expect("valid regex"));

/// A location record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub customer_id: CustomerId,
}

/// Submitted location fields, before validation.
///
/// `customer_id` is kept as submitted text: clients send it as either a JSON
/// number or a string, and an unparseable value has to surface as a
/// referential-rule violation rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationDraft {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub customer_id: String,
}

impl LocationDraft {
    /// Check the submitted fields against the location rule set.
    ///
    /// The `customer_id` existence rule is store-backed and runs in the
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

    /// The submitted `customer_id` as a typed id, when it parses.
    #[must_use]
    pub fn customer_ref(&self) -> Option<CustomerId> {
        self.customer_id.parse().ok()
    }

    fn rules(&self) -> [(&'static str, &str, Vec<Rule>); 5] {
        [
            (
                "address",
                &self.address,
                vec![Rule::Required, Rule::MaxLength(255)],
            ),
            (
                "city",
                &self.city,
                vec![Rule::Required, Rule::MaxLength(255)],
            ),
            (
                "state",
                &self.state,
                vec![Rule::Required, Rule::MaxLength(255)],
            ),
            (
                "zip",
                &self.zip,
                vec![Rule::Required, Rule::Pattern(&ZIP_RE), Rule::MaxLength(30)],
            ),
            ("customer_id", &self.customer_id, vec![Rule::Required]),
        ]
    }
}

/// Accept a string, integer, or null and normalize to text.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl de::Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_owned())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> LocationDraft {
        LocationDraft {
            address: "221B Baker Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62704-1234".to_string(),
            customer_id: "1".to_string(),
        }
    }

    #[test]
    fn should_accept_valid_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn should_report_all_required_fields_when_draft_empty() {
        let errors = LocationDraft::default().validate().unwrap_err();
        assert_eq!(errors.field("address"), ["The address field is required."]);
        assert_eq!(errors.field("city"), ["The city field is required."]);
        assert_eq!(errors.field("state"), ["The state field is required."]);
        assert_eq!(errors.field("zip"), ["The zip field is required."]);
        assert_eq!(
            errors.field("customer_id"),
            ["The customer id field is required."]
        );
    }

    #[test]
    fn should_reject_letters_in_zip() {
        let draft = LocationDraft {
            zip: "AAAAAAAAAAAAAAAAAAAA".to_string(),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.field("zip"), ["The zip format is invalid."]);
    }

    #[test]
    fn should_report_only_length_for_too_long_numeric_zip() {
        let draft = LocationDraft {
            zip: "1".repeat(31),
            ..valid_draft()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.field("zip"),
            ["The zip must not be greater than 30 characters."]
        );
    }

    #[test]
    fn should_parse_customer_ref_when_numeric() {
        assert_eq!(valid_draft().customer_ref(), Some(CustomerId::from_i64(1)));
    }

    #[test]
    fn should_return_no_customer_ref_when_unparseable() {
        let draft = LocationDraft {
            customer_id: "1".repeat(256),
            ..valid_draft()
        };
        assert_eq!(draft.customer_ref(), None);
    }

    #[test]
    fn should_deserialize_customer_id_from_number_or_string() {
        let from_number: LocationDraft =
            serde_json::from_str(r#"{"customer_id": 7}"#).unwrap();
        assert_eq!(from_number.customer_id, "7");

        let from_string: LocationDraft =
            serde_json::from_str(r#"{"customer_id": "7"}"#).unwrap();
        assert_eq!(from_string.customer_id, "7");

        let from_null: LocationDraft =
            serde_json::from_str(r#"{"customer_id": null}"#).unwrap();
        assert_eq!(from_null.customer_id, "");
    }
}
