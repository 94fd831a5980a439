//! Field validation engine.
//!
//! Rule sets are declared as data: each field carries an ordered list of
//! [`Rule`]s, and every rule is evaluated so all violations for a field are
//! collected, not just the first. Message ordering follows rule declaration
//! order. Rules other than [`Rule::Required`] skip empty values, so an empty
//! field reports a single required-field message.
//!
//! Store-backed rules (uniqueness, referential existence) cannot be checked
//! here; the application services run them through the repository ports and
//! append their violations with [`taken_message`] / [`invalid_selection_message`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The HTML5 email pattern: liberal local part, dot-separated labels.
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid regex")
});

/// A single validation rule applied to one field's submitted value.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be present and non-empty.
    Required,
    /// Value must not exceed the given number of characters.
    MaxLength(usize),
    /// Value must be a syntactically valid email address.
    Email,
    /// Value must fully match the given anchored pattern.
    Pattern(&'static Regex),
}

/// Per-field violation messages, ordered by rule declaration order.
///
/// Serializes as a JSON object mapping field name to message list, the shape
/// the API returns under `errors`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Append a violation message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// True when no violation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded messages for `field`, empty when the field is clean.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Names of the fields with at least one violation.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed on: ")?;
        for (index, field) in self.errors.keys().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Evaluate `rules` against `value`, appending violations to `errors`.
///
/// `value` is the submitted text, with a missing field normalized to the
/// empty string by the draft types.
pub fn check_field(errors: &mut ValidationErrors, field: &str, value: &str, rules: &[Rule]) {
    for rule in rules {
        match rule {
            Rule::Required => {
                if value.is_empty() {
                    errors.add(field, required_message(field));
                }
            }
            Rule::MaxLength(max) => {
                if !value.is_empty() && value.chars().count() > *max {
                    errors.add(field, max_length_message(field, *max));
                }
            }
            Rule::Email => {
                if !value.is_empty() && !EMAIL_RE.is_match(value) {
                    errors.add(field, email_message(field));
                }
            }
            Rule::Pattern(pattern) => {
                if !value.is_empty() && !pattern.is_match(value) {
                    errors.add(field, pattern_message(field));
                }
            }
        }
    }
}

/// Human-readable field label: underscores become spaces.
fn label(field: &str) -> String {
    field.replace('_', " ")
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", label(field))
}

fn max_length_message(field: &str, max: usize) -> String {
    format!(
        "The {} must not be greater than {max} characters.",
        label(field)
    )
}

fn email_message(field: &str) -> String {
    format!("The {} must be a valid email address.", label(field))
}

fn pattern_message(field: &str) -> String {
    format!("The {} format is invalid.", label(field))
}

/// Message for a value that violates a uniqueness rule.
#[must_use]
pub fn taken_message(field: &str) -> String {
    format!("The {} has already been taken.", label(field))
}

/// Message for a value that fails a referential-existence rule.
#[must_use]
pub fn invalid_selection_message(field: &str) -> String {
    format!("The selected {} is invalid.", label(field))
}
