//! Declarative field rules and schema validation.
//!
//! Each field lists its rules in order; the first rule that fails supplies
//! that field's message. Fields are independent, so one pass reports every
//! failing field at once.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::store::{ErrorMap, FieldValues};

// A pattern that fails to compile matches nothing, so its rule always fails.
static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
});

static WORD_CHARS: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$"));

fn pattern_matches(pattern: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(value))
}

// =============================================================================
// RULES
// =============================================================================

/// A single constraint on a field value, carrying the message shown when it fails.
///
/// Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least one character.
    Required(&'static str),
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    /// Plausible email-address shape.
    Email(&'static str),
    /// Only ASCII letters, digits and underscore (and at least one of them).
    WordChars(&'static str),
    /// Contains a lowercase letter, an uppercase letter and a digit, anywhere.
    MixedCaseAndDigit(&'static str),
}

impl Rule {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required(msg)
            | Self::MinChars(_, msg)
            | Self::MaxChars(_, msg)
            | Self::Email(msg)
            | Self::WordChars(msg)
            | Self::MixedCaseAndDigit(msg) => *msg,
        }
    }

    /// Whether `value` satisfies this rule.
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Required(_) => !value.is_empty(),
            Self::MinChars(min, _) => value.chars().count() >= *min,
            Self::MaxChars(max, _) => value.chars().count() <= *max,
            Self::Email(_) => is_email_shape(value),
            Self::WordChars(_) => pattern_matches(&WORD_CHARS, value),
            Self::MixedCaseAndDigit(_) => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
                    && value.chars().any(|c| c.is_ascii_digit())
            }
        }
    }
}

/// Email shape check: no leading dot, no consecutive dots, then
/// `local@label.label...tld` with a two-plus letter TLD.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && pattern_matches(&EMAIL_SHAPE, value)
}

// =============================================================================
// SCHEMA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Trim surrounding whitespace before checking; the trimmed value is what
    /// gets submitted.
    pub trim: bool,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    #[must_use]
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        if self.trim { raw.trim() } else { raw }
    }

    /// Message of the first failing rule, if any.
    #[must_use]
    pub fn first_violation(&self, value: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| !rule.check(value))
            .map(Rule::message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let fields: &'static [FieldSpec] = self.fields;
        fields.iter().map(|field| field.name)
    }

    /// Check every declared field.
    ///
    /// Missing values are treated as empty.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field when any rule is violated.
    pub fn validate(&self, values: &FieldValues) -> Result<ValidatedData, ErrorMap> {
        let mut data = BTreeMap::new();
        let mut errors = ErrorMap::new();

        for field in self.fields {
            let value = field.normalize(values.get(field.name).unwrap_or_default());
            match field.first_violation(value) {
                Some(message) => {
                    errors.insert(field.name, message.to_owned());
                }
                None => {
                    data.insert(field.name, value.to_owned());
                }
            }
        }

        if errors.is_empty() { Ok(ValidatedData(data)) } else { Err(errors) }
    }
}

/// Normalized field values that passed validation; serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidatedData(BTreeMap<&'static str, String>);

impl ValidatedData {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
