//! Field value validation
//!
//! Maps a raw form string plus a declared type name and required flag to a
//! [`ValidationOutcome`]. The engine is a fixed rule table: four field
//! types, each with one predicate and one rejection message. It is pure,
//! deterministic, and never panics; invalid values become data (a message
//! string), never errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Message for a required field submitted empty, regardless of type.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Fallback message for a recognized type missing from the message table.
/// Unreachable with the current type set; kept for table-miss parity.
const FALLBACK_MESSAGE: &str = "Invalid value";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\w.-]+@[\w.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

// ASCII digits only: `\d` would admit Unicode digits that the numeric
// conversion in the processor cannot parse.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("number pattern compiles")
});

/// Declared value types the validator knows how to check.
///
/// Type names arriving from input documents are plain strings; names that
/// resolve to none of these variants pass validation unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text, at least 3 characters after trimming.
    Text,
    /// `local-part@domain.tld`, final label at least 2 alphabetic chars.
    Email,
    /// Integer or decimal literal, optional sign, no exponent.
    Number,
    /// Exactly "yes" or "no", case-insensitive.
    YesNo,
}

impl FieldType {
    /// Resolve a declared type name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(FieldType::Text),
            "email" => Some(FieldType::Email),
            "number" => Some(FieldType::Number),
            "yesno" => Some(FieldType::YesNo),
            _ => None,
        }
    }

    /// Wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::YesNo => "yesno",
        }
    }

    /// Apply this type's predicate to a trimmed, non-empty value.
    fn check(&self, value: &str) -> bool {
        match self {
            FieldType::Text => value.chars().count() >= 3,
            FieldType::Email => EMAIL_RE.is_match(value),
            FieldType::Number => NUMBER_RE.is_match(value),
            FieldType::YesNo => {
                let lower = value.to_lowercase();
                lower == "yes" || lower == "no"
            }
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static field-name→type table for record-declared fields.
///
/// Field names not listed here default to [`FieldType::Text`].
pub const DEFAULT_FIELD_TYPES: &[(&str, FieldType)] = &[
    ("name", FieldType::Text),
    ("email", FieldType::Email),
    ("phone", FieldType::Number),
    ("available", FieldType::YesNo),
    ("skills", FieldType::Text),
];

/// Look up the declared type for a record field name.
pub fn declared_field_type(field: &str) -> FieldType {
    DEFAULT_FIELD_TYPES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, field_type)| *field_type)
        .unwrap_or(FieldType::Text)
}

/// Fixed rejection message for a declared type name.
///
/// The `options` entry has no corresponding validator wired up; it is kept
/// because existing form UIs reference it.
pub fn rejection_message(type_name: &str) -> &'static str {
    match type_name {
        "text" => "Must be at least 3 characters",
        "email" => "Enter a valid email address (e.g., user@example.com)",
        "number" => "Enter a valid number (integer or decimal)",
        "yesno" => "Answer must be Yes or No",
        "options" => "Select one of the allowed options",
        _ => FALLBACK_MESSAGE,
    }
}

/// Outcome of validating one submitted value.
///
/// `value` is always the trimmed raw string, accepted or not; numeric
/// conversion is the record processor's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the value passed its type's predicate.
    pub accepted: bool,
    /// The trimmed submitted value.
    pub value: String,
    /// Rejection message, empty when accepted.
    pub message: String,
}

impl ValidationOutcome {
    fn accepted(value: String) -> Self {
        Self {
            accepted: true,
            value,
            message: String::new(),
        }
    }

    fn rejected(value: String, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            value,
            message: message.into(),
        }
    }
}

/// Validate one raw submitted value against a declared type name.
///
/// `None` is treated as the empty string. Empty values are accepted exactly
/// when not required. Unrecognized type names pass through unconditionally;
/// an unknown type never blocks submission.
pub fn validate(raw: Option<&str>, type_name: &str, required: bool) -> ValidationOutcome {
    let value = raw.unwrap_or("").trim().to_string();

    if value.is_empty() {
        return if required {
            ValidationOutcome::rejected(value, REQUIRED_MESSAGE)
        } else {
            ValidationOutcome::accepted(value)
        };
    }

    let Some(field_type) = FieldType::from_name(type_name) else {
        return ValidationOutcome::accepted(value);
    };

    if field_type.check(&value) {
        ValidationOutcome::accepted(value)
    } else {
        ValidationOutcome::rejected(value, rejection_message(type_name))
    }
}
