// src/presentation/http/validation.rs
//! Decode-then-validate pipeline for JSON request bodies.
//!
//! Request types describe their constraints as a static [`FieldSchema`] list.
//! Every field is checked; within a field the first failing rule is the only
//! one reported, so an empty required field never also reports a length
//! violation.

use crate::presentation::http::error::{AppError, FieldViolation};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Minimum length in characters.
    Min(usize),
    /// Maximum length in characters.
    Max(usize),
    /// Exact length in characters.
    Len(usize),
    /// ASCII digits only.
    Numeric,
    Email,
}

impl Rule {
    pub fn tag(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Len(_) => "len",
            Rule::Numeric => "numeric",
            Rule::Email => "email",
        }
    }

    fn holds(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Min(n) => value.chars().count() >= n,
            Rule::Max(n) => value.chars().count() <= n,
            Rule::Len(n) => value.chars().count() == n,
            Rule::Numeric => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Rule::Email => value.to_owned().validate_email(),
        }
    }

    fn message(self, field: &str) -> String {
        match self {
            Rule::Required => format!("The field {field} is required"),
            Rule::Min(n) => format!("The field {field} must have at least {n} characters"),
            Rule::Max(n) => format!("The field {field} must have at most {n} characters"),
            Rule::Len(n) => format!("The field {field} must have exactly {n} characters"),
            Rule::Numeric => format!("The field {field} must contain only numbers"),
            Rule::Email => format!("The field {field} must be a valid email address"),
        }
    }
}

/// One declared field: its wire name, how to read it, and its rules in
/// evaluation order.
pub struct FieldSchema<T> {
    pub name: &'static str,
    pub value: fn(&T) -> &str,
    pub rules: &'static [Rule],
}

pub trait Validate: Sized + 'static {
    const SCHEMA: &'static [FieldSchema<Self>];
}

fn check_field<T>(payload: &T, field: &FieldSchema<T>) -> Option<FieldViolation> {
    let value = (field.value)(payload);
    field
        .rules
        .iter()
        .copied()
        .find(|rule| !rule.holds(value))
        .map(|rule| FieldViolation {
            field: field.name.to_string(),
            message: rule.message(field.name),
            rule: rule.tag().to_string(),
            value: value.to_string(),
        })
}

/// All violations, one per failing field, in schema order.
pub fn collect_violations<T: Validate>(payload: &T) -> Vec<FieldViolation> {
    T::SCHEMA
        .iter()
        .filter_map(|field| check_field(payload, field))
        .collect()
}

pub fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    let mut violations = collect_violations(payload);
    match violations.len() {
        0 => Ok(()),
        1 => {
            let violation = violations.remove(0);
            Err(AppError::validation(violation.field, violation.message))
        }
        _ => Err(AppError::multiple_validation(violations)),
    }
}

/// `deserialize_with` helper for string fields: JSON `null` reads as `""`, so
/// the `required` rule reports it rather than the decoder.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(AppError::invalid_json)
}

pub fn decode_and_validate<T>(body: &[u8]) -> Result<T, AppError>
where
    T: Validate + DeserializeOwned,
{
    let payload = decode::<T>(body)?;
    validate(&payload)?;
    Ok(payload)
}
