//! Field rules shared by the create and update paths.
//!
//! Each helper either returns the cleaned value or an `AppError::Validation`
//! carrying the message clients see.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::types::error::AppError;

// ASCII-only classes: `\w` and `\d` must not match accented letters or
// non-latin digits.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$")
        .unicode(false)
        .build()
        .expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\d{10,}")
        .unicode(false)
        .build()
        .expect("valid phone regex")
});

/// A string counts as supplied when it is present and non-empty. Whitespace
/// only strings pass here and get caught by `required_trimmed`.
pub fn is_supplied(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Fails with the full required-field list if any check is false.
pub fn require_fields(
    checks: &[bool],
    required: &'static [&'static str],
) -> Result<(), AppError> {
    if checks.iter().all(|present| *present) {
        Ok(())
    } else {
        Err(AppError::MissingFields(required))
    }
}

pub fn required_trimmed(value: &str, message: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn required(value: String, message: &str) -> Result<String, AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(value)
}

pub fn non_negative(value: f64, message: &str) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(value)
}

pub fn stock(value: i64) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::Validation("Stock cannot be negative".to_string()));
    }
    i32::try_from(value).map_err(|_| AppError::Validation("Stock is too large".to_string()))
}

pub fn email(value: &str) -> Result<String, AppError> {
    let email = required_trimmed(value, "Email is required")?;
    if !EMAIL_RE.is_match(&email) {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }
    Ok(email)
}

/// Empty means "no phone". Anything else needs a run of ten digits.
pub fn phone(value: String) -> Result<String, AppError> {
    if value.is_empty() || PHONE_RE.is_match(&value) {
        Ok(value)
    } else {
        Err(AppError::Validation(format!(
            "{value} is not a valid phone number!"
        )))
    }
}
