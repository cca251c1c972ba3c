// validate.rs — pure field validators. No side effects, no store access.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// True iff `email` looks like `local@domain.tld` — non-empty local part,
/// at least one dot in the domain, no whitespace.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Like [`validate_email`], but for call sites that want `?` control flow:
/// returns the normalized (trimmed, lowercased) address or a validation
/// error carrying a human-readable message.
pub fn validate_email_strict(email: &str) -> Result<String, ApiError> {
    if !validate_email(email) {
        return Err(ApiError::validation(format!(
            "invalid email format: {email}"
        )));
    }
    Ok(email.trim().to_ascii_lowercase())
}

/// True iff `age` is a plausible human age (0–150).
pub fn validate_age(age: u32) -> bool {
    age <= 150
}
