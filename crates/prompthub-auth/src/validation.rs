//! Field validators
//!
//! Pure, total checks re-run on every keystroke of the relevant field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::limits::MIN_PASSWORD_LEN;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Basic `local@domain.tld` shape check. Blank input is invalid.
pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// At least 8 characters with one ASCII letter and one ASCII digit.
pub fn is_valid_password(password: &str) -> bool {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    long_enough && has_digit && has_letter
}
