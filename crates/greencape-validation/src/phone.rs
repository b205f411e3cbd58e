//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\s\-+()]{10,}$").expect("phone pattern is valid")
});

/// Validates phone number format
///
/// Accepts digits plus the usual formatting characters (whitespace, `-`, `+`,
/// parentheses) and requires at least 10 of them in total. Formatting
/// characters count towards the length, so `"(021) 555 0"` passes while
/// `"0215550"` does not.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
