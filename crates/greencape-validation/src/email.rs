//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

// Something, an @, something, a dot, something. No whitespace or second @ anywhere.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validates basic email shape
///
/// Deliberately loose: `a@b.c` passes, `user@localhost` does not. The value is
/// matched as given, so surrounding whitespace fails.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jo@x.com")]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("a@b.c")]
    #[case("weird!chars#@dom.ain")]
    #[case("user@sub.domain.org")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(validate_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("@")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("user@@example.com")]
    #[case("user@example")]
    #[case("user@example.")]
    #[case("user name@example.com")]
    #[case(" user@example.com")]
    #[case("user@example.com ")]
    #[case("user@exa mple.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!validate_email(email), "{email:?} should be rejected");
    }

    #[test]
    fn test_dot_directly_after_at_is_accepted() {
        // The domain part may itself start with a dot as long as a later dot follows.
        assert!(validate_email("user@.example.com"));
        assert!(!validate_email("user@.com"));
    }
}
