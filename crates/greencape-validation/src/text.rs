//! Free-text validation functions

/// Minimum trimmed length for any name field
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum trimmed length for message bodies
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// Minimum trimmed length for the contact subject line
pub const SUBJECT_MIN_LENGTH: usize = 3;

/// True when nothing but whitespace was entered
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length after trimming, in UTF-16 code units so it agrees with the
/// browser's `String.length`
pub fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

/// Validates a person's name
///
/// Only the trimmed length is checked. Digits and punctuation are accepted.
pub fn validate_name(name: &str) -> bool {
    trimmed_len(name) >= NAME_MIN_LENGTH
}

/// Validates free text against a minimum trimmed length
pub fn validate_message(message: &str, min_len: usize) -> bool {
    trimmed_len(message) >= min_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[rstest]
    #[case("Jo", true)]
    #[case("  Jo  ", true)]
    #[case("J", false)]
    #[case(" J ", false)]
    #[case("", false)]
    #[case("42", true)]
    #[case("Zoë", true)]
    #[case("é", false)]
    #[case("😀", true)]
    #[case(" 🌱 ", true)]
    fn test_validate_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(validate_name(name), expected);
    }

    #[test]
    fn test_validate_message() {
        assert!(!validate_message("short", MESSAGE_MIN_LENGTH));
        assert!(validate_message("long enough", MESSAGE_MIN_LENGTH));
        assert!(!validate_message("   padded   ", MESSAGE_MIN_LENGTH));
        assert!(validate_message("0123456789", MESSAGE_MIN_LENGTH));

        assert!(validate_message("Hey", SUBJECT_MIN_LENGTH));
        assert!(!validate_message(" Hi ", SUBJECT_MIN_LENGTH));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Two code units, four bytes.
        assert_eq!(trimmed_len("éé"), 2);
        assert!(validate_name("éé"));

        // Astral characters take two units each.
        assert_eq!(trimmed_len("😀"), 2);
        assert!(validate_message("🌱🌱🌱🌱🌱", MESSAGE_MIN_LENGTH));
        assert!(!validate_message("🌱🌱🌱🌱", MESSAGE_MIN_LENGTH));
    }
}
