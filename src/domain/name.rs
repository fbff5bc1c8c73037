//! # Name Validation
//!
//! Pure syntactic validation of candidate mailbox names, evaluated before
//! any availability lookup so a malformed name never costs a network
//! round-trip.

/// Minimum accepted name length in characters.
pub const MIN_NAME_LEN: usize = 8;

/// Validate a candidate mailbox name.
///
/// A name is valid iff it is at least [`MIN_NAME_LEN`] characters long and
/// every character is in `[a-zA-Z0-9_-]`. Pure and deterministic.
pub fn is_valid_name(candidate: &str) -> bool {
    candidate.len() >= MIN_NAME_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_alphanumeric_chars_is_valid() {
        assert!(is_valid_name("abcdefgh"));
    }

    #[test]
    fn test_short_names_rejected() {
        assert!(!is_valid_name("abc"));
        assert!(!is_valid_name("abcdefg")); // 7 chars, one short
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_charset() {
        assert!(is_valid_name("user_name-01"));
        assert!(is_valid_name("ABCdef123"));
        assert!(!is_valid_name("abc$%"));
        assert!(!is_valid_name("with spaces here"));
        assert!(!is_valid_name("dotted.name"));
        // bad character rejected regardless of length
        assert!(!is_valid_name("averyverylongname!"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_name("постовойящик"));
        assert!(!is_valid_name("mailbox\u{00e9}"));
    }
}
