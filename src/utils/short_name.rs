//! Short name rules.

/// Returns `true` when every character of `name` is alphanumeric or `-`.
///
/// Letters and digits from any script are accepted. The empty string is
/// rejected because `GET /` is the documentation redirect, not a mapping.
pub fn is_valid_short_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_digits_and_hyphens() {
        assert!(is_valid_short_name("abc"));
        assert!(is_valid_short_name("ABC123"));
        assert!(is_valid_short_name("my-link-2024"));
        assert!(is_valid_short_name("-"));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_valid_short_name("café"));
        assert!(is_valid_short_name("ссылка"));
    }

    #[test]
    fn test_rejects_space() {
        assert!(!is_valid_short_name("ab c"));
    }

    #[test]
    fn test_rejects_punctuation() {
        for name in ["a_b", "a/b", "a.b", "a?b", "a#b", "a%20b"] {
            assert!(!is_valid_short_name(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_short_name(""));
    }
}
