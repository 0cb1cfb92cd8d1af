//! Custom alias normalization.

/// Minimum length of a normalized alias.
pub const ALIAS_MIN_LEN: usize = 2;

/// Maximum length of a normalized alias.
pub const ALIAS_MAX_LEN: usize = 20;

/// Normalizes a user-provided alias.
///
/// Lowercases the input and strips every character outside `[a-z0-9-]`.
/// Length checking happens in the issuance service, against the *normalized*
/// value.
///
/// # Examples
///
/// ```
/// use neolink::utils::alias::normalize_alias;
///
/// assert_eq!(normalize_alias("My Cool Link!"), "mycoollink");
/// assert_eq!(normalize_alias("promo-2025"), "promo-2025");
/// ```
pub fn normalize_alias(alias: &str) -> String {
    alias
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Returns true when a normalized alias falls within the accepted length bound.
pub fn is_valid_alias_length(normalized: &str) -> bool {
    (ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&normalized.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_alias("MyLink"), "mylink");
    }

    #[test]
    fn test_normalize_strips_spaces_and_punctuation() {
        assert_eq!(normalize_alias("My Cool Link!"), "mycoollink");
    }

    #[test]
    fn test_normalize_keeps_hyphens_and_digits() {
        assert_eq!(normalize_alias("promo-2025"), "promo-2025");
    }

    #[test]
    fn test_normalize_strips_unicode() {
        assert_eq!(normalize_alias("café-link"), "caf-link");
    }

    #[test]
    fn test_normalize_empty_result() {
        assert_eq!(normalize_alias("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["My Cool Link!", "promo-2025", "a_b_c", "ALREADY-normal-1"] {
            let once = normalize_alias(input);
            assert_eq!(normalize_alias(&once), once);
        }
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_valid_alias_length(""));
        assert!(!is_valid_alias_length("a"));
        assert!(is_valid_alias_length("ab"));
        assert!(is_valid_alias_length(&"a".repeat(20)));
        assert!(!is_valid_alias_length(&"a".repeat(21)));
    }
}
