//! Shared string classifiers used by token synthesis and the sanity check

use once_cell::sync::Lazy;
use regex::Regex;

// '[^\W\d_]' is "any Unicode letter, but not digits or underscore".
static WORD_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\W\d_]{3,}$").unwrap());

static SHORT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d{1,3}\s*$").unwrap());

static ALL_NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\D+$").unwrap());

/// A token of 3+ letters and nothing else. Such tokens are usually brand or
/// line words rather than part of the model identifier proper.
pub fn is_word_like(token: &str) -> bool {
    WORD_LIKE.is_match(token)
}

/// A bare 1-3 digit number, possibly surrounded by whitespace. Too weak to
/// stand alone as evidence of a match.
pub fn is_short_number(text: &str) -> bool {
    SHORT_NUMBER.is_match(text)
}

/// True when the model contains no digits at all.
pub fn has_no_digits(model: &str) -> bool {
    ALL_NON_DIGIT.is_match(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_like() {
        assert!(is_word_like("powershot"));
        assert!(is_word_like("für"));
        assert!(!is_word_like("ab"));
        assert!(!is_word_like("sd600"));
        assert!(!is_word_like("a_b_c"));
        assert!(!is_word_like(""));
    }

    #[test]
    fn test_short_number() {
        assert!(is_short_number("7"));
        assert!(is_short_number(" 300 "));
        assert!(is_short_number("999"));
        assert!(!is_short_number("1000"));
        assert!(!is_short_number("30d"));
        assert!(!is_short_number(""));
    }

    #[test]
    fn test_has_no_digits() {
        assert!(has_no_digits("mark-ii"));
        assert!(!has_no_digits("sd600"));
        assert!(!has_no_digits(""));
    }
}
