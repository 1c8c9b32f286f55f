//! Person-name line heuristic.

use super::patterns::{DIGIT, SPECIAL_CHARS};

/// Whether a line looks like a person name.
///
/// A candidate has a trimmed length strictly between 2 and 50 characters,
/// 1 to 4 whitespace-separated words, no digits, and no punctuation or
/// special characters.
pub fn is_name_candidate(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    if len <= 2 || len >= 50 {
        return false;
    }

    let words = line.split_whitespace().count();
    if !(1..=4).contains(&words) {
        return false;
    }

    !DIGIT.is_match(line) && !SPECIAL_CHARS.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_two_word_name() {
        assert!(is_name_candidate("John Smith"));
    }

    #[test]
    fn test_single_word_of_length_three_qualifies() {
        assert!(is_name_candidate("Ana"));
    }

    #[test]
    fn test_length_bounds_are_strict() {
        assert!(!is_name_candidate("Jo"));
        assert!(!is_name_candidate(&"a".repeat(50)));
        assert!(is_name_candidate(&"a".repeat(49)));
    }

    #[test]
    fn test_digits_disqualify() {
        assert!(!is_name_candidate("John3"));
    }

    #[test]
    fn test_punctuation_disqualifies() {
        assert!(!is_name_candidate("John Smith, PhD"));
        assert!(!is_name_candidate("john@example.com"));
    }

    #[test]
    fn test_too_many_words() {
        assert!(!is_name_candidate("one two three four five"));
    }
}
