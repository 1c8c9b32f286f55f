//! Phone number extraction.
//!
//! Phone numbers are the most distinctively shaped token on a card, so this
//! stage runs before the weaker line heuristics and removes its lines from
//! consideration.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};

/// Phone number extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().trim().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first phone-shaped token from text, trimmed.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phone_international() {
        let text = "John Smith\n+1 (555) 123-4567\nSpringfield";
        assert_eq!(extract_phone(text), Some("+1 (555) 123-4567".to_string()));
    }

    #[test]
    fn test_extract_phone_plain_digits() {
        assert_eq!(extract_phone("call 5551234567 now"), Some("5551234567".to_string()));
    }

    #[test]
    fn test_short_digit_runs_do_not_match() {
        assert_eq!(extract_phone("Suite 42, Floor 3"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let text = "+1 555-234-5678\n+44 20 7946 0958";
        assert_eq!(extract_phone(text), Some("+1 555-234-5678".to_string()));
    }
}
