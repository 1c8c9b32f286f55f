//! Street address extraction.

use super::patterns::ADDRESS;
use super::{ExtractionMatch, FieldExtractor};

/// Street address extractor.
///
/// Matches a leading number followed eventually by a street-type keyword
/// (street, ave, rd, blvd, ...) on the same line.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ADDRESS
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().trim().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first address-shaped span from text, trimmed.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(text).map(|m| m.value)
}
