//! Heuristic business-card parser.
//!
//! A single deterministic pass over the recognized text. Stages run in a
//! fixed order (phone, address, name, business, product/service) and share
//! a consumed-line set so that no line is claimed by more than one field.
//! Later stages only see lines left over by earlier ones, so the pass is a
//! greedy, non-backtracking partition of the lines.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::models::record::ExtractionRecord;

use super::normalize_whitespace;
use super::rules::{
    address::AddressExtractor,
    business::is_business_candidate,
    name::is_name_candidate,
    phone::PhoneExtractor,
    service::has_service_keyword,
    FieldExtractor,
};

/// Result of a card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: ExtractionRecord,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction warnings (one per field left empty).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
///
/// Parsing never fails: unmatched fields come back as empty strings, so the
/// contract is a plain value rather than a `Result`.
pub trait CardParser {
    /// Parse a record from raw OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based card parser.
pub struct HeuristicCardParser {
    /// Whether product/service falls back to the first leftover line when
    /// no service keyword matches.
    service_fallback: bool,
}

impl HeuristicCardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            service_fallback: true,
        }
    }

    /// Set the product/service fallback behavior.
    pub fn with_service_fallback(mut self, fallback: bool) -> Self {
        self.service_fallback = fallback;
        self
    }

    fn extract_phone(&self, text: &str, lines: &[String], consumed: &mut HashSet<usize>) -> String {
        let Some(m) = PhoneExtractor::new().extract(text) else {
            return String::new();
        };

        for (i, line) in lines.iter().enumerate() {
            if line.contains(&m.value) {
                consumed.insert(i);
            }
        }
        m.value
    }

    fn extract_address(
        &self,
        text: &str,
        lines: &[String],
        consumed: &mut HashSet<usize>,
    ) -> String {
        let Some(m) = AddressExtractor::new().extract(text) else {
            return String::new();
        };

        let needle = m.value.to_lowercase();
        for (i, line) in lines.iter().enumerate() {
            if line.to_lowercase().contains(&needle) {
                consumed.insert(i);
            }
        }
        m.value
    }

    fn extract_name(&self, lines: &[String], consumed: &mut HashSet<usize>) -> String {
        for (i, line) in lines.iter().enumerate() {
            if consumed.contains(&i) {
                continue;
            }
            if is_name_candidate(line) {
                consumed.insert(i);
                return line.clone();
            }
        }
        String::new()
    }

    fn extract_business(&self, lines: &[String], consumed: &mut HashSet<usize>) -> String {
        for (i, line) in lines.iter().enumerate() {
            if consumed.contains(&i) {
                continue;
            }
            if is_business_candidate(line) {
                consumed.insert(i);
                return line.clone();
            }
        }
        String::new()
    }

    fn extract_product_service(&self, lines: &[String], consumed: &HashSet<usize>) -> String {
        let remaining: Vec<&String> = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed.contains(i))
            .map(|(_, line)| line)
            .collect();

        if let Some(line) = remaining.iter().find(|l| has_service_keyword(l)) {
            return (*line).clone();
        }

        if self.service_fallback {
            if let Some(line) = remaining.first() {
                return (*line).clone();
            }
        }

        String::new()
    }
}

impl Default for HeuristicCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for HeuristicCardParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing card from {} characters of text", text.len());

        // Tokenize: trimmed, non-empty lines in original order. Indices into
        // this sequence are what the consumed-line set tracks.
        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        let mut consumed: HashSet<usize> = HashSet::new();
        let mut record = ExtractionRecord::default();

        record.contact_no = self.extract_phone(text, &lines, &mut consumed);
        record.address = self.extract_address(text, &lines, &mut consumed);
        record.name = self.extract_name(&lines, &mut consumed);
        record.business = self.extract_business(&lines, &mut consumed);
        record.product_service = self.extract_product_service(&lines, &consumed);

        // Normalize whitespace in every populated field.
        record.name = normalize_whitespace(&record.name);
        record.business = normalize_whitespace(&record.business);
        record.address = normalize_whitespace(&record.address);
        record.contact_no = normalize_whitespace(&record.contact_no);
        record.product_service = normalize_whitespace(&record.product_service);

        let warnings: Vec<String> = record
            .fields()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| format!("could not extract {}", field))
            .collect();

        debug!(
            "Extracted record for '{}' ({} of 5 fields, {} lines consumed)",
            record.name,
            5 - warnings.len(),
            consumed.len()
        );

        ExtractionResult {
            record,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ExtractionRecord {
        HeuristicCardParser::new().parse(text).record
    }

    #[test]
    fn test_parse_full_card() {
        let text = "John Smith\n\
                    Acme Solutions Inc\n\
                    123 Main Street, Springfield\n\
                    +1 555-234-5678\n\
                    Custom Software Development";

        let record = parse(text);

        assert_eq!(record.name, "John Smith");
        assert_eq!(record.business, "Acme Solutions Inc");
        assert_eq!(record.address, "123 Main Street, Springfield");
        assert_eq!(record.contact_no, "+1 555-234-5678");
        assert_eq!(record.product_service, "Custom Software Development");
    }

    #[test]
    fn test_empty_input() {
        let result = HeuristicCardParser::new().parse("");
        assert!(result.record.is_empty());
        assert_eq!(result.warnings.len(), 5);
    }

    #[test]
    fn test_unstructured_input_never_fails() {
        let record = parse("@@@\n###\n!!");
        assert_eq!(record.name, "");
        assert_eq!(record.business, "");
        assert_eq!(record.contact_no, "");
        assert_eq!(record.address, "");
        // No stage claimed a line, so the fallback hands the first one to
        // product/service.
        assert_eq!(record.product_service, "@@@");
    }

    #[test]
    fn test_phone_precedence_over_position() {
        let record = parse("+1 (555) 123-4567\nJohn Smith");
        assert_eq!(record.contact_no, "+1 (555) 123-4567");
        assert_eq!(record.name, "John Smith");
    }

    #[test]
    fn test_phone_line_not_reused_as_name_or_business() {
        let record = parse("+1 555-234-5678");
        assert_eq!(record.contact_no, "+1 555-234-5678");
        assert_eq!(record.name, "");
        assert_eq!(record.business, "");
        assert_eq!(record.product_service, "");
    }

    #[test]
    fn test_consumed_lines_partition_disjointly() {
        let text = "John Smith\n\
                    Acme Solutions Inc\n\
                    123 Main Street\n\
                    +1 555-234-5678";

        let record = parse(text);
        let populated: Vec<&str> = [
            record.name.as_str(),
            record.business.as_str(),
            record.address.as_str(),
            record.contact_no.as_str(),
        ]
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect();

        // Four distinct lines, four distinct field values.
        assert_eq!(populated.len(), 4);
        for (i, a) in populated.iter().enumerate() {
            for b in populated.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_name_skips_consumed_address_line() {
        // The address sits on the first line; name must come from a later one.
        let record = parse("12 Oak Street\nJane Doe");
        assert_eq!(record.address, "12 Oak Street");
        assert_eq!(record.name, "Jane Doe");
    }

    #[test]
    fn test_first_qualifying_name_wins() {
        let record = parse("Jane Doe\nJohn Smith");
        assert_eq!(record.name, "Jane Doe");
        // The second qualifying line is left for the business stage.
        assert_eq!(record.business, "John Smith");
    }

    #[test]
    fn test_business_takes_first_unconsumed_line() {
        // No entity keyword anywhere; the length condition admits the first
        // line left over after the name stage.
        let record = parse("Jane Doe\nBlue Bottle Coffee");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.business, "Blue Bottle Coffee");
    }

    #[test]
    fn test_product_service_prefers_keyword_over_position() {
        let text = "Jane Doe\n\
                    Acme Inc\n\
                    Fine Woodwork\n\
                    Furniture repair and design";

        let record = parse(text);
        assert_eq!(record.product_service, "Furniture repair and design");
    }

    #[test]
    fn test_product_service_falls_back_to_first_leftover() {
        let record = parse("Jane Doe\nAcme Inc\nEst. MMXIV");
        assert_eq!(record.product_service, "Est. MMXIV");
    }

    #[test]
    fn test_service_fallback_can_be_disabled() {
        let parser = HeuristicCardParser::new().with_service_fallback(false);
        let record = parser.parse("Jane Doe\nAcme Inc\nEst. MMXIV").record;
        assert_eq!(record.product_service, "");
    }

    #[test]
    fn test_fields_are_whitespace_normalized() {
        let record = parse("Jane   Doe\nAcme    Solutions   Inc");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.business, "Acme Solutions Inc");
    }
}
