//! Field extraction module.
//!
//! Converts raw OCR text from a photographed business card into an
//! [`ExtractionRecord`](crate::models::record::ExtractionRecord) using ordered
//! pattern and position heuristics.

mod parser;
pub mod rules;

pub use parser::{CardParser, ExtractionResult, HeuristicCardParser};

/// Collapse internal whitespace runs to single spaces and trim the ends.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs_and_trims() {
        assert_eq!(normalize_whitespace("  John   Smith \t"), "John Smith");
        assert_eq!(normalize_whitespace("one\ntwo"), "one two");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_whitespace("  Acme   Solutions  Inc ");
        assert_eq!(normalize_whitespace(&once), once);
    }
}
