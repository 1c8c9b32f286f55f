//! Business-name line heuristic.

use super::patterns::BUSINESS_KEYWORDS;

/// Whether a line looks like a business/company name.
///
/// A line qualifies when it contains a business-entity keyword (inc, ltd,
/// llc, ...) or its trimmed length is between 3 and 100 characters. The
/// length condition is nearly always true, so in practice the first
/// unconsumed line is chosen; legacy behavior, replicated deliberately.
pub fn is_business_candidate(line: &str) -> bool {
    let line = line.trim();
    if BUSINESS_KEYWORDS.is_match(line) {
        return true;
    }

    let len = line.chars().count();
    len > 3 && len < 100
}
