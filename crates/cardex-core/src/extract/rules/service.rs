//! Product/service description heuristic.

use super::patterns::SERVICE_KEYWORDS;

/// Whether a line mentions a product- or service-related keyword.
pub fn has_service_keyword(line: &str) -> bool {
    SERVICE_KEYWORDS.is_match(line)
}
