//! Common regex patterns for business-card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Phone: optional leading +, then at least 7 digits/spaces/hyphens/parens.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?[\d\s\-()]{7,}"
    ).unwrap();

    // Street address: leading number, eventually a street-type keyword.
    // No word boundaries around the keywords; legacy behavior.
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?i)\d+.*(?:street|st|avenue|ave|road|rd|lane|ln|drive|dr|way|place|pl|court|ct|circle|cir|boulevard|blvd).*"
    ).unwrap();

    // Business-entity keywords.
    pub static ref BUSINESS_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(?:inc|ltd|llc|corp|corporation|company|co|pvt|private|limited|solutions|services|technologies|tech|group|enterprises|consulting|consultancy)\b"
    ).unwrap();

    // Product/service keywords.
    pub static ref SERVICE_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(?:service|product|solution|software|hardware|development|design|consulting|marketing|sales|support|training|maintenance|repair|installation)\b"
    ).unwrap();

    // Title prefixes that typically accompany a person name. Recognized but
    // not currently consulted when ranking name candidates; kept for parity
    // with the legacy extractor.
    pub static ref TITLE_PREFIX: Regex = Regex::new(
        r"(?i)(?:mr|ms|mrs|dr|prof|ceo|cto|manager|director|president|founder)"
    ).unwrap();

    // Characters that disqualify a line as a name candidate.
    pub static ref SPECIAL_CHARS: Regex = Regex::new(
        r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#
    ).unwrap();

    pub static ref DIGIT: Regex = Regex::new(
        r"\d"
    ).unwrap();
}
