//! Rule-based field extractors for business-card text.

pub mod address;
pub mod business;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod service;

pub use address::{extract_address, AddressExtractor};
pub use business::is_business_candidate;
pub use name::is_name_candidate;
pub use patterns::*;
pub use phone::{extract_phone, PhoneExtractor};
pub use service::has_service_keyword;

/// Trait for whole-text field extractors.
///
/// Used by the stages that scan the full text rather than individual lines
/// (phone and address). First match wins; there is no ranking among
/// candidates.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with its location in the source text.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value, trimmed.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched, untrimmed.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
