//! Record models for extracted business-card data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured contact record extracted from business-card text.
///
/// Every field is always present; a field the heuristics could not fill
/// is an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Person name.
    #[serde(default)]
    pub name: String,

    /// Business/company name.
    #[serde(default)]
    pub business: String,

    /// Street address.
    #[serde(default)]
    pub address: String,

    /// Contact phone number.
    #[serde(default, rename = "contactNo")]
    pub contact_no: String,

    /// Product or service description.
    #[serde(default, rename = "productService")]
    pub product_service: String,
}

impl ExtractionRecord {
    /// Field labels paired with their values, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("business", &self.business),
            ("address", &self.address),
            ("contact_no", &self.contact_no),
            ("product_service", &self.product_service),
        ]
    }

    /// True if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_empty())
    }
}

/// A saved record with its store-assigned identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntry {
    /// Identifier assigned by the store.
    pub id: u64,

    /// The extracted record.
    #[serde(flatten)]
    pub record: ExtractionRecord,

    /// When the entry was saved.
    pub saved_at: DateTime<Utc>,
}
