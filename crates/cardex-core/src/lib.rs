//! Core library for business-card OCR text processing.
//!
//! This crate provides:
//! - Heuristic field extraction from raw OCR text (name, business, address,
//!   contact number, product/service)
//! - An in-memory record store with substring search
//! - Data models for extracted records and saved entries
//!
//! The OCR step itself (image to text) is an external collaborator; this
//! library starts from the recognized text.

pub mod error;
pub mod extract;
pub mod models;
pub mod store;

pub use error::{CardexError, Result, StoreError};
pub use extract::{CardParser, ExtractionResult, HeuristicCardParser};
pub use models::config::{CardexConfig, ExtractionConfig, StoreConfig};
pub use models::record::{ExtractionRecord, SavedEntry};
pub use store::RecordStore;
