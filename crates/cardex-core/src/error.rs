//! Error types for the cardex-core library.
//!
//! Field extraction itself never fails; unmatched fields are simply left
//! empty. Errors exist only for the surrounding concerns: the record store,
//! configuration, and I/O.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the in-memory record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Attempted to save a record without a name.
    #[error("record has no name")]
    MissingName,
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
