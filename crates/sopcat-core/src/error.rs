//! # Error Hierarchy
//!
//! Structured error types for the SOPCAT stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The query layer itself is total: lookups that can legitimately miss
//! return `Option`, and degenerate pagination input is clamped rather
//! than rejected. Errors here belong to the population path — reading,
//! parsing, and validating the catalog bundle.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while populating or validating the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the bundle file failed.
    #[error("failed to read catalog bundle at {path}: {source}")]
    BundleRead {
        /// Path to the bundle file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Parsing the bundle JSON failed.
    #[error("failed to parse catalog bundle at {path}: {source}")]
    BundleParse {
        /// Path to the bundle file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Two categories share an id.
    #[error("duplicate category id {id}")]
    DuplicateCategoryId {
        /// The duplicated id.
        id: i64,
    },

    /// Two categories share a category_code.
    #[error("duplicate category code {code:?}")]
    DuplicateCategoryCode {
        /// The duplicated code.
        code: String,
    },

    /// Two procedures share an id.
    #[error("duplicate procedure id {id}")]
    DuplicateProcedureId {
        /// The duplicated id.
        id: i64,
    },

    /// Two procedures share a sop_number.
    #[error("duplicate sop_number {sop_number:?}")]
    DuplicateSopNumber {
        /// The duplicated code.
        sop_number: String,
    },

    /// A status string outside the closed vocabulary.
    #[error("unknown procedure status: {value:?}")]
    UnknownStatus {
        /// The rejected input.
        value: String,
    },

    /// A priority string outside the closed vocabulary.
    #[error("unknown priority level: {value:?}")]
    UnknownPriority {
        /// The rejected input.
        value: String,
    },

    /// I/O error not tied to a specific bundle path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error not tied to a specific bundle path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
