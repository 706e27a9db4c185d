//! Error types for fibermorph-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fibermorph_core::Error),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] fibermorph_region::RegionError),

    /// Unknown kernel category name
    #[error("invalid kernel category '{0}': expected one of branch, mid, diag")]
    InvalidCategory(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
