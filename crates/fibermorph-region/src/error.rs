//! Error types for fibermorph-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fibermorph_core::Error),

    /// Label not present in the label map
    #[error("invalid label {label}: image has {count} components")]
    InvalidLabel { label: u32, count: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
