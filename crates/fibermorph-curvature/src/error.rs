//! Error types for fibermorph-curvature

use thiserror::Error;

/// Errors that can occur during curvature analysis
#[derive(Debug, Error)]
pub enum CurvatureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fibermorph_core::Error),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] fibermorph_io::IoError),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] fibermorph_region::RegionError),

    /// Morphology library error
    #[error("morph error: {0}")]
    Morph(#[from] fibermorph_morph::MorphError),

    /// Configuration violates an invariant
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for curvature operations
pub type CurvatureResult<T> = Result<T, CurvatureError>;
