//! fibermorph - Curvature analysis of fiber skeleton images
//!
//! # Overview
//!
//! fibermorph measures how curved the fibers in a skeletonized image are.
//! Each connected skeleton element is sampled with sliding windows, every
//! window is fitted with a circle, and the resulting curvatures are
//! summarized per element and per image.
//!
//! - Binary images, mask normalization and numeric series (crate root)
//! - PNG and CSV output ([`io`])
//! - Connected components and element extraction ([`region`])
//! - Kernel matching and skeleton pruning ([`morph`])
//! - Length correction, circle fitting and aggregation ([`curvature`])
//! - Multi-image batches ([`analyze_batch`])
//!
//! # Example
//!
//! ```
//! use fibermorph::{AnalysisConfig, BinaryImage, CurvatureAnalyzer, analyze_batch};
//!
//! let mut img = BinaryImage::new(60, 5).unwrap();
//! for col in 5..55 {
//!     img.set(2, col, true).unwrap();
//! }
//!
//! let config = AnalysisConfig::default()
//!     .with_resolution(1.0)
//!     .with_window_size(vec![10.0, 20.0]);
//! let analyzer = CurvatureAnalyzer::new(config).unwrap();
//!
//! let batch = analyze_batch(&analyzer, [("line".to_string(), img)]);
//! assert_eq!(batch.succeeded(), 1);
//! assert_eq!(batch.summary_rows().len(), 2);
//! ```

mod batch;
mod logging;

pub use batch::{
    BatchEntry, BatchResult, SUMMARY_FILE_NAME, analyze_batch, analyze_file_batch,
    analyze_image_file,
};
pub use logging::init_logging;

// Re-export core types (primary data structures used everywhere)
pub use fibermorph_core::*;

// Re-export the pipeline entry points
pub use fibermorph_curvature::{
    AnalysisConfig, CurvatureAnalyzer, CurvatureError, CurvatureResult, ImageAnalysis,
    ImageCurvatureSummary, WindowSpec, WindowUnit,
};

// Re-export domain crates as modules to avoid name conflicts
pub use fibermorph_curvature as curvature;
pub use fibermorph_io as io;
pub use fibermorph_morph as morph;
pub use fibermorph_region as region;
