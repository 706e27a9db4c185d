//! fibermorph-curvature - Curvature measurement of fiber skeletons
//!
//! This crate provides:
//!
//! - **Length correction** - Pixel counts reweighted for diagonal runs
//! - **Window sampling** - Overlapping coordinate windows along an element
//! - **Circle fitting** - Taubin's algebraic fit, reported as curvature
//! - **Aggregation** - Trimmed per-element statistics and per-image rows
//! - **Pipeline** - [`CurvatureAnalyzer`], which runs pruning, labeling and
//!   aggregation for every configured window size and writes the tables
//!
//! # Example
//!
//! ```
//! use fibermorph_core::BinaryImage;
//! use fibermorph_curvature::{AnalysisConfig, CurvatureAnalyzer};
//!
//! let mut img = BinaryImage::new(60, 5).unwrap();
//! for col in 5..55 {
//!     img.set(2, col, true).unwrap();
//! }
//!
//! let config = AnalysisConfig::default()
//!     .with_resolution(1.0)
//!     .with_window_size(10.0);
//! let analyzer = CurvatureAnalyzer::new(config).unwrap();
//! let result = analyzer.analyze("line", &img).unwrap();
//!
//! let rows = result.summary_rows();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].id, "line_WindowSize-10px");
//! assert_eq!(rows[0].hair_count, 1);
//! assert!(rows[0].curv_mean_mean < 0.01);
//! ```

pub mod aggregate;
pub mod config;
mod error;
pub mod length;
pub mod pipeline;
pub mod taubin;
pub mod window;

pub use aggregate::{
    ElementCurvatureSummary, ElementSeries, ImageCurvatureSummary, TRIM_LOWER, TRIM_UPPER,
    WindowAnalysis, analyze_element, analyze_window, element_curvatures, summarize_image,
    summarize_series,
};
pub use config::{AnalysisConfig, WindowConfig, WindowSpec, WindowUnit};
pub use error::{CurvatureError, CurvatureResult};
pub use length::{LengthCorrection, pixel_length_correction};
pub use pipeline::{CurvatureAnalyzer, ImageAnalysis};
pub use taubin::{CircleFit, MIN_CURVATURE, PlanarPoint, fit_circle, taubin_curvature};
pub use window::{MIN_WINDOW_PX, Windows, sample};
