//! fibermorph-core - Basic data structures for fiber skeleton analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the fibermorph workspace:
//!
//! - [`BinaryImage`] - Row-major boolean image holding a skeleton or mask
//! - [`Coord`] / [`BoundingBox`] - Integer pixel coordinates and regions
//! - [`Numa`] - Numeric series with quantile, median and trimming helpers
//! - [`normalize_orientation`] - Canonicalize mask polarity so the fiber
//!   pixels are the minority class
//!
//! # Example
//!
//! ```
//! use fibermorph_core::{BinaryImage, normalize_orientation};
//!
//! // A 3x3 image with a single background pixel is inverted on normalization
//! let values = [1u8, 1, 1, 1, 0, 1, 1, 1, 1];
//! let image = normalize_orientation(3, 3, &values).unwrap();
//! assert_eq!(image.count_foreground(), 1);
//! assert!(image.get(1, 1).unwrap());
//! ```

pub mod binary;
pub mod error;
pub mod geom;
pub mod numa;
pub mod orientation;

pub use binary::BinaryImage;
pub use error::{Error, Result};
pub use geom::{BoundingBox, Coord};
pub use numa::Numa;
pub use orientation::{BinaryValue, check_binary, normalize_orientation};
