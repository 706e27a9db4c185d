//! fibermorph-region - Connected components of fiber skeletons
//!
//! This crate provides:
//!
//! - **Connected component labeling** - Union-Find labeling with 4- or
//!   8-connectivity, labels in raster order
//! - **Small object removal** - Clearing components below an area threshold
//! - **Element extraction** - Per-component coordinates, bounds and cropped
//!   masks for the curvature stage
//!
//! # Example
//!
//! ```
//! use fibermorph_core::BinaryImage;
//! use fibermorph_region::{extract_elements, remove_small_objects};
//!
//! let img = BinaryImage::from_rows(&[
//!     [1, 1, 1, 1, 1, 1, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 1],
//! ])
//! .unwrap();
//!
//! let cleaned = remove_small_objects(&img, 5).unwrap();
//! let elements = extract_elements(&cleaned).unwrap();
//! assert_eq!(elements.len(), 1);
//! assert_eq!(elements[0].area, 6);
//! ```

pub mod conncomp;
pub mod element;
pub mod error;

pub use conncomp::{
    ConnectedComponent, ConnectivityType, LabelMap, component_centroids,
    find_connected_components, label_connected_components, remove_small_objects,
};
pub use element::{ConnectedElement, extract_elements};
pub use error::{RegionError, RegionResult};
