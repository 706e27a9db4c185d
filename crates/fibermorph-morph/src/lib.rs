//! fibermorph-morph - Morphological operations on fiber skeletons
//!
//! This crate provides:
//!
//! - 3x3 structuring kernels grouped into the branch, mid and diag families
//! - Hit-and-miss matching of kernel families with match-region centroids
//! - Binary dilation with 3x3 kernels
//! - Skeleton pruning: removal of branch points and small fragments
//!
//! # Example
//!
//! ```
//! use fibermorph_core::BinaryImage;
//! use fibermorph_morph::{KernelSet, match_kernels, prune_skeleton};
//!
//! let mut img = BinaryImage::new(21, 21).unwrap();
//! for d in 2..19 {
//!     img.set(10, d, true).unwrap();
//!     img.set(d, 10, true).unwrap();
//! }
//!
//! let branches = match_kernels(&img, KernelSet::Branch.kernels()).unwrap();
//! assert_eq!(branches.centroids, vec![(10.0, 10.0)]);
//!
//! let pruned = prune_skeleton(&img).unwrap();
//! assert!(pruned.skeleton.count_foreground() < img.count_foreground());
//! ```

pub mod binary;
mod error;
pub mod hitmiss;
pub mod kernel;
pub mod prune;

pub use binary::{dilate, dilate_3x3};
pub use error::{MorphError, MorphResult};
pub use hitmiss::{HitMissMatch, hit_map, match_kernels, matches_at};
pub use kernel::{Kernel, KernelSet};
pub use prune::{PRUNE_MIN_AREA, PruneResult, prune_skeleton};
