//! Skeleton pruning
//!
//! Skeletonization leaves short spurs and junction clusters wherever fibers
//! cross or touch. Pruning removes a 3x3 neighborhood around every branch
//! point, which splits the skeleton into unbranched pieces, and then drops
//! the fragments that are too small to measure.

use crate::MorphResult;
use crate::binary::dilate_3x3;
use crate::hitmiss::match_kernels;
use crate::kernel::KernelSet;
use fibermorph_core::{BinaryImage, check_binary};
use fibermorph_region::remove_small_objects;

/// Fragments smaller than this many pixels are removed after pruning
pub const PRUNE_MIN_AREA: usize = 5;

/// Output of [`prune_skeleton`]
#[derive(Debug, Clone, PartialEq)]
pub struct PruneResult {
    /// Pruned skeleton, same shape as the input
    pub skeleton: BinaryImage,
    /// Centroids `(row, col)` of the detected branch-point clusters
    pub branch_points: Vec<(f64, f64)>,
}

/// Remove branch points and small fragments from a skeleton
///
/// Steps:
/// 1. Normalize orientation so the skeleton is the minority class
/// 2. Match the branch kernels
/// 3. Dilate the matches with a full 3x3 neighborhood
/// 4. Subtract the dilated matches from the skeleton
/// 5. Remove 8-connected fragments below [`PRUNE_MIN_AREA`] pixels
///
/// The pixel count never increases. A skeleton without branch points only
/// loses its sub-threshold fragments.
///
/// # Errors
///
/// Propagates core and region errors.
pub fn prune_skeleton(skeleton: &BinaryImage) -> MorphResult<PruneResult> {
    let skeleton = check_binary(skeleton);
    let branches = match_kernels(&skeleton, KernelSet::Branch.kernels())?;
    let branch_zone = dilate_3x3(&branches.mask)?;
    let trimmed = skeleton.subtract(&branch_zone)?;
    let pruned = remove_small_objects(&trimmed, PRUNE_MIN_AREA)?;

    tracing::debug!(
        branch_points = branches.centroids.len(),
        before = skeleton.count_foreground(),
        after = pruned.count_foreground(),
        "pruned skeleton"
    );

    Ok(PruneResult {
        skeleton: pruned,
        branch_points: branches.centroids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus(size: u32, arm: u32) -> BinaryImage {
        let c = size / 2;
        let mut img = BinaryImage::new(size, size).unwrap();
        for d in 0..=2 * arm {
            img.set(c, c - arm + d, true).unwrap();
            img.set(c - arm + d, c, true).unwrap();
        }
        img
    }

    #[test]
    fn test_cross_splits_into_arms() {
        let img = plus(21, 8);
        assert_eq!(img.count_foreground(), 33);
        let result = prune_skeleton(&img).unwrap();
        // Center and two pixels of each arm fall inside the branch zone
        assert_eq!(result.skeleton.count_foreground(), 33 - 9);
        assert_eq!(result.branch_points, vec![(10.0, 10.0)]);
        assert!(!result.skeleton.get(10, 10).unwrap());
    }

    #[test]
    fn test_unbranched_line_kept() {
        let mut img = BinaryImage::new(20, 5).unwrap();
        for col in 2..18 {
            img.set(2, col, true).unwrap();
        }
        let result = prune_skeleton(&img).unwrap();
        assert_eq!(result.skeleton, img);
        assert!(result.branch_points.is_empty());
    }

    #[test]
    fn test_short_fragments_dropped() {
        let mut img = BinaryImage::new(20, 5).unwrap();
        for col in 0..4 {
            img.set(0, col, true).unwrap();
        }
        for col in 8..18 {
            img.set(3, col, true).unwrap();
        }
        let result = prune_skeleton(&img).unwrap();
        assert_eq!(result.skeleton.count_foreground(), 10);
    }

    #[test]
    fn test_inverted_input_is_normalized() {
        let img = plus(21, 8);
        let result = prune_skeleton(&img.invert()).unwrap();
        assert_eq!(result.skeleton.count_foreground(), 24);
    }
}
