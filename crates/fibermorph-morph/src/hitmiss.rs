//! Hit-and-miss matching of skeleton patterns
//!
//! A pixel matches a kernel when every required cell of the kernel lands on a
//! set pixel of the image, with the image zero-padded at the border. This is
//! the same as requiring the 3x3 correlation of image and kernel to equal the
//! kernel's pixel sum.

use crate::MorphResult;
use crate::kernel::Kernel;
use fibermorph_core::BinaryImage;
use fibermorph_region::{ConnectivityType, component_centroids, label_connected_components};

/// Result of matching a set of kernels against an image
#[derive(Debug, Clone, PartialEq)]
pub struct HitMissMatch {
    /// Union of the per-kernel match maps
    pub mask: BinaryImage,
    /// Mean `(row, col)` of each 8-connected component of `mask`, in label order
    pub centroids: Vec<(f64, f64)>,
}

impl HitMissMatch {
    /// Number of matched pixels
    pub fn count(&self) -> usize {
        self.mask.count_foreground()
    }
}

/// Test whether `kernel` matches `image` centered at `(row, col)`
#[inline]
pub fn matches_at(image: &BinaryImage, kernel: &Kernel, row: u32, col: u32) -> bool {
    kernel
        .hit_offsets()
        .all(|(dr, dc)| image.get_or_background(row as i64 + dr, col as i64 + dc))
}

/// Mark every pixel where `kernel` matches
///
/// # Errors
///
/// Propagates core errors from building the output image.
pub fn hit_map(image: &BinaryImage, kernel: &Kernel) -> MorphResult<BinaryImage> {
    hit_map_any(image, std::slice::from_ref(kernel))
}

fn hit_map_any(image: &BinaryImage, kernels: &[Kernel]) -> MorphResult<BinaryImage> {
    let (w, h) = (image.width(), image.height());
    let mut data = vec![false; image.len()];
    for (row, col) in image.foreground_coords().map(|c| (c.row, c.col)) {
        if kernels.iter().any(|k| matches_at(image, k, row, col)) {
            data[(row * w + col) as usize] = true;
        }
    }
    Ok(BinaryImage::from_vec(w, h, data)?)
}

/// Match a set of kernels and locate the matched regions
///
/// The per-kernel maps are OR-ed, the union is labeled with 8-connectivity and
/// the centroid of each component is reported. Centroids that are not finite
/// are left out.
///
/// # Errors
///
/// Propagates core errors from building the output image.
pub fn match_kernels(image: &BinaryImage, kernels: &[Kernel]) -> MorphResult<HitMissMatch> {
    // Every kernel requires its center pixel, so only set pixels can match
    debug_assert!(kernels.iter().all(|k| k.cells()[1][1] != 0));

    let mask = hit_map_any(image, kernels)?;
    let labels = label_connected_components(&mask, ConnectivityType::EightWay);
    let centroids = component_centroids(&labels);

    tracing::debug!(
        kernels = kernels.len(),
        matched = mask.count_foreground(),
        regions = centroids.len(),
        "hit-and-miss match"
    );

    Ok(HitMissMatch { mask, centroids })
}
