//! Pixel-length correction
//!
//! Counting skeleton pixels underestimates the length of slanted runs: a
//! diagonal step covers √2 pixel units and a knight-like step (one straight,
//! one diagonal) about √1.25. The correction reweights pixels matched by the
//! diag and mid kernel families accordingly.

use crate::CurvatureResult;
use fibermorph_core::BinaryImage;
use fibermorph_morph::{KernelSet, match_kernels};
use std::f64::consts::SQRT_2;

/// Breakdown of a corrected element length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthCorrection {
    /// Raw pixel count
    pub area: usize,
    /// Pixels inside diagonal runs
    pub n_diag: usize,
    /// Pixels at straight/diagonal transitions
    ///
    /// Counted independently of `n_diag`: a pixel matched by both families
    /// contributes to both.
    pub n_mid: usize,
}

impl LengthCorrection {
    /// Pixels counted at unit length, `area - n_diag - n_mid` floored at 0
    pub fn n_adjacent(&self) -> usize {
        self.area.saturating_sub(self.n_diag + self.n_mid)
    }

    /// Corrected length in pixels: `(area - n_diag - n_mid) + n_diag·√2 + n_mid·√1.25`
    ///
    /// The unit-length term is not floored, so pixels matched by both
    /// families add `√2 + √1.25 - 1`.
    pub fn length(&self) -> f64 {
        let adjacent = self.area as f64 - self.n_diag as f64 - self.n_mid as f64;
        adjacent + self.n_diag as f64 * SQRT_2 + self.n_mid as f64 * 1.25f64.sqrt()
    }
}

/// Corrected pixel length of a single skeleton element
///
/// `image` is the element's own mask (typically cropped to its bounding box)
/// and `area` its pixel count.
///
/// # Errors
///
/// Propagates morphology errors from kernel matching.
pub fn pixel_length_correction(image: &BinaryImage, area: usize) -> CurvatureResult<LengthCorrection> {
    let diag = match_kernels(image, KernelSet::Diag.kernels())?;
    let mid = match_kernels(image, KernelSet::Mid.kernels())?;

    let correction = LengthCorrection {
        area,
        n_diag: diag.count(),
        n_mid: mid.count(),
    };
    tracing::trace!(?correction, "pixel length correction");
    Ok(correction)
}
