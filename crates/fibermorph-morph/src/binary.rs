//! Binary dilation with 3x3 kernels

use crate::MorphResult;
use crate::kernel::Kernel;
use fibermorph_core::BinaryImage;

/// Dilate a binary image with a 3x3 kernel
///
/// Each set input pixel turns on every output pixel covered by the kernel's
/// required cells when the kernel is centered on it. Pixels that would fall
/// outside the image are dropped.
///
/// # Errors
///
/// Propagates core errors from building the output image.
pub fn dilate(image: &BinaryImage, kernel: &Kernel) -> MorphResult<BinaryImage> {
    let (w, h) = (image.width() as i64, image.height() as i64);
    let offsets: Vec<_> = kernel.hit_offsets().collect();
    let mut data = vec![false; image.len()];

    for c in image.foreground_coords() {
        for &(dr, dc) in &offsets {
            let (r, col) = (c.row as i64 + dr, c.col as i64 + dc);
            if r >= 0 && r < h && col >= 0 && col < w {
                data[(r * w + col) as usize] = true;
            }
        }
    }

    Ok(BinaryImage::from_vec(image.width(), image.height(), data)?)
}

/// Dilate with the full 3x3 neighborhood
pub fn dilate_3x3(image: &BinaryImage) -> MorphResult<BinaryImage> {
    dilate(image, &Kernel::square())
}
