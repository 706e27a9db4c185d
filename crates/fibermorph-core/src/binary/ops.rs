//! Pixelwise logical operations and cropping

use super::BinaryImage;
use crate::error::{Error, Result};
use crate::geom::BoundingBox;

impl BinaryImage {
    /// Logical NOT of every pixel
    pub fn invert(&self) -> BinaryImage {
        BinaryImage {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| !v).collect(),
        }
    }

    /// Pixels set in `self` but not in `other` (`self AND NOT other`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the images differ in size.
    pub fn subtract(&self, other: &BinaryImage) -> Result<BinaryImage> {
        self.zip_with(other, |a, b| a && !b)
    }

    /// Pixelwise OR
    pub fn or(&self, other: &BinaryImage) -> Result<BinaryImage> {
        self.zip_with(other, |a, b| a || b)
    }

    /// Pixelwise AND
    pub fn and(&self, other: &BinaryImage) -> Result<BinaryImage> {
        self.zip_with(other, |a, b| a && b)
    }

    fn zip_with(&self, other: &BinaryImage, f: impl Fn(bool, bool) -> bool) -> Result<BinaryImage> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        Ok(BinaryImage {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Copy the pixels inside `region` into a new image
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the region is empty or extends
    /// past the image.
    pub fn crop(&self, region: &BoundingBox) -> Result<BinaryImage> {
        if region.width == 0
            || region.height == 0
            || region.max_row() > self.height
            || region.max_col() > self.width
        {
            return Err(Error::InvalidParameter(format!(
                "crop region {:?} outside {}x{} image",
                region, self.width, self.height
            )));
        }
        let mut data = Vec::with_capacity(region.area());
        for row in region.min_row..region.max_row() {
            let start = self.index(row, region.min_col);
            data.extend_from_slice(&self.data[start..start + region.width as usize]);
        }
        BinaryImage::from_vec(region.width, region.height, data)
    }
}
