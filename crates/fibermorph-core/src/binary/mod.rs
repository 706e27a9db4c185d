//! BinaryImage - The boolean image container
//!
//! `BinaryImage` holds one boolean per pixel in row-major order. `true`
//! marks a foreground (fiber) pixel once the image has been normalized with
//! [`crate::normalize_orientation`].
//!
//! # Pixel addressing
//!
//! All accessors take `(row, col)` in that order, matching the coordinate
//! convention of [`Coord`]. Reads outside the image through
//! [`BinaryImage::get_or_background`] return `false`, which gives the
//! zero-padded boundary used by neighborhood operations.

mod ops;

use crate::error::{Error, Result};
use crate::geom::Coord;

/// Row-major boolean image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl BinaryImage {
    /// Create a new all-background image
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        })
    }

    /// Create an image from a row-major pixel buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image from rows of 0/1 values
    ///
    /// Any nonzero value becomes foreground. All rows must have equal length.
    ///
    /// ```
    /// use fibermorph_core::BinaryImage;
    ///
    /// let img = BinaryImage::from_rows(&[[0, 1, 0], [0, 1, 0]]).unwrap();
    /// assert_eq!(img.width(), 3);
    /// assert_eq!(img.count_foreground(), 2);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::DimensionMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row.iter().map(|&v| v != 0));
        }
        Self::from_vec(width as u32, height as u32, data)
    }

    /// Create an image of the given size with the listed pixels set
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any coordinate lies outside the image.
    pub fn from_coords<I>(width: u32, height: u32, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut img = Self::new(width, height)?;
        for c in coords {
            img.set(c.row, c.col, true)?;
        }
        Ok(img)
    }

    /// Image width (number of columns)
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height (number of rows)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed image; provided for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if two images have the same dimensions
    pub fn sizes_equal(&self, other: &BinaryImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Get a pixel, or `None` if out of bounds
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.data[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get a pixel with signed coordinates, treating the outside as background
    #[inline]
    pub fn get_or_background(&self, row: i64, col: i64) -> bool {
        if row < 0 || col < 0 || row >= self.height as i64 || col >= self.width as i64 {
            return false;
        }
        self.data[self.index(row as u32, col as u32)]
    }

    /// Set a pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside the image.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Raw row-major pixel data
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Consume the image and return its pixel buffer
    pub fn into_vec(self) -> Vec<bool> {
        self.data
    }

    /// One row of pixels
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = self.index(row, 0);
        Some(&self.data[start..start + self.width as usize])
    }

    /// Number of foreground pixels
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Number of background pixels
    pub fn count_background(&self) -> usize {
        self.len() - self.count_foreground()
    }

    /// Foreground pixel coordinates in raster (row-major) order
    pub fn foreground_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(idx, _)| Coord::new((idx / width) as u32, (idx % width) as u32))
    }
}
