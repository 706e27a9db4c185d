//! Binary orientation normalization
//!
//! Masks reach the analysis with either polarity depending on how they were
//! thresholded and saved. Skeleton pixels are always the minority class, so
//! the class with more pixels is taken to be background. After
//! normalization `count(true) <= count(false)` holds, which makes every
//! later kernel match independent of the incoming polarity.

use crate::binary::BinaryImage;
use crate::error::{Error, Result};

/// A pixel value that can be read as binary (nonzero = foreground)
pub trait BinaryValue: Copy + PartialEq {
    /// Whether the value counts as set
    fn is_set(self) -> bool;
}

impl BinaryValue for bool {
    #[inline]
    fn is_set(self) -> bool {
        self
    }
}

macro_rules! impl_binary_value {
    ($($t:ty),*) => {
        $(
            impl BinaryValue for $t {
                #[inline]
                fn is_set(self) -> bool {
                    self != 0 as $t
                }
            }
        )*
    };
}

impl_binary_value!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Count distinct values, stopping once more than two have been seen
fn distinct_values<T: BinaryValue>(values: &[T]) -> usize {
    let mut seen: Vec<T> = Vec::with_capacity(3);
    for &v in values {
        if !seen.contains(&v) {
            seen.push(v);
            if seen.len() > 2 {
                break;
            }
        }
    }
    seen.len()
}

/// Build a normalized binary image from a row-major matrix of any binary-like type
///
/// If the matrix holds more than two distinct values a warning is logged and
/// every nonzero value is treated as foreground. The result is inverted when
/// foreground outnumbers background.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `values.len() != width * height`
/// and [`Error::InvalidDimension`] for a zero-sized shape.
pub fn normalize_orientation<T: BinaryValue>(
    width: u32,
    height: u32,
    values: &[T],
) -> Result<BinaryImage> {
    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: values.len(),
        });
    }

    let distinct = distinct_values(values);
    if distinct > 2 {
        tracing::warn!(
            "image is not binarized: more than 2 distinct values present, treating nonzero as foreground"
        );
    } else if distinct < 2 {
        tracing::debug!("image holds a single value");
    }

    let data = values.iter().map(|&v| v.is_set()).collect();
    let image = BinaryImage::from_vec(width, height, data)?;
    Ok(check_binary(&image))
}

/// Normalize the polarity of an existing binary image
///
/// Returns a copy that is inverted if foreground outnumbers background.
pub fn check_binary(image: &BinaryImage) -> BinaryImage {
    let foreground = image.count_foreground();
    let background = image.len() - foreground;
    if foreground > background {
        tracing::debug!(foreground, background, "image orientation corrected");
        image.invert()
    } else {
        tracing::debug!("image orientation is correct");
        image.clone()
    }
}
