//! Numa - Numeric series
//!
//! An ordered array of `f64` values used for per-window curvature series and
//! per-element summaries. Statistics skip NaN entries, so a series that has
//! picked up undefined values still summarizes the values that are defined.
//!
//! Quantiles use linear interpolation between the two nearest ranks
//! (position `q * (n - 1)` in the sorted finite values), and the median of an
//! even-length series is the mean of the two middle values.

use crate::error::{Error, Result};

/// Array of floating-point numbers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Numa {
    data: Vec<f64>,
}

impl Numa {
    /// Create a new empty Numa
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a Numa with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a Numa from a vector of values
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Number of values, NaN included
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the series holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Append a value
    #[inline]
    pub fn push(&mut self, val: f64) {
        self.data.push(val);
    }

    /// Borrow the values
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume and return the values
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over values
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Values that are not NaN, in their original order
    pub fn non_nan(&self) -> Numa {
        self.iter().filter(|v| !v.is_nan()).collect()
    }

    /// Sum of the non-NaN values
    pub fn sum(&self) -> f64 {
        self.iter().filter(|v| !v.is_nan()).sum()
    }

    /// Mean of the non-NaN values, or `None` if there are none
    pub fn mean(&self) -> Option<f64> {
        let n = self.iter().filter(|v| !v.is_nan()).count();
        if n == 0 {
            return None;
        }
        Some(self.sum() / n as f64)
    }

    /// Non-NaN values sorted in increasing order
    fn sorted_non_nan(&self) -> Vec<f64> {
        let mut sorted: Vec<f64> = self.iter().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Value at quantile `q` in [0, 1], linearly interpolated
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] if there are no non-NaN values and
    /// [`Error::InvalidParameter`] if `q` lies outside [0, 1].
    pub fn quantile(&self, q: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(Error::InvalidParameter(format!(
                "quantile {q} not in [0.0, 1.0]"
            )));
        }
        let sorted = self.sorted_non_nan();
        quantile_sorted(&sorted, q).ok_or(Error::NullInput("empty Numa"))
    }

    /// Median of the non-NaN values
    pub fn median(&self) -> Result<f64> {
        let sorted = self.sorted_non_nan();
        let n = sorted.len();
        if n == 0 {
            return Err(Error::NullInput("empty Numa"));
        }
        if n % 2 == 1 {
            Ok(sorted[n / 2])
        } else {
            Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        }
    }

    /// Keep only values inside the inclusive band `[quantile(lower), quantile(upper)]`
    ///
    /// NaN values never fall inside the band. Order is preserved. An empty
    /// series trims to an empty series.
    ///
    /// ```
    /// use fibermorph_core::Numa;
    ///
    /// let mut values: Vec<f64> = (0..100).map(f64::from).collect();
    /// values.push(1.0e6);
    /// let trimmed = Numa::from_vec(values).trim_quantiles(0.01, 0.99).unwrap();
    /// assert!(trimmed.iter().all(|v| v < 1.0e6));
    /// assert!(!trimmed.iter().any(|v| v == 0.0));
    /// ```
    pub fn trim_quantiles(&self, lower: f64, upper: f64) -> Result<Numa> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower > upper {
            return Err(Error::InvalidParameter(format!(
                "quantile band [{lower}, {upper}] invalid"
            )));
        }
        let sorted = self.sorted_non_nan();
        let (Some(lo), Some(hi)) = (quantile_sorted(&sorted, lower), quantile_sorted(&sorted, upper))
        else {
            return Ok(Numa::new());
        };
        Ok(self.iter().filter(|&v| v >= lo && v <= hi).collect())
    }
}

fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

impl FromIterator<f64> for Numa {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<f64>> for Numa {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl std::ops::Index<usize> for Numa {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_skips_nan() {
        let na = Numa::from_vec(vec![1.0, f64::NAN, 3.0]);
        assert_eq!(na.mean(), Some(2.0));
        assert_eq!(na.non_nan().len(), 2);
        assert_eq!(Numa::new().mean(), None);
        assert_eq!(Numa::from_vec(vec![f64::NAN]).mean(), None);
    }

    #[test]
    fn test_median_odd_even() {
        assert_eq!(Numa::from_vec(vec![3.0, 1.0, 2.0]).median().unwrap(), 2.0);
        assert_eq!(Numa::from_vec(vec![4.0, 1.0, 2.0, 3.0]).median().unwrap(), 2.5);
        assert!(Numa::new().median().is_err());
    }

    #[test]
    fn test_quantile_interpolates() {
        let na: Numa = (0..=10).map(f64::from).collect();
        assert_eq!(na.quantile(0.0).unwrap(), 0.0);
        assert_eq!(na.quantile(1.0).unwrap(), 10.0);
        assert!((na.quantile(0.25).unwrap() - 2.5).abs() < 1e-12);
        let na = Numa::from_vec(vec![0.0, 1.0]);
        assert!((na.quantile(0.01).unwrap() - 0.01).abs() < 1e-12);
        assert!(na.quantile(1.5).is_err());
    }

    #[test]
    fn test_trim_removes_extremes_of_long_series() {
        // 0..=200: q01 = 2.0, q99 = 198.0
        let na: Numa = (0..=200).map(f64::from).collect();
        let trimmed = na.trim_quantiles(0.01, 0.99).unwrap();
        assert_eq!(trimmed.len(), 197);
        assert_eq!(trimmed.get(0), Some(2.0));
        assert_eq!(trimmed.get(196), Some(198.0));
    }

    #[test]
    fn test_trim_short_series_keeps_interior() {
        // With two values the band is [0.01, 0.99] and both endpoints fall out
        let na = Numa::from_vec(vec![0.0, 1.0]);
        assert!(na.trim_quantiles(0.01, 0.99).unwrap().is_empty());
        // Constant series is never trimmed
        let na = Numa::from_vec(vec![0.5; 7]);
        assert_eq!(na.trim_quantiles(0.01, 0.99).unwrap().len(), 7);
    }

    #[test]
    fn test_trim_preserves_order_and_drops_nan() {
        let na = Numa::from_vec(vec![5.0, f64::NAN, 1.0, 3.0]);
        let trimmed = na.trim_quantiles(0.0, 1.0).unwrap();
        assert_eq!(trimmed.as_slice(), &[5.0, 1.0, 3.0]);
        assert!(na.trim_quantiles(0.9, 0.1).is_err());
    }
}
