//! Curvature aggregation: window → element → image
//!
//! For one window size, every element longer than the window is sampled,
//! each window is fitted with [`taubin_curvature`], the raw series is trimmed
//! to its 1st–99th percentile band and summarized. Element summaries are
//! then reduced to one image row.

use crate::config::WindowConfig;
use crate::error::CurvatureResult;
use crate::length::pixel_length_correction;
use crate::taubin::taubin_curvature;
use crate::window::sample;
use fibermorph_core::Numa;
use fibermorph_region::ConnectedElement;
use serde::Serialize;

/// Lower bound of the retained percentile band
pub const TRIM_LOWER: f64 = 0.01;
/// Upper bound of the retained percentile band
pub const TRIM_UPPER: f64 = 0.99;

/// Curvature statistics of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementCurvatureSummary {
    /// Element label
    pub label: u32,
    /// Mean of the trimmed curvature series
    pub curv_mean: f64,
    /// Median of the trimmed curvature series
    pub curv_median: f64,
    /// Corrected length in physical units
    pub length: f64,
}

impl ElementCurvatureSummary {
    /// Row of the element table: `curv_mean, curv_median, length`
    pub fn record(&self) -> (f64, f64, f64) {
        (self.curv_mean, self.curv_median, self.length)
    }

    fn is_finite(&self) -> bool {
        self.curv_mean.is_finite() && self.curv_median.is_finite() && self.length.is_finite()
    }
}

/// Curvature statistics of one image for one window size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageCurvatureSummary {
    #[serde(rename = "ID")]
    pub id: String,
    pub curv_mean_mean: f64,
    pub curv_mean_median: f64,
    pub curv_median_mean: f64,
    pub curv_median_median: f64,
    pub length_mean: f64,
    pub length_median: f64,
    pub hair_count: usize,
}

/// Raw (untrimmed) curvature series of one element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSeries {
    pub label: u32,
    pub curvatures: Numa,
}

/// Result of analyzing one image at one window size
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAnalysis {
    /// Window that produced this result
    pub window: WindowConfig,
    /// Output id `{name}_WindowSize-{size}{unit}`
    pub id: String,
    /// Window length in pixels
    pub window_px: usize,
    /// Summaries of the qualifying elements, in label order
    pub elements: Vec<ElementCurvatureSummary>,
    /// Raw per-element series, filled only when requested
    pub series: Vec<ElementSeries>,
    /// Image row, `None` when no element qualified
    pub summary: Option<ImageCurvatureSummary>,
}

/// Curvature series of one element: one value per window, untrimmed
pub fn element_curvatures(element: &ConnectedElement, window_px: usize, resolution: f64) -> Numa {
    sample(element.area, window_px, &element.coords)
        .map(|window| taubin_curvature(window, resolution))
        .collect()
}

/// Summarize a curvature series together with the element's length
///
/// Returns `None` if nothing survives trimming.
///
/// # Errors
///
/// Propagates core errors from the quantile computation.
pub fn summarize_series(
    label: u32,
    series: &Numa,
    length: f64,
) -> CurvatureResult<Option<ElementCurvatureSummary>> {
    let trimmed = series.trim_quantiles(TRIM_LOWER, TRIM_UPPER)?;
    let Some(curv_mean) = trimmed.mean() else {
        return Ok(None);
    };
    let curv_median = trimmed.median()?;
    Ok(Some(ElementCurvatureSummary {
        label,
        curv_mean,
        curv_median,
        length,
    }))
}

/// Analyze one element; returns its summary and raw series
///
/// # Errors
///
/// Propagates errors from length correction and trimming.
pub fn analyze_element(
    element: &ConnectedElement,
    window_px: usize,
    resolution: f64,
) -> CurvatureResult<(Option<ElementCurvatureSummary>, Numa)> {
    let length = pixel_length_correction(&element.image, element.area)?.length() / resolution;
    let series = element_curvatures(element, window_px, resolution);
    let summary = summarize_series(element.label, &series, length)?;
    Ok((summary, series))
}

/// Reduce element summaries to one image row
///
/// Returns `None` for an empty slice.
pub fn summarize_image(
    id: &str,
    elements: &[ElementCurvatureSummary],
) -> Option<ImageCurvatureSummary> {
    if elements.is_empty() {
        return None;
    }
    let column = |f: fn(&ElementCurvatureSummary) -> f64| -> Numa {
        elements.iter().map(f).collect()
    };
    let stats = |n: Numa| (n.mean().unwrap_or(f64::NAN), n.median().unwrap_or(f64::NAN));

    let (curv_mean_mean, curv_mean_median) = stats(column(|e| e.curv_mean));
    let (curv_median_mean, curv_median_median) = stats(column(|e| e.curv_median));
    let (length_mean, length_median) = stats(column(|e| e.length));

    Some(ImageCurvatureSummary {
        id: id.to_string(),
        curv_mean_mean,
        curv_mean_median,
        curv_median_mean,
        curv_median_median,
        length_mean,
        length_median,
        hair_count: elements.len(),
    })
}

/// Analyze all elements of an image at one window size
///
/// Returns `None`, with a warning, when the window size is missing. Elements
/// the window does not admit (see [`WindowConfig::admits`]) are skipped, as
/// are elements whose summary is not finite. When `keep_series` is set, the raw series of every analyzed
/// element is retained.
///
/// # Errors
///
/// Propagates errors from element analysis.
pub fn analyze_window(
    name: &str,
    elements: &[ConnectedElement],
    window: &WindowConfig,
    keep_series: bool,
) -> CurvatureResult<Option<WindowAnalysis>> {
    let (Some(window_px), Some(id)) = (window.to_pixels(), window.id(name)) else {
        tracing::warn!(image = name, "window size is missing, skipping");
        return Ok(None);
    };
    tracing::debug!(window_px, unit = %window.unit, "window size for analysis");

    let mut summaries = Vec::new();
    let mut series = Vec::new();
    for element in elements {
        if !window.admits(element.area) {
            tracing::debug!(
                label = element.label,
                area = element.area,
                window_px,
                "element shorter than window, skipped"
            );
            continue;
        }
        let (summary, curvatures) = analyze_element(element, window_px, window.resolution)?;
        match summary {
            Some(s) if s.is_finite() => summaries.push(s),
            _ => tracing::debug!(label = element.label, "element summary not finite, dropped"),
        }
        if keep_series {
            series.push(ElementSeries {
                label: element.label,
                curvatures,
            });
        }
    }

    let summary = summarize_image(&id, &summaries);
    if summary.is_none() {
        tracing::info!(id = %id, "no element qualifies for this window size");
    }

    Ok(Some(WindowAnalysis {
        window: window.clone(),
        id,
        window_px,
        elements: summaries,
        series,
        summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowUnit;
    use fibermorph_core::BinaryImage;
    use fibermorph_region::extract_elements;

    fn px_window(size: f64) -> WindowConfig {
        WindowConfig {
            size: Some(size),
            unit: WindowUnit::Pixels,
            resolution: 1.0,
        }
    }

    fn line_image(len: u32) -> BinaryImage {
        let mut img = BinaryImage::new(len + 4, 5).unwrap();
        for col in 2..len + 2 {
            img.set(2, col, true).unwrap();
        }
        img
    }

    #[test]
    fn test_straight_segment() {
        let elements = extract_elements(&line_image(40)).unwrap();
        let result = analyze_window("line", &elements, &px_window(10.0), false)
            .unwrap()
            .unwrap();
        assert_eq!(result.id, "line_WindowSize-10px");
        assert_eq!(result.elements.len(), 1);
        let e = result.elements[0];
        assert!((e.length - 40.0).abs() <= 1.0);
        assert!(e.curv_mean < 0.01);
        let row = result.summary.unwrap();
        assert_eq!(row.hair_count, 1);
        assert!(result.series.is_empty());
    }

    #[test]
    fn test_short_elements_excluded() {
        let elements = extract_elements(&line_image(10)).unwrap();
        let result = analyze_window("short", &elements, &px_window(10.0), true)
            .unwrap()
            .unwrap();
        assert!(result.elements.is_empty());
        assert!(result.summary.is_none());
        assert!(result.series.is_empty());
    }

    #[test]
    fn test_missing_window() {
        let elements = extract_elements(&line_image(40)).unwrap();
        let window = WindowConfig {
            size: None,
            unit: WindowUnit::Pixels,
            resolution: 1.0,
        };
        assert!(analyze_window("x", &elements, &window, false).unwrap().is_none());
    }

    #[test]
    fn test_series_kept_untrimmed() {
        let elements = extract_elements(&line_image(30)).unwrap();
        let result = analyze_window("s", &elements, &px_window(10.0), true)
            .unwrap()
            .unwrap();
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.series[0].label, 1);
        assert_eq!(result.series[0].curvatures.len(), 21);
    }

    #[test]
    fn test_summarize_series_trims_outliers() {
        let mut values = vec![0.1; 200];
        values.push(50.0);
        let s = summarize_series(3, &Numa::from_vec(values), 2.5)
            .unwrap()
            .unwrap();
        assert!((s.curv_mean - 0.1).abs() < 1e-12);
        assert_eq!(s.curv_median, 0.1);
        assert_eq!(s.label, 3);
        assert!(summarize_series(1, &Numa::new(), 1.0).unwrap().is_none());
    }

    #[test]
    fn test_summarize_image() {
        let elements = [
            ElementCurvatureSummary {
                label: 1,
                curv_mean: 1.0,
                curv_median: 2.0,
                length: 10.0,
            },
            ElementCurvatureSummary {
                label: 2,
                curv_mean: 3.0,
                curv_median: 4.0,
                length: 30.0,
            },
        ];
        let row = summarize_image("img", &elements).unwrap();
        assert_eq!(row.curv_mean_mean, 2.0);
        assert_eq!(row.curv_mean_median, 2.0);
        assert_eq!(row.curv_median_median, 3.0);
        assert_eq!(row.length_mean, 20.0);
        assert_eq!(row.hair_count, 2);
        assert!(summarize_image("img", &[]).is_none());
    }

    #[test]
    fn test_physical_window_admits_equal_area() {
        let elements = extract_elements(&line_image(40)).unwrap();
        let mm = WindowConfig {
            size: Some(4.0),
            unit: WindowUnit::Physical("mm".to_string()),
            resolution: 10.0,
        };
        let result = analyze_window("eq", &elements, &mm, true).unwrap().unwrap();
        assert_eq!(result.window_px, 40);
        assert_eq!(result.elements.len(), 1);
        assert_eq!(result.series[0].curvatures.len(), 1);
        assert_eq!(result.summary.unwrap().hair_count, 1);

        // The same length in pixels still needs a longer element
        let result = analyze_window("eq", &elements, &px_window(40.0), false)
            .unwrap()
            .unwrap();
        assert!(result.elements.is_empty());
        assert!(result.summary.is_none());
    }
}
