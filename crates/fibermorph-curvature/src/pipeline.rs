//! Per-image curvature pipeline
//!
//! [`CurvatureAnalyzer`] runs the full sequence on one skeleton:
//!
//! 1. Orientation normalization
//! 2. Pruning (optional), with an optional visualization of the result
//! 3. Element labeling
//! 4. Aggregation for every configured window size
//! 5. Element tables and within-element series, when an output directory is set
//!
//! File output never changes the numbers: a failed write is logged and the
//! analysis continues.

use crate::aggregate::{ImageCurvatureSummary, WindowAnalysis, analyze_window};
use crate::config::AnalysisConfig;
use crate::error::CurvatureResult;
use fibermorph_core::{BinaryImage, BinaryValue, check_binary, normalize_orientation};
use fibermorph_io::{save_visualization, write_element_table, write_within_element};
use fibermorph_morph::prune_skeleton;
use fibermorph_region::extract_elements;
use std::path::{Path, PathBuf};

/// Everything measured for one image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    /// Image name used in output ids
    pub name: String,
    /// Number of skeleton elements after pruning
    pub element_count: usize,
    /// Branch-point centroids removed by pruning
    pub branch_points: Vec<(f64, f64)>,
    /// One entry per non-missing window size, in configuration order
    pub windows: Vec<WindowAnalysis>,
}

impl ImageAnalysis {
    /// Image rows of every window size that produced one
    pub fn summary_rows(&self) -> Vec<ImageCurvatureSummary> {
        self.windows
            .iter()
            .filter_map(|w| w.summary.clone())
            .collect()
    }
}

/// Curvature analysis driver for single images
#[derive(Debug, Clone)]
pub struct CurvatureAnalyzer {
    config: AnalysisConfig,
    output_dir: Option<PathBuf>,
}

impl CurvatureAnalyzer {
    /// Create an analyzer that writes no files
    ///
    /// # Errors
    ///
    /// Returns [`crate::CurvatureError::InvalidConfig`] if the configuration
    /// does not validate.
    pub fn new(config: AnalysisConfig) -> CurvatureResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            output_dir: None,
        })
    }

    /// Write tables and visualizations under `dir`
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Analysis configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Output directory, if any
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Analyze a row-major matrix of binary-like values
    ///
    /// # Errors
    ///
    /// Returns a core error if `values` does not match `width * height`, and
    /// propagates errors from [`CurvatureAnalyzer::analyze`].
    pub fn analyze_values<T: BinaryValue>(
        &self,
        name: &str,
        width: u32,
        height: u32,
        values: &[T],
    ) -> CurvatureResult<ImageAnalysis> {
        let skeleton = normalize_orientation(width, height, values)?;
        self.analyze(name, &skeleton)
    }

    /// Analyze one skeleton image
    ///
    /// # Errors
    ///
    /// Propagates errors from pruning, labeling and aggregation. File output
    /// errors are logged, not returned.
    pub fn analyze(&self, name: &str, skeleton: &BinaryImage) -> CurvatureResult<ImageAnalysis> {
        let mut skeleton = check_binary(skeleton);
        let mut branch_points = Vec::new();

        if self.config.prune {
            let pruned = prune_skeleton(&skeleton)?;
            skeleton = pruned.skeleton;
            branch_points = pruned.branch_points;
            self.save_image(&skeleton, "pruned", name);
        }

        let elements = extract_elements(&skeleton)?;
        tracing::info!(image = name, elements = elements.len(), "found elements");

        let mut windows = Vec::new();
        for window in self.config.window_configs() {
            let Some(analysis) =
                analyze_window(name, &elements, &window, self.config.within_element)?
            else {
                continue;
            };
            self.write_tables(&analysis);
            windows.push(analysis);
        }

        Ok(ImageAnalysis {
            name: name.to_string(),
            element_count: elements.len(),
            branch_points,
            windows,
        })
    }

    fn save_image(&self, image: &BinaryImage, subdir: &str, name: &str) {
        if !self.config.save_img || self.config.test {
            return;
        }
        let Some(dir) = &self.output_dir else {
            return;
        };
        match save_visualization(image, dir, subdir, name) {
            Ok(path) => tracing::debug!(path = %path.display(), "saved visualization"),
            Err(e) => tracing::warn!(image = name, error = %e, "failed to save visualization"),
        }
    }

    fn write_tables(&self, analysis: &WindowAnalysis) {
        let Some(dir) = &self.output_dir else {
            return;
        };

        let records: Vec<_> = analysis.elements.iter().map(|e| e.record()).collect();
        if let Err(e) = write_element_table(dir, &analysis.id, &records) {
            tracing::warn!(id = %analysis.id, error = %e, "failed to write element table");
        }

        for series in &analysis.series {
            if let Err(e) =
                write_within_element(dir, &analysis.id, series.label, series.curvatures.as_slice())
            {
                tracing::warn!(
                    id = %analysis.id,
                    label = series.label,
                    error = %e,
                    "failed to write within-element series"
                );
            }
        }
    }
}
