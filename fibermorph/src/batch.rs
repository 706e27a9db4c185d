//! Multi-image batches
//!
//! Images are analyzed one after another with the same [`CurvatureAnalyzer`].
//! A failing image is recorded and logged; it never stops the batch. When the
//! analyzer has an output directory, the image rows of all successful images
//! are collected into [`SUMMARY_FILE_NAME`] there.

use fibermorph_core::BinaryImage;
use fibermorph_curvature::{
    CurvatureAnalyzer, CurvatureError, CurvatureResult, ImageAnalysis, ImageCurvatureSummary,
};
use fibermorph_io::{read_image_file, write_image_summary_table};
use std::path::{Path, PathBuf};

/// File name of the combined image summary table
pub const SUMMARY_FILE_NAME: &str = "curvature_summary_data.csv";

/// Outcome for one image of a batch
#[derive(Debug)]
pub struct BatchEntry {
    /// Image name
    pub name: String,
    /// Analysis result or the error that stopped this image
    pub result: CurvatureResult<ImageAnalysis>,
}

/// Outcome of a whole batch
#[derive(Debug)]
pub struct BatchResult {
    /// One entry per input image, in input order
    pub entries: Vec<BatchEntry>,
    /// Path of the combined summary table, if it was written
    pub summary_path: Option<PathBuf>,
}

impl BatchResult {
    /// Number of images analyzed without error
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    /// Names and errors of the failed images
    pub fn failures(&self) -> impl Iterator<Item = (&str, &CurvatureError)> {
        self.entries.iter().filter_map(|e| match &e.result {
            Ok(_) => None,
            Err(err) => Some((e.name.as_str(), err)),
        })
    }

    /// Image rows of all successful images, in input order
    pub fn summary_rows(&self) -> Vec<ImageCurvatureSummary> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok())
            .flat_map(|analysis| analysis.summary_rows())
            .collect()
    }
}

/// Analyze named in-memory skeletons
pub fn analyze_batch<I>(analyzer: &CurvatureAnalyzer, images: I) -> BatchResult
where
    I: IntoIterator<Item = (String, BinaryImage)>,
{
    let entries = images.into_iter().map(|(name, image)| {
        let result = analyzer.analyze(&name, &image);
        BatchEntry { name, result }
    });
    collect_batch(analyzer, entries)
}

/// Analyze skeleton PNG files; each image is named after its file stem
pub fn analyze_file_batch<I, P>(analyzer: &CurvatureAnalyzer, paths: I) -> BatchResult
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let entries = paths.into_iter().map(|path| BatchEntry {
        name: image_name(path.as_ref()),
        result: analyze_image_file(analyzer, path),
    });
    collect_batch(analyzer, entries)
}

/// Read one skeleton PNG and analyze it under its file stem
///
/// # Errors
///
/// Returns [`CurvatureError::Io`] if the file cannot be read, and propagates
/// analysis errors.
pub fn analyze_image_file<P: AsRef<Path>>(
    analyzer: &CurvatureAnalyzer,
    path: P,
) -> CurvatureResult<ImageAnalysis> {
    let image = read_image_file(path.as_ref())?;
    analyzer.analyze(&image_name(path.as_ref()), &image)
}

fn image_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

fn collect_batch(
    analyzer: &CurvatureAnalyzer,
    entries: impl Iterator<Item = BatchEntry>,
) -> BatchResult {
    let entries: Vec<BatchEntry> = entries
        .inspect(|entry| match &entry.result {
            Ok(analysis) => tracing::debug!(
                image = %entry.name,
                windows = analysis.windows.len(),
                "image analyzed"
            ),
            Err(e) => tracing::warn!(image = %entry.name, error = %e, "image failed, skipping"),
        })
        .collect();

    let mut batch = BatchResult {
        entries,
        summary_path: None,
    };
    tracing::info!(
        images = batch.entries.len(),
        succeeded = batch.succeeded(),
        "batch complete"
    );

    if let Some(dir) = analyzer.output_dir() {
        let path = dir.join(SUMMARY_FILE_NAME);
        let write = std::fs::create_dir_all(dir)
            .map_err(fibermorph_io::IoError::from)
            .and_then(|()| write_image_summary_table(&path, &batch.summary_rows()));
        match write {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved summary data");
                batch.summary_path = Some(path);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write summary"),
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibermorph_curvature::AnalysisConfig;

    fn analyzer() -> CurvatureAnalyzer {
        let config = AnalysisConfig::default()
            .with_resolution(1.0)
            .with_window_size(10.0);
        CurvatureAnalyzer::new(config).unwrap()
    }

    fn line(len: u32) -> BinaryImage {
        let mut img = BinaryImage::new(len + 10, 5).unwrap();
        for col in 5..len + 5 {
            img.set(2, col, true).unwrap();
        }
        img
    }

    #[test]
    fn test_batch_in_order() {
        let batch = analyze_batch(
            &analyzer(),
            [("a".to_string(), line(30)), ("b".to_string(), line(40))],
        );
        assert_eq!(batch.succeeded(), 2);
        let rows = batch.summary_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "a_WindowSize-10px");
        assert_eq!(rows[1].id, "b_WindowSize-10px");
        assert!(batch.summary_path.is_none());
    }

    #[test]
    fn test_missing_file_does_not_abort() {
        let batch = analyze_file_batch(&analyzer(), ["/nonexistent/skeleton_a.png"]);
        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.succeeded(), 0);
        let (name, err) = batch.failures().next().unwrap();
        assert_eq!(name, "skeleton_a");
        assert!(matches!(err, CurvatureError::Io(_)));
    }

    #[test]
    fn test_image_name_from_stem() {
        assert_eq!(image_name(Path::new("dir/hair_01.png")), "hair_01");
    }
}
