//! CSV table output
//!
//! Every table is written with an explicit header row, so a table with no
//! records still documents its columns. Records are serialized positionally
//! with `serde`, which means the field order of a record type must match the
//! header order passed alongside it.

use crate::IoResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `records` under `headers` to any writer
pub fn write_table<W, T>(writer: W, headers: &[&str], records: &[T]) -> IoResult<()>
where
    W: Write,
    T: Serialize,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` under `headers` to a file, replacing any existing file
pub fn write_table_file<P, T>(path: P, headers: &[&str], records: &[T]) -> IoResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let file = File::create(path.as_ref())?;
    write_table(file, headers, records)?;
    tracing::debug!(path = %path.as_ref().display(), rows = records.len(), "wrote table");
    Ok(())
}

/// Columns of the per-element table
pub const ELEMENT_HEADERS: [&str; 3] = ["curv_mean", "curv_median", "length"];

/// Columns of the per-image summary table
pub const IMAGE_SUMMARY_HEADERS: [&str; 8] = [
    "ID",
    "curv_mean_mean",
    "curv_mean_median",
    "curv_median_mean",
    "curv_median_median",
    "length_mean",
    "length_median",
    "hair_count",
];

/// Columns of a within-element curvature series
pub const WITHIN_ELEMENT_HEADERS: [&str; 2] = ["curv", "label"];

/// Write the per-element table for one window to `output_dir/analysis/ImageSum_{id}.csv`
///
/// Returns the written path.
pub fn write_element_table<P, T>(output_dir: P, id: &str, records: &[T]) -> IoResult<PathBuf>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let dir = make_subdirectory(output_dir, "analysis")?;
    let path = dir.join(format!("ImageSum_{id}.csv"));
    write_table_file(&path, &ELEMENT_HEADERS, records)?;
    Ok(path)
}

/// Write image summary rows to `path`
pub fn write_image_summary_table<P, T>(path: P, records: &[T]) -> IoResult<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    write_table_file(path, &IMAGE_SUMMARY_HEADERS, records)
}

/// Write the raw curvature series of one element to
/// `output_dir/WithinElement/WithinElement_{id}_Label-{label}.csv`
///
/// Returns the written path.
pub fn write_within_element<P: AsRef<Path>>(
    output_dir: P,
    id: &str,
    label: u32,
    series: &[f64],
) -> IoResult<PathBuf> {
    let dir = make_subdirectory(output_dir, "WithinElement")?;
    let path = dir.join(format!("WithinElement_{id}_Label-{label}.csv"));
    let records: Vec<(f64, u32)> = series.iter().map(|&curv| (curv, label)).collect();
    write_table_file(&path, &WITHIN_ELEMENT_HEADERS, &records)?;
    Ok(path)
}

/// Create (if needed) and return `base/name`
pub fn make_subdirectory<P: AsRef<Path>>(base: P, name: &str) -> IoResult<PathBuf> {
    let dir = base.as_ref().join(name);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
