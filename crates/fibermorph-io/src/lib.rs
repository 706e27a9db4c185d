//! fibermorph-io - Image and table I/O
//!
//! - PNG reading and writing of [`BinaryImage`]s (visualizations of cleaned
//!   and pruned skeletons, regression fixtures)
//! - CSV output of the curvature tables
//!
//! # Example
//!
//! ```
//! use fibermorph_core::BinaryImage;
//! use fibermorph_io::{read_png, write_png};
//! use std::io::Cursor;
//!
//! let img = BinaryImage::from_rows(&[[0, 1], [1, 0]]).unwrap();
//! let mut buf = Vec::new();
//! write_png(&img, &mut buf).unwrap();
//! assert_eq!(read_png(Cursor::new(buf)).unwrap(), img);
//! ```

mod error;
pub mod png;
pub mod table;

pub use error::{IoError, IoResult};
pub use crate::png::{read_png, write_png};
pub use table::{
    ELEMENT_HEADERS, IMAGE_SUMMARY_HEADERS, WITHIN_ELEMENT_HEADERS, make_subdirectory,
    write_element_table, write_image_summary_table, write_table, write_table_file,
    write_within_element,
};

use fibermorph_core::BinaryImage;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG file as a binary image (nonzero samples are set)
pub fn read_image_file<P: AsRef<Path>>(path: P) -> IoResult<BinaryImage> {
    let file = File::open(path.as_ref())?;
    read_png(BufReader::new(file))
}

/// Write a binary image to a PNG file
pub fn write_image_file<P: AsRef<Path>>(image: &BinaryImage, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    write_png(image, BufWriter::new(file))?;
    tracing::debug!(path = %path.as_ref().display(), "wrote image");
    Ok(())
}

/// Save a visualization of a mask under `output_dir/subdir/name.png`
///
/// The mask is inverted before writing, so fibers appear dark on a white
/// background. Returns the written path.
pub fn save_visualization<P: AsRef<Path>>(
    image: &BinaryImage,
    output_dir: P,
    subdir: &str,
    name: &str,
) -> IoResult<std::path::PathBuf> {
    let dir = make_subdirectory(output_dir, subdir)?;
    let path = dir.join(format!("{name}.png"));
    write_image_file(&image.invert(), &path)?;
    Ok(path)
}
