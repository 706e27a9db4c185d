//! fibermorph-test - Regression test framework for fibermorph
//!
//! Supports three modes, selected by the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! Skeleton inputs are built synthetically with the [`fixtures`] module, so
//! the regression suites need no image files checked into the repository.
//!
//! # Usage
//!
//! ```ignore
//! use fibermorph_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("prune");
//! let skel = fixtures::cross(41, 41, 20, 20, 15);
//! rp.compare_values(61.0, skel.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // fibermorph-test is at crates/fibermorph-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create and return a scratch directory `tests/regout/<name>` for tests that
/// write output trees
///
/// Any previous contents are removed first.
pub fn scratch_dir(name: &str) -> TestResult<std::path::PathBuf> {
    let dir = std::path::PathBuf::from(regout_dir()).join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
    }
    std::fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
