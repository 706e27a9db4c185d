//! Analysis configuration
//!
//! [`AnalysisConfig`] is plain data with serde support so it can be read from
//! JSON. Window sizes accept a single number, `null`, or a list mixing both:
//!
//! ```
//! use fibermorph_curvature::{AnalysisConfig, WindowUnit};
//!
//! let config = AnalysisConfig::from_json_str(
//!     r#"{ "resolution": 132, "window_size": [0.5, null, 1], "window_unit": "mm" }"#,
//! )
//! .unwrap();
//! assert_eq!(config.window_sizes(), vec![Some(0.5), None, Some(1.0)]);
//! assert_eq!(config.window_unit, WindowUnit::Physical("mm".to_string()));
//! assert!(config.prune);
//! ```

use crate::error::{CurvatureError, CurvatureResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a window size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowUnit {
    /// Window sizes are pixel counts (`"px"`)
    #[default]
    Pixels,
    /// Window sizes are in a physical unit such as `"mm"`, converted with the
    /// resolution
    Physical(String),
}

impl WindowUnit {
    /// Unit label as used in output ids
    pub fn as_str(&self) -> &str {
        match self {
            WindowUnit::Pixels => "px",
            WindowUnit::Physical(name) => name,
        }
    }
}

impl TryFrom<String> for WindowUnit {
    type Error = CurvatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "px" {
            return Ok(WindowUnit::Pixels);
        }
        if value.is_empty() || !value.chars().all(char::is_alphabetic) {
            return Err(CurvatureError::InvalidConfig(format!(
                "unknown window unit '{value}'"
            )));
        }
        Ok(WindowUnit::Physical(value))
    }
}

impl From<WindowUnit> for String {
    fn from(unit: WindowUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for WindowUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One window size or a list of them; `None` entries are skipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowSpec {
    /// A single size (or `null`)
    Single(Option<f64>),
    /// Several sizes, processed in order
    Many(Vec<Option<f64>>),
}

impl Default for WindowSpec {
    fn default() -> Self {
        WindowSpec::Single(None)
    }
}

impl WindowSpec {
    /// Window sizes in processing order
    pub fn sizes(&self) -> Vec<Option<f64>> {
        match self {
            WindowSpec::Single(size) => vec![*size],
            WindowSpec::Many(sizes) => sizes.clone(),
        }
    }
}

impl From<f64> for WindowSpec {
    fn from(size: f64) -> Self {
        WindowSpec::Single(Some(size))
    }
}

impl From<Vec<f64>> for WindowSpec {
    fn from(sizes: Vec<f64>) -> Self {
        WindowSpec::Many(sizes.into_iter().map(Some).collect())
    }
}

/// A single window size resolved against a unit and resolution
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Size in `unit`, `None` for a skipped entry
    pub size: Option<f64>,
    /// Unit of `size`
    pub unit: WindowUnit,
    /// Pixels per physical unit
    pub resolution: f64,
}

impl WindowConfig {
    /// Window size in pixels: `trunc(size * resolution)` for physical units,
    /// `trunc(size)` for pixels
    pub fn to_pixels(&self) -> Option<usize> {
        let size = self.size?;
        let px = match self.unit {
            WindowUnit::Pixels => size,
            WindowUnit::Physical(_) => size * self.resolution,
        };
        Some(px.trunc().max(0.0) as usize)
    }

    /// Size as printed in ids; pixel sizes are shown as integers, physical
    /// sizes always keep a decimal point (`1.0`, `0.5`)
    pub fn size_label(&self) -> Option<String> {
        let size = self.size?;
        Some(match self.unit {
            WindowUnit::Pixels => format!("{}", size.trunc() as i64),
            WindowUnit::Physical(_) => format!("{size:?}"),
        })
    }

    /// Whether an element of `area` pixels is long enough to measure
    ///
    /// Pixel windows need `area > window_px`. Physical windows compare the
    /// area against the unconverted size, so an element exactly one window
    /// long (`area == window_px`) is still measured with a single window.
    pub fn admits(&self, area: usize) -> bool {
        let Some(window_px) = self.to_pixels() else {
            return false;
        };
        match self.unit {
            WindowUnit::Pixels => area > window_px,
            WindowUnit::Physical(_) => area >= window_px,
        }
    }

    /// Output id `{name}_WindowSize-{size}{unit}`
    pub fn id(&self, name: &str) -> Option<String> {
        let label = self.size_label()?;
        Some(format!("{name}_WindowSize-{label}{}", self.unit))
    }
}

/// Parameters of a curvature analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixels per physical unit
    pub resolution: f64,
    /// Window size(s) in `window_unit`
    pub window_size: WindowSpec,
    /// Unit of the window sizes
    pub window_unit: WindowUnit,
    /// Export the raw curvature series of every element
    pub within_element: bool,
    /// Validation run: skip visualization output, numbers are unchanged
    pub test: bool,
    /// Prune branch points before measuring
    pub prune: bool,
    /// Save visualizations of intermediate skeletons
    pub save_img: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            resolution: 132.0,
            window_size: WindowSpec::default(),
            window_unit: WindowUnit::Pixels,
            within_element: false,
            test: false,
            prune: true,
            save_img: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    ///
    /// Returns [`CurvatureError::ConfigParse`] for malformed JSON and
    /// [`CurvatureError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> CurvatureResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> CurvatureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check invariants
    ///
    /// # Errors
    ///
    /// Returns [`CurvatureError::InvalidConfig`] if the resolution is not a
    /// positive finite number, any window size is negative or not finite, or
    /// the unit name is not alphabetic.
    pub fn validate(&self) -> CurvatureResult<()> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(CurvatureError::InvalidConfig(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        for size in self.window_sizes().into_iter().flatten() {
            if !size.is_finite() || size < 0.0 {
                return Err(CurvatureError::InvalidConfig(format!(
                    "window size must be a non-negative number, got {size}"
                )));
            }
        }
        WindowUnit::try_from(self.window_unit.as_str().to_string())?;
        Ok(())
    }

    /// Window sizes in processing order
    pub fn window_sizes(&self) -> Vec<Option<f64>> {
        self.window_size.sizes()
    }

    /// One [`WindowConfig`] per window size entry
    pub fn window_configs(&self) -> Vec<WindowConfig> {
        self.window_sizes()
            .into_iter()
            .map(|size| WindowConfig {
                size,
                unit: self.window_unit.clone(),
                resolution: self.resolution,
            })
            .collect()
    }

    /// Set the resolution (pixels per physical unit)
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the window size(s)
    pub fn with_window_size(mut self, window_size: impl Into<WindowSpec>) -> Self {
        self.window_size = window_size.into();
        self
    }

    /// Set the window unit
    pub fn with_window_unit(mut self, unit: WindowUnit) -> Self {
        self.window_unit = unit;
        self
    }

    /// Enable or disable the within-element export
    pub fn with_within_element(mut self, within_element: bool) -> Self {
        self.within_element = within_element;
        self
    }

    /// Mark the run as a validation test
    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Enable or disable pruning
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enable or disable saving visualizations
    pub fn with_save_img(mut self, save_img: bool) -> Self {
        self.save_img = save_img;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.window_sizes(), vec![None]);
        assert!(!config.within_element);
    }

    #[test]
    fn test_window_spec_forms() {
        let single = AnalysisConfig::from_json_str(r#"{"window_size": 20}"#).unwrap();
        assert_eq!(single.window_sizes(), vec![Some(20.0)]);
        let null = AnalysisConfig::from_json_str(r#"{"window_size": null}"#).unwrap();
        assert_eq!(null.window_sizes(), vec![None]);
        let list = AnalysisConfig::from_json_str(r#"{"window_size": [10, 20.5]}"#).unwrap();
        assert_eq!(list.window_sizes(), vec![Some(10.0), Some(20.5)]);
    }

    #[test]
    fn test_to_pixels_truncates() {
        let px = WindowConfig {
            size: Some(20.9),
            unit: WindowUnit::Pixels,
            resolution: 132.0,
        };
        assert_eq!(px.to_pixels(), Some(20));
        assert_eq!(px.id("img").as_deref(), Some("img_WindowSize-20px"));

        let mm = WindowConfig {
            size: Some(0.5),
            unit: WindowUnit::Physical("mm".to_string()),
            resolution: 133.0,
        };
        assert_eq!(mm.to_pixels(), Some(66));
        assert_eq!(mm.id("img").as_deref(), Some("img_WindowSize-0.5mm"));

        let none = WindowConfig {
            size: None,
            unit: WindowUnit::Pixels,
            resolution: 1.0,
        };
        assert_eq!(none.to_pixels(), None);
        assert_eq!(none.id("img"), None);
        assert!(!none.admits(100));
    }

    #[test]
    fn test_physical_label_keeps_decimal_point() {
        let mm = |size| WindowConfig {
            size: Some(size),
            unit: WindowUnit::Physical("mm".to_string()),
            resolution: 132.0,
        };
        assert_eq!(mm(1.0).id("img").as_deref(), Some("img_WindowSize-1.0mm"));
        assert_eq!(mm(0.25).id("img").as_deref(), Some("img_WindowSize-0.25mm"));
        assert_eq!(mm(2.0).size_label().as_deref(), Some("2.0"));
    }

    #[test]
    fn test_admits_by_unit() {
        let px = WindowConfig {
            size: Some(40.0),
            unit: WindowUnit::Pixels,
            resolution: 10.0,
        };
        assert!(!px.admits(40));
        assert!(px.admits(41));
        let mm = WindowConfig {
            size: Some(4.0),
            unit: WindowUnit::Physical("mm".to_string()),
            resolution: 10.0,
        };
        assert!(mm.admits(40));
        assert!(!mm.admits(39));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{"resolution": 0}"#),
            Err(CurvatureError::InvalidConfig(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{"window_size": [-1]}"#),
            Err(CurvatureError::InvalidConfig(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{"window_unit": "m m"}"#),
            Err(CurvatureError::ConfigParse(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str("{"),
            Err(CurvatureError::ConfigParse(_))
        ));
        let bad = AnalysisConfig::default().with_resolution(f64::NAN);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_builder_and_round_trip() {
        let config = AnalysisConfig::default()
            .with_resolution(100.0)
            .with_window_size(vec![1.0, 2.0])
            .with_window_unit(WindowUnit::Physical("mm".to_string()))
            .with_within_element(true)
            .with_prune(false);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"window_unit\": \"mm\""));
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }
}
