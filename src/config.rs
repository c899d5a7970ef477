//! Kernel configuration.
//!
//! All values have defaults, so an empty document is a valid configuration.
//! With the `yaml` feature enabled a configuration can be read from YAML:
//!
//! ```yaml
//! max_resolution: 1048576
//! angle_search:
//!   step_degrees: 0.25
//!   max_attempts: 32
//! ```

#[cfg(feature = "yaml")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default upper bound on scanned or planned area, in pixels (16384 x 16384).
pub const DEFAULT_MAX_RESOLUTION: u64 = 16_384 * 16_384;

/// Bounds for [`Rectangle::rotate_searching`](crate::geometry::Rectangle::rotate_searching).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleSearch {
    /// Distance in degrees between successive candidate angles.
    #[cfg_attr(feature = "serde", serde(default = "default_step_degrees"))]
    pub step_degrees: f64,

    /// Number of alternative angles tried before falling back to stepping.
    #[cfg_attr(feature = "serde", serde(default = "default_max_attempts"))]
    pub max_attempts: u32,
}

fn default_step_degrees() -> f64 {
    0.5
}
fn default_max_attempts() -> u32 {
    16
}

impl Default for AngleSearch {
    fn default() -> Self {
        Self {
            step_degrees: default_step_degrees(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Kernel-wide settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelConfig {
    /// Largest bounding-box area a bounded scan or canvas plan may cover.
    #[cfg_attr(feature = "serde", serde(default = "default_max_resolution"))]
    pub max_resolution: u64,

    /// Angle search bounds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle_search: AngleSearch,
}

fn default_max_resolution() -> u64 {
    DEFAULT_MAX_RESOLUTION
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_resolution: default_max_resolution(),
            angle_search: AngleSearch::default(),
        }
    }
}

impl KernelConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if self.max_resolution == 0 {
            return Err(Error::ConfigInvalid {
                key: "max_resolution",
                message: "must be greater than zero".to_string(),
            });
        }
        let step = self.angle_search.step_degrees;
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::ConfigInvalid {
                key: "angle_search.step_degrees",
                message: format!("must be a positive finite number, got {step}"),
            });
        }
        Ok(())
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, otherwise
    /// whatever [`KernelConfig::parse`] returns.
    #[cfg(feature = "yaml")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the offending line, or
    /// [`Error::ConfigInvalid`] if a parsed value fails validation.
    #[cfg(feature = "yaml")]
    pub fn parse(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error.
    #[cfg(feature = "yaml")]
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
