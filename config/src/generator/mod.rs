//! Tunable settings shared by the declarative shape dispatcher.
//!
//! The free generator functions use the constants directly; this snapshot lets
//! a caller override the few values that are resolution choices rather than
//! structural requirements.

use std::fmt;

use crate::constants::{MAX_POLYGON_SIDES, MIN_POLYGON_SIDES, TORE_SWEEP_SEGMENTS};

/// Immutable snapshot of generator settings.
///
/// # Examples
/// ```
/// use config::generator::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tore_sweep_segments > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of tube-circle copies swept around Y when building a tore.
    pub tore_sweep_segments: usize,
    /// Largest side count accepted for polygons.
    pub max_polygon_sides: u32,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the sweep count
    /// and the polygon side limit.
    ///
    /// # Examples
    /// ```
    /// use config::generator::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(128, 64).expect("valid config");
    /// assert_eq!(cfg.tore_sweep_segments, 128);
    /// ```
    pub fn new(tore_sweep_segments: usize, max_polygon_sides: u32) -> Result<Self, ConfigError> {
        if tore_sweep_segments == 0 {
            return Err(ConfigError::InvalidSweepSegments(tore_sweep_segments));
        }
        if max_polygon_sides < MIN_POLYGON_SIDES {
            return Err(ConfigError::InvalidPolygonSideLimit(max_polygon_sides));
        }
        Ok(Self {
            tore_sweep_segments,
            max_polygon_sides,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tore_sweep_segments: TORE_SWEEP_SEGMENTS,
            max_polygon_sides: MAX_POLYGON_SIDES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the tore sweep count is zero.
    InvalidSweepSegments(usize),
    /// Raised when the polygon side limit cannot hold even a triangle.
    InvalidPolygonSideLimit(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSweepSegments(value) => {
                write!(f, "tore_sweep_segments must be positive: {value}")
            }
            ConfigError::InvalidPolygonSideLimit(value) => {
                write!(f, "max_polygon_sides must be >= {MIN_POLYGON_SIDES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
