//! # Error Types
//!
//! Two failure channels exist. Generators signal bad shape parameters by
//! returning `None`; the declarative [`crate::ShapeParams`] API turns that into
//! a [`ShapeError`]. A missing rotation axis is a programming error and is
//! reported as [`VectorError`].

use config::generator::ConfigError;
use thiserror::Error;

// =============================================================================
// VECTOR ERRORS
// =============================================================================

/// Errors raised by [`crate::Vector3`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// An axis rotation was requested without an axis.
    #[error("The provided axis vector was missing")]
    MissingAxis,
}

/// Result type alias for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// SHAPE ERRORS
// =============================================================================

/// Errors returned by the declarative shape API.
///
/// ## Example
///
/// ```rust
/// use shape_generator::{ShapeError, ShapeParams};
///
/// let params = ShapeParams::Ellipse { r1: 10.0, r2: 5.0, points: 3 };
/// match params.generate() {
///     Ok(points) => println!("{} points", points.len()),
///     Err(ShapeError::InvalidParameters { shape, reason }) => {
///         eprintln!("{shape}: {reason}")
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The generator rejected the supplied parameters.
    #[error("Invalid parameters for {shape}: {reason}")]
    InvalidParameters {
        /// Shape family name
        shape: &'static str,
        /// Description of the rejected values
        reason: String,
    },

    /// The generator configuration is not usable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ShapeError {
    /// Creates an invalid parameters error.
    pub fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            shape,
            reason: reason.into(),
        }
    }
}

/// Result type alias for the declarative shape API.
pub type ShapeResult<T> = Result<T, ShapeError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::invalid("ellipse", "points=3 (min 4)");
        assert!(err.to_string().contains("ellipse"));
        assert!(err.to_string().contains("points=3"));

        assert!(VectorError::MissingAxis.to_string().contains("axis"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: ShapeError = ConfigError::InvalidSweepSegments(0).into();
        assert!(matches!(err, ShapeError::Config(_)));
        assert!(err.to_string().contains("tore_sweep_segments"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeError>();
        assert_send_sync::<VectorError>();
    }
}
