//! # Configuration Constants
//!
//! Centralized constants for the shape generators. Tolerances, structural
//! minimums and sweep resolutions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Structure**: Minimum point counts and side counts per shape family
//! - **Resolution**: Fixed sampling densities used by composite shapes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance used when comparing two vectors for equality.
///
/// Two vectors are equal when every pair of components differs by strictly
/// less than this value.
///
/// # Example
///
/// ```rust
/// use config::constants::VECTOR_EQUALITY_TOLERANCE;
///
/// fn same_component(a: f64, b: f64) -> bool {
///     (a - b).abs() < VECTOR_EQUALITY_TOLERANCE
/// }
///
/// assert!(same_component(1.0, 1.0 + 1e-7));
/// assert!(!same_component(1.0, 1.0 + 1e-5));
/// ```
pub const VECTOR_EQUALITY_TOLERANCE: f64 = 1e-6;

// =============================================================================
// STRUCTURAL MINIMUMS
// =============================================================================

/// Minimum number of points for an ellipse or circle.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_ELLIPSE_POINTS;
///
/// let requested = 3;
/// assert!(requested < MIN_ELLIPSE_POINTS);
/// ```
pub const MIN_ELLIPSE_POINTS: u32 = 4;

/// Minimum number of sides for a regular polygon.
///
/// Anything below a triangle has no interior.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Minimum granularity for ellipsoids and spheres.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_ELLIPSOID_GRANULARITY;
///
/// assert_eq!(MIN_ELLIPSOID_GRANULARITY, 4);
/// ```
pub const MIN_ELLIPSOID_GRANULARITY: u32 = 4;

/// Minimum number of rows (and columns) of the ellipsoid sampling grid.
///
/// The grid side is `floor(sqrt(granularity))`, raised to this value.
pub const MIN_ELLIPSOID_REPARTITION: usize = 2;

/// Minimum number of points on the tube circle of a circular tore.
pub const MIN_TORE_GRANULARITY: u32 = 4;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of copies of the tube circle swept around the Y axis to build a
/// circular tore.
///
/// # Example
///
/// ```rust
/// use config::constants::TORE_SWEEP_SEGMENTS;
///
/// // A tore with 16 points per tube circle holds 64 * 16 points.
/// assert_eq!(TORE_SWEEP_SEGMENTS * 16, 1024);
/// ```
pub const TORE_SWEEP_SEGMENTS: usize = 64;

/// Upper bound on polygon sides accepted by the declarative dispatcher.
///
/// Above this count a polygon is visually a circle; callers wanting that
/// should ask for one.
pub const MAX_POLYGON_SIDES: u32 = 1024;

// =============================================================================
// NAMED POLYGONS
// =============================================================================

/// Side count of a square.
pub const SQUARE_SIDES: u32 = 4;

/// Side count of a regular pentagon.
pub const PENTAGON_SIDES: u32 = 5;

/// Side count of a regular hexagon.
pub const HEXAGON_SIDES: u32 = 6;

/// Side count of a regular octagon.
pub const OCTAGON_SIDES: u32 = 8;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within [`VECTOR_EQUALITY_TOLERANCE`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-8));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < VECTOR_EQUALITY_TOLERANCE
}

/// Side length of the grid used to sample an ellipsoid of the given
/// granularity.
///
/// # Example
///
/// ```rust
/// use config::constants::ellipsoid_repartition;
///
/// assert_eq!(ellipsoid_repartition(16), 4);
/// assert_eq!(ellipsoid_repartition(24), 4);
/// assert_eq!(ellipsoid_repartition(1), 2);
/// ```
pub fn ellipsoid_repartition(granularity: u32) -> usize {
    ((granularity as f64).sqrt().floor() as usize).max(MIN_ELLIPSOID_REPARTITION)
}
