//! # Ellipsoid and Sphere
//!
//! Latitude/longitude grid sampled on an axis-aligned ellipsoid, with Y as the
//! polar axis.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{ellipsoid_repartition, MIN_ELLIPSOID_GRANULARITY};

use crate::validation::preconditions_check;
use crate::Vector3;

/// Generates surface points of a sphere centered on the origin.
///
/// Equivalent to `ellipsoid(radius, radius, radius, granularity)`.
pub fn sphere(radius: f64, granularity: u32) -> Option<Vec<Vector3>> {
    ellipsoid(radius, radius, radius, granularity)
}

/// Generates surface points of an ellipsoid centered on the origin.
///
/// # Arguments
///
/// * `r1` - Radius along X (must be positive)
/// * `r2` - Radius along Y (must be positive)
/// * `r3` - Radius along Z (must be positive)
/// * `granularity` - Approximate number of points (at least 4)
///
/// # Returns
///
/// `n²` vectors where `n = max(floor(sqrt(granularity)), 2)`, or `None` if the
/// parameters are invalid.
///
/// # Algorithm
///
/// Row `i` sits at colatitude `-π/2 + i·2π/n` and column `j` at longitude
/// `-π + j·2π/n`. The colatitude sweeps a full turn, so the grid wraps over
/// the poles and each meridian is visited from both sides.
///
/// # Example
///
/// ```rust
/// use shape_generator::ellipsoid;
///
/// let points = ellipsoid(1.0, 2.0, 3.0, 20).unwrap();
/// assert_eq!(points.len(), 16);
/// ```
pub fn ellipsoid(r1: f64, r2: f64, r3: f64, granularity: u32) -> Option<Vec<Vector3>> {
    if preconditions_check(granularity, MIN_ELLIPSOID_GRANULARITY, &[r1, r2, r3]) {
        log::debug!("ellipsoid rejected: r1={r1}, r2={r2}, r3={r3}, granularity={granularity}");
        return None;
    }

    let repartition = ellipsoid_repartition(granularity);
    let mut generated = Vec::with_capacity(repartition * repartition);

    for i in 0..repartition {
        let colatitude = -FRAC_PI_2 + i as f64 * TAU / repartition as f64;
        let (sin_colatitude, proj_y) = colatitude.sin_cos();
        for j in 0..repartition {
            let longitude = -PI + j as f64 * TAU / repartition as f64;
            let (sin_longitude, cos_longitude) = longitude.sin_cos();
            generated.push(Vector3::new(
                r1 * sin_colatitude * cos_longitude,
                r2 * proj_y,
                r3 * sin_colatitude * sin_longitude,
            ));
        }
    }

    log::trace!("ellipsoid generated {} points", generated.len());
    Some(generated)
}
