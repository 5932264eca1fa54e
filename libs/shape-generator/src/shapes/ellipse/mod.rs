//! # Ellipse and Circle
//!
//! Points of an axis-aligned ellipse centered on the origin, in the XZ plane.

use std::f64::consts::TAU;

use config::constants::MIN_ELLIPSE_POINTS;

use crate::validation::preconditions_check;
use crate::Vector3;

/// Generates the points of a circle centered on the origin in the XZ plane.
///
/// Equivalent to `ellipse(radius, radius, points)`.
///
/// # Arguments
///
/// * `radius` - Circle radius (must be positive)
/// * `points` - Number of points (at least 4; 8 or more recommended)
///
/// # Returns
///
/// `None` if the parameters are invalid.
///
/// # Example
///
/// ```rust
/// use shape_generator::{circle, Vector3};
///
/// let points = circle(2.0, 4).unwrap();
/// assert_eq!(points[0], Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(points[1], Vector3::new(0.0, 0.0, 2.0));
/// ```
pub fn circle(radius: f64, points: u32) -> Option<Vec<Vector3>> {
    ellipse(radius, radius, points)
}

/// Generates the points of an ellipse centered on the origin in the XZ plane.
///
/// # Arguments
///
/// * `r1` - Radius along the X axis (must be positive)
/// * `r2` - Radius along the Z axis (must be positive)
/// * `points` - Number of points (at least 4)
///
/// # Returns
///
/// `points` vectors at evenly spaced polar angles, starting on +X and turning
/// toward +Z, or `None` if the parameters are invalid.
///
/// # Algorithm
///
/// For angle θ = i·2π/points the polar radius of the ellipse is
/// `sqrt(r1²r2² / (r1²sin²θ + r2²cos²θ))`, which lands the point exactly on
/// `(x/r1)² + (z/r2)² = 1`.
pub fn ellipse(r1: f64, r2: f64, points: u32) -> Option<Vec<Vector3>> {
    if preconditions_check(points, MIN_ELLIPSE_POINTS, &[r1, r2]) {
        log::debug!("ellipse rejected: r1={r1}, r2={r2}, points={points}");
        return None;
    }

    let generated: Vec<Vector3> = (0..points)
        .map(|i| {
            let theta = i as f64 * TAU / points as f64;
            let (proj_z, proj_x) = theta.sin_cos();
            let radius = if r1 == r2 {
                r1
            } else {
                let denominator = r1 * r1 * proj_z * proj_z + r2 * r2 * proj_x * proj_x;
                ((r1 * r1 * r2 * r2) / denominator).sqrt()
            };
            Vector3::new(radius * proj_x, 0.0, radius * proj_z)
        })
        .collect();

    log::trace!("ellipse generated {} points", generated.len());
    Some(generated)
}
