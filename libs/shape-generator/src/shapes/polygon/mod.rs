//! # Regular Polygons
//!
//! Points distributed along the edges of a regular polygon centered on the
//! origin in the XZ plane. The first vertex lies on +X.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{
    HEXAGON_SIDES, MIN_POLYGON_SIDES, OCTAGON_SIDES, PENTAGON_SIDES, SQUARE_SIDES,
};

use crate::validation::preconditions_check;
use crate::Vector3;

/// Circumradius of a regular polygon with `sides` sides of length `length`.
///
/// Chord formula: `length / sqrt(2(1 - cos(2π/sides)))`.
///
/// # Example
///
/// ```rust
/// use shape_generator::shapes::polygon::circumradius;
///
/// // A regular hexagon's circumradius equals its side length.
/// assert!((circumradius(3.0, 6) - 3.0).abs() < 1e-12);
/// ```
pub fn circumradius(length: f64, sides: u32) -> f64 {
    length / (2.0 * (1.0 - (TAU / sides as f64).cos())).sqrt()
}

/// Generates the points of a regular polygon.
///
/// # Arguments
///
/// * `length` - Side length (must be positive)
/// * `sides` - Number of sides (at least 3)
/// * `points` - Number of points (at least `sides`)
///
/// # Returns
///
/// `points` vectors lying on the polygon's edges, or `None` if the parameters
/// are invalid.
///
/// # Algorithm
///
/// Each side receives `points / sides` samples at equal angular steps. The
/// distance from the center at in-side angle φ is where the ray at φ meets the
/// side's supporting line, `R / (cos φ - sin φ / slope)` with
/// `slope = tan(π/2 + π/sides)`. Every side reuses the same distances, rotated.
/// When `points` is not a multiple of `sides`, the remaining samples wrap past
/// the first vertex and retrace the opening edges.
pub fn polygon(length: f64, sides: u32, points: u32) -> Option<Vec<Vector3>> {
    if sides < MIN_POLYGON_SIDES || preconditions_check(points, sides, &[sides as f64, length]) {
        log::debug!("polygon rejected: length={length}, sides={sides}, points={points}");
        return None;
    }

    let radius = circumradius(length, sides);
    let per_side = (points / sides) as usize;
    let step = (TAU / sides as f64) / per_side as f64;
    let slope = (FRAC_PI_2 + PI / sides as f64).tan();
    let inv_slope = 1.0 / slope;

    let distances: Vec<f64> = (0..per_side)
        .map(|k| {
            if k == 0 {
                return radius;
            }
            let (proj_z, proj_x) = (k as f64 * step).sin_cos();
            (radius / (proj_x - proj_z * inv_slope)).abs()
        })
        .collect();

    let generated: Vec<Vector3> = (0..points as usize)
        .map(|j| {
            let distance = distances[j % per_side];
            let (sin, cos) = (j as f64 * step).sin_cos();
            Vector3::new(distance * cos, 0.0, distance * sin)
        })
        .collect();

    log::trace!("polygon generated {} points", generated.len());
    Some(generated)
}

/// Generates the points of a square. See [`polygon`].
pub fn square(length: f64, points: u32) -> Option<Vec<Vector3>> {
    polygon(length, SQUARE_SIDES, points)
}

/// Generates the points of a regular pentagon. See [`polygon`].
pub fn pentagon(length: f64, points: u32) -> Option<Vec<Vector3>> {
    polygon(length, PENTAGON_SIDES, points)
}

/// Generates the points of a regular hexagon. See [`polygon`].
pub fn hexagon(length: f64, points: u32) -> Option<Vec<Vector3>> {
    polygon(length, HEXAGON_SIDES, points)
}

/// Generates the points of a regular octagon. See [`polygon`].
pub fn octagon(length: f64, points: u32) -> Option<Vec<Vector3>> {
    polygon(length, OCTAGON_SIDES, points)
}

#[cfg(test)]
mod tests;
