//! # Circular Tore
//!
//! Torus built by sweeping a tube circle around the Y axis.

use std::f64::consts::{FRAC_PI_2, TAU};

use config::constants::{MIN_TORE_GRANULARITY, TORE_SWEEP_SEGMENTS};

use crate::shapes::ellipse::circle;
use crate::validation::preconditions_check;
use crate::Vector3;

/// Generates surface points of a circular tore around the Y axis.
///
/// Uses [`TORE_SWEEP_SEGMENTS`] copies of the tube circle. See
/// [`circular_tore_with_sweep`].
///
/// # Example
///
/// ```rust
/// use shape_generator::circular_tore;
///
/// let points = circular_tore(5.0, 2.0, 16).unwrap();
/// assert_eq!(points.len(), 64 * 16);
/// ```
pub fn circular_tore(r1: f64, r2: f64, granularity: u32) -> Option<Vec<Vector3>> {
    circular_tore_with_sweep(r1, r2, granularity, TORE_SWEEP_SEGMENTS)
}

/// Generates surface points of a circular tore with a chosen sweep count.
///
/// # Arguments
///
/// * `r1` - Tube radius (must be positive)
/// * `r2` - Gap between the Y axis and the inner side of the tube (must be
///   positive); the tube center ring has radius `r1 + r2`
/// * `granularity` - Points per tube circle (at least 4)
/// * `sweep_segments` - Copies of the tube circle around Y (must be positive)
///
/// # Returns
///
/// `sweep_segments * granularity` vectors ordered sweep-major, or `None` if
/// the parameters are invalid.
///
/// # Algorithm
///
/// The XZ circle of radius `r1` is turned upright by a quarter turn about Z and
/// moved to `(0, 0, r1 + r2)`. Copy `i` of that ring is rotated about Y by
/// `2πi / sweep_segments`.
pub fn circular_tore_with_sweep(
    r1: f64,
    r2: f64,
    granularity: u32,
    sweep_segments: usize,
) -> Option<Vec<Vector3>> {
    if sweep_segments == 0 || preconditions_check(granularity, MIN_TORE_GRANULARITY, &[r1, r2]) {
        log::debug!(
            "circular tore rejected: r1={r1}, r2={r2}, granularity={granularity}, \
             sweep={sweep_segments}"
        );
        return None;
    }

    let translate = Vector3::new(0.0, 0.0, r1 + r2);
    let mut ring = circle(r1, granularity)?;
    for vector in &mut ring {
        vector.rotate_around_z(FRAC_PI_2).add(&translate);
    }

    let mut generated = Vec::with_capacity(sweep_segments * ring.len());
    for i in 0..sweep_segments {
        let angle = i as f64 * TAU / sweep_segments as f64;
        for vector in &ring {
            let mut swept = vector.clone();
            swept.rotate_around_y(angle);
            generated.push(swept);
        }
    }

    log::trace!("circular tore generated {} points", generated.len());
    Some(generated)
}
