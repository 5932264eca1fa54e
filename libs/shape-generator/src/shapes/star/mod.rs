//! # Polygonal Star
//!
//! Star outline alternating between outer tips and inner notches, in the XZ
//! plane.

use std::f64::consts::PI;

use crate::validation::preconditions_check;
use crate::Vector3;

/// Radius of the inner notches of a star whose tips lie on `radius`.
///
/// Uses the regular five-pointed star ratio
/// `1 / ((tan 0.4π + tan 0.3π) · sin 0.2π)` for every branch count.
///
/// # Example
///
/// ```rust
/// use shape_generator::shapes::star::inner_radius;
///
/// let inner = inner_radius(10.0);
/// assert!(inner > 0.0 && inner < 10.0);
/// ```
pub fn inner_radius(radius: f64) -> f64 {
    radius / (((PI * 0.4).tan() + (PI * 0.3).tan()) * (PI * 0.2).sin())
}

/// Generates the outline of a star with `branches` tips.
///
/// # Arguments
///
/// * `radius` - Distance from the center to each tip (must be positive)
/// * `branches` - Number of tips (must be positive)
/// * `points` - Number of points (at least `2 * branches`)
///
/// # Returns
///
/// `2 * branches * (points / (2 * branches))` vectors, or `None` if the
/// parameters are invalid. Counts that are not a multiple of `2 * branches`
/// are rounded down.
///
/// # Layout
///
/// Branch `i` spans the tip at angle `2πi/b`, the notch half a branch later,
/// and the next tip. Each of its two edges is sampled `points / (2b)` times
/// starting at the edge's first end. Samples of the two edges are interleaved:
/// `[tip, notch, tip + δ₁, notch + δ₂, ...]`.
pub fn polygonal_star(radius: f64, branches: u32, points: u32) -> Option<Vec<Vector3>> {
    let Some(edge_count) = branches.checked_mul(2) else {
        log::debug!("polygonal star rejected: branches={branches} overflows the edge count");
        return None;
    };
    if preconditions_check(points, edge_count, &[branches as f64, radius]) {
        log::debug!(
            "polygonal star rejected: radius={radius}, branches={branches}, points={points}"
        );
        return None;
    }

    let inner = inner_radius(radius);
    let samples = (points / edge_count) as usize;
    let branch_angle = PI / branches as f64;
    let mut generated = Vec::with_capacity(2 * branches as usize * samples);

    for i in 0..branches {
        let starting_angle = 2.0 * i as f64 * branch_angle;
        let middle_angle = starting_angle + branch_angle;
        let end_angle = 2.0 * (i + 1) as f64 * branch_angle;

        let starting_point = on_circle(radius, starting_angle);
        let middle_point = on_circle(inner, middle_angle);
        let end_point = on_circle(radius, end_angle);

        let mut first_edge = middle_point.clone();
        first_edge.subtract(&starting_point);
        let mut second_edge = end_point;
        second_edge.subtract(&middle_point);

        for j in 0..samples {
            let t = j as f64 / samples as f64;

            let mut first = first_edge.clone();
            first.multiply(t).add(&starting_point);
            generated.push(first);

            let mut second = second_edge.clone();
            second.multiply(t).add(&middle_point);
            generated.push(second);
        }
    }

    log::trace!("polygonal star generated {} points", generated.len());
    Some(generated)
}

fn on_circle(radius: f64, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(radius * cos, 0.0, radius * sin)
}
