//! # Point Buffers
//!
//! Helpers turning generated points into the layouts renderers consume.

use glam::DVec3;

use crate::Vector3;

/// Flattens points into `[x0, y0, z0, x1, y1, z1, ...]`.
///
/// # Example
///
/// ```rust
/// use shape_generator::{points::flatten, Vector3};
///
/// let flat = flatten(&[Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)]);
/// assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn flatten(points: &[Vector3]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x(), p.y(), p.z()]).collect()
}

/// Converts points to `glam::DVec3`.
pub fn to_dvec3(points: &[Vector3]) -> Vec<DVec3> {
    points.iter().map(DVec3::from).collect()
}

/// Axis-aligned bounds as `(min, max)`, or `None` for an empty slice.
pub fn bounding_box(points: &[Vector3]) -> Option<(Vector3, Vector3)> {
    let (first, rest) = points.split_first()?;
    let first = DVec3::from(first);
    let (min, max) = rest.iter().fold((first, first), |(min, max), p| {
        let p = DVec3::from(p);
        (min.min(p), max.max(p))
    });
    Some((min.into(), max.into()))
}

/// Offsets every point by `offset` in place.
pub fn translate(points: &mut [Vector3], offset: &Vector3) {
    for point in points {
        point.add(offset);
    }
}
