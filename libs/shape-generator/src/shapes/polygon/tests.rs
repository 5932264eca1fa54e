//! Regular polygon tests.

use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;

use super::*;

/// Asserts `p` lies on one of the edges of the regular `sides`-gon with the
/// given circumradius, first vertex on +X.
fn assert_on_polygon_edge(p: &Vector3, radius: f64, sides: u32) {
    let sector = TAU / sides as f64;
    let apothem = radius * (PI / sides as f64).cos();

    let phi = p.z().atan2(p.x()).rem_euclid(TAU);
    let k = ((phi / sector).floor() as u32).min(sides - 1);
    let normal = (k as f64 + 0.5) * sector;
    let projection = p.x() * normal.cos() + p.z() * normal.sin();

    assert_abs_diff_eq!(projection, apothem, epsilon = 1e-9);
    assert!(p.length() <= radius + 1e-9, "{p} lies beyond the vertices");
    assert_eq!(p.y(), 0.0);
}

#[test]
fn test_circumradius() {
    assert_abs_diff_eq!(circumradius(2.0, 4), 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(circumradius(1.0, 3), 1.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(circumradius(5.0, 6), 5.0, epsilon = 1e-12);
}

#[test]
fn test_polygon_point_count() {
    assert_eq!(polygon(10.0, 5, 100).unwrap().len(), 100);
    assert_eq!(polygon(10.0, 3, 3).unwrap().len(), 3);
    assert_eq!(polygon(10.0, 4, 10).unwrap().len(), 10);
}

#[test]
fn test_polygon_points_lie_on_edges() {
    for (sides, points) in [(3, 30), (4, 40), (5, 100), (6, 36), (7, 70), (8, 64)] {
        let length = 10.0;
        let radius = circumradius(length, sides);
        for p in polygon(length, sides, points).unwrap() {
            assert_on_polygon_edge(&p, radius, sides);
        }
    }
}

#[test]
fn test_polygon_uneven_points_still_on_edges() {
    let radius = circumradius(4.0, 5);
    let generated = polygon(4.0, 5, 13).unwrap();
    assert_eq!(generated.len(), 13);
    for p in &generated {
        assert_on_polygon_edge(p, radius, 5);
    }
}

#[test]
fn test_polygon_vertices_only() {
    // points == sides gives exactly the vertices.
    let generated = polygon(6.0, 6, 6).unwrap();
    for (i, p) in generated.iter().enumerate() {
        let angle = i as f64 * TAU / 6.0;
        assert_eq!(p, &Vector3::new(6.0 * angle.cos(), 0.0, 6.0 * angle.sin()));
    }
}

#[test]
fn test_square_edge_midpoints() {
    let generated = square(2.0, 8).unwrap();
    let half = 0.5_f64.sqrt();
    assert_eq!(generated[0], Vector3::new(2.0_f64.sqrt(), 0.0, 0.0));
    assert_eq!(generated[1], Vector3::new(half, 0.0, half));
    assert_eq!(generated[2], Vector3::new(0.0, 0.0, 2.0_f64.sqrt()));
}

#[test]
fn test_named_polygons_match_polygon() {
    assert_eq!(square(3.0, 20), polygon(3.0, 4, 20));
    assert_eq!(pentagon(3.0, 20), polygon(3.0, 5, 20));
    assert_eq!(hexagon(3.0, 24), polygon(3.0, 6, 24));
    assert_eq!(octagon(3.0, 24), polygon(3.0, 8, 24));
}

#[test]
fn test_invalid_polygon() {
    assert!(polygon(10.0, 2, 10).is_none());
    assert!(polygon(10.0, 0, 10).is_none());
    assert!(polygon(10.0, 5, 4).is_none());
    assert!(polygon(0.0, 5, 10).is_none());
    assert!(polygon(-1.0, 5, 10).is_none());
    assert!(octagon(1.0, 7).is_none());
}
