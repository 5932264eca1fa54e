//! # Declarative Shape Parameters
//!
//! [`ShapeParams`] names one generator together with its arguments, so shape
//! requests can be stored, sent over the wire as JSON, and generated with `?`
//! error handling instead of checking for `None`.
//!
//! ```rust
//! use shape_generator::ShapeParams;
//!
//! let params: ShapeParams =
//!     serde_json::from_str(r#"{"shape":"hexagon","length":2.0,"points":12}"#)?;
//! let points = params.generate()?;
//! assert_eq!(points.len(), 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use config::constants::{
    ellipsoid_repartition, HEXAGON_SIDES, MIN_ELLIPSE_POINTS, MIN_ELLIPSOID_GRANULARITY,
    MIN_POLYGON_SIDES, MIN_TORE_GRANULARITY, OCTAGON_SIDES, PENTAGON_SIDES, SQUARE_SIDES,
};
use config::generator::GeneratorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, ShapeResult};
use crate::shapes::{
    circle, circular_tore_with_sweep, ellipse, ellipsoid, hexagon, octagon, pentagon, polygon,
    polygonal_star, sphere, square,
};
use crate::Vector3;

/// One generator call, serialized with a `shape` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    /// See [`crate::circle`].
    Circle {
        /// Circle radius.
        radius: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::ellipse`].
    Ellipse {
        /// Radius along X.
        r1: f64,
        /// Radius along Z.
        r2: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::polygon`].
    Polygon {
        /// Side length.
        length: f64,
        /// Number of sides.
        sides: u32,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::square`].
    Square {
        /// Side length.
        length: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::pentagon`].
    Pentagon {
        /// Side length.
        length: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::hexagon`].
    Hexagon {
        /// Side length.
        length: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::octagon`].
    Octagon {
        /// Side length.
        length: f64,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::polygonal_star`].
    PolygonalStar {
        /// Tip radius.
        radius: f64,
        /// Number of tips.
        branches: u32,
        /// Number of points.
        points: u32,
    },
    /// See [`crate::ellipsoid`].
    Ellipsoid {
        /// Radius along X.
        r1: f64,
        /// Radius along Y.
        r2: f64,
        /// Radius along Z.
        r3: f64,
        /// Approximate number of points.
        granularity: u32,
    },
    /// See [`crate::sphere`].
    Sphere {
        /// Sphere radius.
        radius: f64,
        /// Approximate number of points.
        granularity: u32,
    },
    /// See [`crate::circular_tore`].
    CircularTore {
        /// Tube radius.
        r1: f64,
        /// Gap between the Y axis and the tube.
        r2: f64,
        /// Points per tube circle.
        granularity: u32,
    },
}

impl ShapeParams {
    /// Shape family name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeParams::Circle { .. } => "circle",
            ShapeParams::Ellipse { .. } => "ellipse",
            ShapeParams::Polygon { .. } => "polygon",
            ShapeParams::Square { .. } => "square",
            ShapeParams::Pentagon { .. } => "pentagon",
            ShapeParams::Hexagon { .. } => "hexagon",
            ShapeParams::Octagon { .. } => "octagon",
            ShapeParams::PolygonalStar { .. } => "polygonal_star",
            ShapeParams::Ellipsoid { .. } => "ellipsoid",
            ShapeParams::Sphere { .. } => "sphere",
            ShapeParams::CircularTore { .. } => "circular_tore",
        }
    }

    /// Number of points a successful generation returns under `config`.
    ///
    /// The value is meaningless for parameters the generator rejects.
    ///
    /// ```rust
    /// use config::generator::GeneratorConfig;
    /// use shape_generator::ShapeParams;
    ///
    /// let params = ShapeParams::Sphere { radius: 1.0, granularity: 50 };
    /// assert_eq!(params.expected_len(&GeneratorConfig::default()), 49);
    /// ```
    pub fn expected_len(&self, config: &GeneratorConfig) -> usize {
        match *self {
            ShapeParams::Circle { points, .. }
            | ShapeParams::Ellipse { points, .. }
            | ShapeParams::Polygon { points, .. }
            | ShapeParams::Square { points, .. }
            | ShapeParams::Pentagon { points, .. }
            | ShapeParams::Hexagon { points, .. }
            | ShapeParams::Octagon { points, .. } => points as usize,
            ShapeParams::PolygonalStar {
                branches, points, ..
            } => match branches.checked_mul(2) {
                Some(edge_count) if edge_count > 0 => {
                    (edge_count * (points / edge_count)) as usize
                }
                _ => 0,
            },
            ShapeParams::Ellipsoid { granularity, .. }
            | ShapeParams::Sphere { granularity, .. } => {
                let repartition = ellipsoid_repartition(granularity);
                repartition * repartition
            }
            ShapeParams::CircularTore { granularity, .. } => {
                config.tore_sweep_segments * granularity as usize
            }
        }
    }

    /// Generates the points with the default [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidParameters`] when the generator rejects the values.
    pub fn generate(&self) -> ShapeResult<Vec<Vector3>> {
        self.generate_with(&GeneratorConfig::default())
    }

    /// Generates the points under `config`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::Config`] when `config` does not pass
    /// [`GeneratorConfig::new`] validation, and
    /// [`ShapeError::InvalidParameters`] when the generator rejects the values
    /// or a polygon exceeds `config.max_polygon_sides`.
    pub fn generate_with(&self, config: &GeneratorConfig) -> ShapeResult<Vec<Vector3>> {
        let config = GeneratorConfig::new(config.tore_sweep_segments, config.max_polygon_sides)?;

        let generated = match *self {
            ShapeParams::Circle { radius, points } => circle(radius, points),
            ShapeParams::Ellipse { r1, r2, points } => ellipse(r1, r2, points),
            ShapeParams::Polygon {
                length,
                sides,
                points,
            } => {
                if sides > config.max_polygon_sides {
                    return Err(ShapeError::invalid(
                        self.name(),
                        format!("sides={sides} (max {})", config.max_polygon_sides),
                    ));
                }
                polygon(length, sides, points)
            }
            ShapeParams::Square { length, points } => square(length, points),
            ShapeParams::Pentagon { length, points } => pentagon(length, points),
            ShapeParams::Hexagon { length, points } => hexagon(length, points),
            ShapeParams::Octagon { length, points } => octagon(length, points),
            ShapeParams::PolygonalStar {
                radius,
                branches,
                points,
            } => polygonal_star(radius, branches, points),
            ShapeParams::Ellipsoid {
                r1,
                r2,
                r3,
                granularity,
            } => ellipsoid(r1, r2, r3, granularity),
            ShapeParams::Sphere {
                radius,
                granularity,
            } => sphere(radius, granularity),
            ShapeParams::CircularTore {
                r1,
                r2,
                granularity,
            } => circular_tore_with_sweep(r1, r2, granularity, config.tore_sweep_segments),
        };

        generated.ok_or_else(|| ShapeError::invalid(self.name(), self.rejection_reason()))
    }

    /// Names the first rule the parameters break, e.g. `points=3 (min 4)`.
    fn rejection_reason(&self) -> String {
        match *self {
            ShapeParams::Circle { radius, points } => {
                describe("points", points, MIN_ELLIPSE_POINTS, &[("radius", radius)])
            }
            ShapeParams::Ellipse { r1, r2, points } => {
                describe("points", points, MIN_ELLIPSE_POINTS, &[("r1", r1), ("r2", r2)])
            }
            ShapeParams::Polygon {
                length,
                sides,
                points,
            } => {
                if sides < MIN_POLYGON_SIDES {
                    format!("sides={sides} (min {MIN_POLYGON_SIDES})")
                } else {
                    describe("points", points, sides, &[("length", length)])
                }
            }
            ShapeParams::Square { length, points } => {
                describe("points", points, SQUARE_SIDES, &[("length", length)])
            }
            ShapeParams::Pentagon { length, points } => {
                describe("points", points, PENTAGON_SIDES, &[("length", length)])
            }
            ShapeParams::Hexagon { length, points } => {
                describe("points", points, HEXAGON_SIDES, &[("length", length)])
            }
            ShapeParams::Octagon { length, points } => {
                describe("points", points, OCTAGON_SIDES, &[("length", length)])
            }
            ShapeParams::PolygonalStar {
                radius,
                branches,
                points,
            } => match branches.checked_mul(2) {
                Some(0) => "branches=0 (must be positive)".to_string(),
                Some(edge_count) => describe("points", points, edge_count, &[("radius", radius)]),
                None => format!("branches={branches} (max {})", u32::MAX / 2),
            },
            ShapeParams::Ellipsoid {
                r1,
                r2,
                r3,
                granularity,
            } => describe(
                "granularity",
                granularity,
                MIN_ELLIPSOID_GRANULARITY,
                &[("r1", r1), ("r2", r2), ("r3", r3)],
            ),
            ShapeParams::Sphere {
                radius,
                granularity,
            } => describe(
                "granularity",
                granularity,
                MIN_ELLIPSOID_GRANULARITY,
                &[("radius", radius)],
            ),
            ShapeParams::CircularTore {
                r1,
                r2,
                granularity,
            } => describe(
                "granularity",
                granularity,
                MIN_TORE_GRANULARITY,
                &[("r1", r1), ("r2", r2)],
            ),
        }
    }
}

fn describe(count_name: &str, count: u32, min: u32, values: &[(&str, f64)]) -> String {
    if count < min {
        return format!("{count_name}={count} (min {min})");
    }
    values
        .iter()
        .find(|(_, value)| value.is_nan() || *value <= 0.0)
        .map(|(name, value)| format!("{name}={value} (must be positive)"))
        .unwrap_or_else(|| "rejected by the generator".to_string())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::shapes;

    #[test]
    fn test_generate_matches_free_functions() {
        let params = ShapeParams::Ellipse {
            r1: 10.0,
            r2: 5.0,
            points: 40,
        };
        assert_eq!(params.generate().unwrap(), shapes::ellipse(10.0, 5.0, 40).unwrap());

        let params = ShapeParams::CircularTore {
            r1: 5.0,
            r2: 2.0,
            granularity: 16,
        };
        assert_eq!(params.generate().unwrap(), shapes::circular_tore(5.0, 2.0, 16).unwrap());
    }

    #[test]
    fn test_invalid_parameters_become_errors() {
        let params = ShapeParams::Ellipse {
            r1: 10.0,
            r2: 5.0,
            points: 3,
        };
        match params.generate() {
            Err(ShapeError::InvalidParameters { shape, reason }) => {
                assert_eq!(shape, "ellipse");
                assert_eq!(reason, "points=3 (min 4)");
            }
            other => panic!("expected invalid parameters, got {other:?}"),
        }
    }

    #[test]
    fn test_polygon_side_limit() {
        let config = GeneratorConfig::new(64, 12).unwrap();
        let params = ShapeParams::Polygon {
            length: 1.0,
            sides: 13,
            points: 26,
        };
        assert!(matches!(
            params.generate_with(&config),
            Err(ShapeError::InvalidParameters { shape: "polygon", .. })
        ));
        assert_eq!(params.generate().unwrap().len(), 26);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = GeneratorConfig {
            tore_sweep_segments: 0,
            ..GeneratorConfig::default()
        };
        let params = ShapeParams::Circle {
            radius: 1.0,
            points: 8,
        };
        assert!(matches!(params.generate_with(&config), Err(ShapeError::Config(_))));
    }

    #[test]
    fn test_custom_sweep_count() {
        let config = GeneratorConfig::new(8, 64).unwrap();
        let params = ShapeParams::CircularTore {
            r1: 1.0,
            r2: 1.0,
            granularity: 4,
        };
        let points = params.generate_with(&config).unwrap();
        assert_eq!(points.len(), 32);
        assert_eq!(points.len(), params.expected_len(&config));
    }

    #[test]
    fn test_rejection_names_the_broken_rule() {
        let cases = [
            (
                ShapeParams::Circle {
                    radius: -1.0,
                    points: 8,
                },
                "radius=-1 (must be positive)",
            ),
            (
                ShapeParams::Polygon {
                    length: 1.0,
                    sides: 2,
                    points: 8,
                },
                "sides=2 (min 3)",
            ),
            (
                ShapeParams::Hexagon {
                    length: 1.0,
                    points: 5,
                },
                "points=5 (min 6)",
            ),
            (
                ShapeParams::PolygonalStar {
                    radius: 1.0,
                    branches: 0,
                    points: 8,
                },
                "branches=0 (must be positive)",
            ),
            (
                ShapeParams::Sphere {
                    radius: 1.0,
                    granularity: 3,
                },
                "granularity=3 (min 4)",
            ),
            (
                ShapeParams::CircularTore {
                    r1: 1.0,
                    r2: f64::NAN,
                    granularity: 8,
                },
                "r2=NaN (must be positive)",
            ),
        ];
        for (params, expected) in cases {
            match params.generate() {
                Err(ShapeError::InvalidParameters { shape, reason }) => {
                    assert_eq!(shape, params.name());
                    assert_eq!(reason, expected);
                }
                other => panic!("expected invalid parameters, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_star_with_overflowing_edge_count() {
        let params = ShapeParams::PolygonalStar {
            radius: 1.0,
            branches: 1 << 31,
            points: u32::MAX,
        };
        assert_eq!(params.expected_len(&GeneratorConfig::default()), 0);
        match params.generate() {
            Err(ShapeError::InvalidParameters { shape, reason }) => {
                assert_eq!(shape, "polygonal_star");
                assert!(reason.starts_with("branches=2147483648"));
            }
            other => panic!("expected invalid parameters, got {other:?}"),
        }
    }

    #[test]
    fn test_expected_len_matches_generation() {
        let config = GeneratorConfig::default();
        let all = [
            ShapeParams::Circle {
                radius: 1.0,
                points: 9,
            },
            ShapeParams::Ellipse {
                r1: 1.0,
                r2: 2.0,
                points: 9,
            },
            ShapeParams::Polygon {
                length: 1.0,
                sides: 7,
                points: 50,
            },
            ShapeParams::Square {
                length: 1.0,
                points: 9,
            },
            ShapeParams::Pentagon {
                length: 1.0,
                points: 9,
            },
            ShapeParams::Hexagon {
                length: 1.0,
                points: 9,
            },
            ShapeParams::Octagon {
                length: 1.0,
                points: 9,
            },
            ShapeParams::PolygonalStar {
                radius: 1.0,
                branches: 5,
                points: 37,
            },
            ShapeParams::Ellipsoid {
                r1: 1.0,
                r2: 2.0,
                r3: 3.0,
                granularity: 30,
            },
            ShapeParams::Sphere {
                radius: 1.0,
                granularity: 30,
            },
            ShapeParams::CircularTore {
                r1: 1.0,
                r2: 2.0,
                granularity: 5,
            },
        ];
        for params in &all {
            let points = params.generate().unwrap();
            assert_eq!(points.len(), params.expected_len(&config), "{}", params.name());
        }
    }

    #[test]
    fn test_json_round_trip() {
        let params = ShapeParams::PolygonalStar {
            radius: 10.0,
            branches: 5,
            points: 100,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains(r#""shape":"polygonal_star""#));
        let back: ShapeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_deserialize_sphere() {
        let params: ShapeParams =
            serde_json::from_str(r#"{"shape":"sphere","radius":2.5,"granularity":100}"#).unwrap();
        let points = params.generate().unwrap();
        assert_eq!(points.len(), 100);
        for p in &points {
            assert_abs_diff_eq!(p.length(), 2.5, epsilon = 1e-12);
        }
    }
}
