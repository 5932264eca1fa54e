//! # Shape Generator
//!
//! Ordered point sets approximating parametric 2D and 3D shapes, for use as
//! mesh or skeleton data by rendering and modeling code.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams (serde) → generators → Vec<Vector3> → point buffers
//! ```
//!
//! - [`Vector3`]: mutable vector with in-place arithmetic and rotations
//! - [`shapes`]: ellipse, circle, regular polygons, star, ellipsoid, sphere,
//!   circular tore
//! - [`ShapeParams`]: declarative generator calls with `Result` errors
//! - [`points`]: flat buffers, glam conversion, bounds
//!
//! Generators are pure and synchronous. Invalid parameters yield `None`:
//!
//! ```rust
//! use shape_generator::{ellipse, polygon};
//!
//! assert_eq!(ellipse(10.0, 5.0, 64).map(|p| p.len()), Some(64));
//! assert!(ellipse(10.0, 5.0, 3).is_none());
//! assert!(polygon(10.0, 2, 10).is_none());
//! ```

pub mod dispatch;
pub mod error;
pub mod points;
pub mod shapes;
pub mod validation;
pub mod vector;

pub use dispatch::ShapeParams;
pub use error::{ShapeError, ShapeResult, VectorError, VectorResult};
pub use shapes::{
    circle, circular_tore, circular_tore_with_sweep, ellipse, ellipsoid, hexagon, octagon,
    pentagon, polygon, polygonal_star, sphere, square,
};
pub use vector::Vector3;
