//! # Shapes
//!
//! Point generators, one module per shape family. Every generator is a pure
//! function returning `None` when its parameters are invalid.

pub mod ellipse;
pub mod ellipsoid;
pub mod polygon;
pub mod star;
pub mod tore;

pub use ellipse::{circle, ellipse};
pub use ellipsoid::{ellipsoid, sphere};
pub use polygon::{hexagon, octagon, pentagon, polygon, square};
pub use star::polygonal_star;
pub use tore::{circular_tore, circular_tore_with_sweep};
