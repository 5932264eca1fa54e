//! # Config Crate
//!
//! Centralized configuration constants for the shape generators.
//! All magic numbers and tunable parameters are defined here so the
//! generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_ELLIPSE_POINTS, TORE_SWEEP_SEGMENTS};
//! use config::generator::GeneratorConfig;
//!
//! let requested_points = 16;
//! assert!(requested_points >= MIN_ELLIPSE_POINTS);
//!
//! let cfg = GeneratorConfig::default();
//! assert_eq!(cfg.tore_sweep_segments, TORE_SWEEP_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain Rust, usable from any layer
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod generator;
