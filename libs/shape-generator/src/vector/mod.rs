//! # Vector3
//!
//! Mutable double-precision 3D vector underlying every generator.
//!
//! Operations mutate the receiver and return `&mut Self`, so transforms chain:
//!
//! ```rust
//! use shape_generator::Vector3;
//!
//! let mut v = Vector3::new(1.0, 0.0, 0.0);
//! v.rotate_around_z(std::f64::consts::FRAC_PI_2)
//!     .add(&Vector3::new(0.0, 0.0, 3.0))
//!     .multiply(2.0);
//! assert_eq!(v, Vector3::new(0.0, 2.0, 6.0));
//! ```
//!
//! Work on a copy with `clone()` when the original must survive.

use std::fmt;

use config::constants::approx_equal;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};

/// A point or direction in 3D space, backed by `glam::DVec3`.
///
/// Equality compares components within
/// [`config::constants::VECTOR_EQUALITY_TOLERANCE`] and is only defined between
/// two `Vector3` values. A `glam::DVec3` holding the same coordinates is not
/// comparable without an explicit conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vector3(DVec3);

impl Vector3 {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Replaces the X component.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.0.x = x;
        self
    }

    /// Replaces the Y component.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.0.y = y;
        self
    }

    /// Replaces the Z component.
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.0.z = z;
        self
    }

    /// Adds `other` component-wise.
    pub fn add(&mut self, other: &Vector3) -> &mut Self {
        self.0 += other.0;
        self
    }

    /// Subtracts `other` component-wise.
    pub fn subtract(&mut self, other: &Vector3) -> &mut Self {
        self.0 -= other.0;
        self
    }

    /// Scales every component by `factor`.
    pub fn multiply(&mut self, factor: f64) -> &mut Self {
        self.0 *= factor;
        self
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product `self × other` as a new vector.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Self(self.0.cross(other.0))
    }

    /// Squared Euclidean length.
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Returns true when the squared length is exactly `1.0`.
    ///
    /// No tolerance is applied, so most computed unit vectors report `false`
    /// and get normalized again by [`Vector3::rotate_around_axis`].
    ///
    /// ```rust
    /// use shape_generator::Vector3;
    ///
    /// assert!(Vector3::new(0.0, 1.0, 0.0).is_normalized());
    /// assert!(!Vector3::new(1.0, 1e-3, 0.0).is_normalized());
    /// ```
    pub fn is_normalized(&self) -> bool {
        self.length_squared() == 1.0
    }

    /// Divides every component by the current length.
    ///
    /// A zero vector is not guarded against: its components become NaN.
    pub fn normalize(&mut self) -> &mut Self {
        self.0 /= self.0.length();
        self
    }

    /// Rotates around the X axis by `angle` radians (right-handed).
    pub fn rotate_around_x(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let DVec3 { y, z, .. } = self.0;
        let (y, z) = (cos * y - sin * z, sin * y + cos * z);
        self.set_y(y).set_z(z)
    }

    /// Rotates around the Y axis by `angle` radians (right-handed).
    pub fn rotate_around_y(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let DVec3 { x, z, .. } = self.0;
        let (x, z) = (cos * x + sin * z, -sin * x + cos * z);
        self.set_x(x).set_z(z)
    }

    /// Rotates around the Z axis by `angle` radians (right-handed).
    pub fn rotate_around_z(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let DVec3 { x, y, .. } = self.0;
        let (x, y) = (cos * x - sin * y, sin * x + cos * y);
        self.set_x(x).set_y(y)
    }

    /// Rotates around an arbitrary axis by `angle` radians.
    ///
    /// The axis is normalized on a copy unless [`Vector3::is_normalized`]
    /// already holds; the caller's axis is never modified.
    ///
    /// # Errors
    ///
    /// [`VectorError::MissingAxis`] when `axis` is `None`.
    ///
    /// ```rust
    /// use shape_generator::{Vector3, VectorError};
    ///
    /// let mut v = Vector3::new(0.0, 1.0, 0.0);
    /// v.rotate_around_axis(Some(&Vector3::new(2.0, 0.0, 0.0)), std::f64::consts::PI)?;
    /// assert_eq!(v, Vector3::new(0.0, -1.0, 0.0));
    ///
    /// assert_eq!(v.rotate_around_axis(None, 1.0).err(), Some(VectorError::MissingAxis));
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn rotate_around_axis(
        &mut self,
        axis: Option<&Vector3>,
        angle: f64,
    ) -> VectorResult<&mut Self> {
        let axis = axis.ok_or(VectorError::MissingAxis)?;
        if axis.is_normalized() {
            self.rotate_around_non_unit_axis(Some(axis), angle)
        } else {
            let mut unit = axis.clone();
            unit.normalize();
            self.rotate_around_non_unit_axis(Some(&unit), angle)
        }
    }

    /// Rotates around `axis` with Rodrigues' formula, without normalizing it.
    ///
    /// `v' = a(v·a)(1 - cosθ) + v cosθ + (a × v) sinθ`. A non-unit axis scales
    /// the parallel and perpendicular parts accordingly.
    ///
    /// # Errors
    ///
    /// [`VectorError::MissingAxis`] when `axis` is `None`.
    pub fn rotate_around_non_unit_axis(
        &mut self,
        axis: Option<&Vector3>,
        angle: f64,
    ) -> VectorResult<&mut Self> {
        let axis = axis.ok_or(VectorError::MissingAxis)?;
        let DVec3 { x, y, z } = self.0;
        let DVec3 {
            x: ax,
            y: ay,
            z: az,
        } = axis.0;
        let (sin, cos) = angle.sin_cos();
        let dot = self.dot(axis);

        let x_prime = ax * dot * (1.0 - cos) + x * cos + (-az * y + ay * z) * sin;
        let y_prime = ay * dot * (1.0 - cos) + y * cos + (az * x - ax * z) * sin;
        let z_prime = az * dot * (1.0 - cos) + z * cos + (-ay * x + ax * y) * sin;
        Ok(self.set_x(x_prime).set_y(y_prime).set_z(z_prime))
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        approx_equal(self.0.x, other.0.x)
            && approx_equal(self.0.y, other.0.y)
            && approx_equal(self.0.z, other.0.z)
    }
}

/// Formats as `x,y,z` with Rust's shortest round-trip float representation
/// (`{:?}`), which always keeps a fractional part: `1.0,0.0,-2.5`.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?},{:?},{:?}", self.0.x, self.0.y, self.0.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl From<&Vector3> for DVec3 {
    fn from(v: &Vector3) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self(DVec3::from_array(components))
    }
}
