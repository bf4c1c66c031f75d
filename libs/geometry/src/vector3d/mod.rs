//! 3D vector value type.
//!
//! Mirrors [`Vector2D`](crate::Vector2D) component-wise and adds the cross
//! product. There are no angle operations: a 3D rotation angle needs a
//! reference plane that this type does not carry.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use config::constants::{Tolerance, EPSILON, MAX_RELATIVE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::operand::{Comparand, Operand};
use crate::parse::parse_components;

/// A 3-component Euclidean vector.
///
/// Serialized as its component array, `[x, y, z]`.
///
/// # Examples
/// ```
/// use geometry::Vector3D;
///
/// let x = Vector3D::unit_x();
/// let y = Vector3D::unit_y();
/// assert_eq!(x.cross(y), Vector3D::unit_z());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// Number of components.
    pub const DIMENSION: usize = 3;

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along the X axis.
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along the Y axis.
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along the Z axis.
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Components as `[x, y, z]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`, without intermediate overflow
    /// or underflow.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. Anticommutative.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector3D;
    ///
    /// let a = Vector3D::new(2.0, 3.0, 4.0);
    /// let b = Vector3D::new(2.0, -3.0, 4.0);
    /// assert_eq!(a.cross(b), Vector3D::new(24.0, 0.0, -12.0));
    /// assert_eq!(a.cross(b), -b.cross(a));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns `self + rhs`, broadcasting a scalar operand.
    pub fn plus(self, rhs: impl Into<Operand<Self>>) -> Self {
        match rhs.into() {
            Operand::Vector(v) => Self::new(self.x + v.x, self.y + v.y, self.z + v.z),
            Operand::Scalar(s) => Self::new(self.x + s, self.y + s, self.z + s),
        }
    }

    /// Returns `self - rhs`, broadcasting a scalar operand.
    pub fn minus(self, rhs: impl Into<Operand<Self>>) -> Self {
        match rhs.into() {
            Operand::Vector(v) => Self::new(self.x - v.x, self.y - v.y, self.z - v.z),
            Operand::Scalar(s) => Self::new(self.x - s, self.y - s, self.z - s),
        }
    }

    /// Returns `factor * self`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(factor * self.x, factor * self.y, factor * self.z)
    }

    /// Adds `rhs` to this vector in place and returns it for chaining.
    pub fn add_in_place(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = self.plus(rhs);
        self
    }

    /// Subtracts `rhs` from this vector in place and returns it for chaining.
    pub fn sub_in_place(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = self.minus(rhs);
        self
    }

    /// Structural equality against a vector or a component sequence.
    ///
    /// A 2D vector, or a sequence whose length is not 3, is never equal.
    pub fn equals<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        match other.into() {
            Comparand::Vector3(v) => *self == v,
            Comparand::Vector2(_) => false,
            Comparand::Components(components) => self.to_array().as_slice() == components,
        }
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.scalars_match(self.x, other.x)
            && tolerance.scalars_match(self.y, other.y)
            && tolerance.scalars_match(self.z, other.z)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl<T: Into<Operand<Vector3D>>> Add<T> for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: T) -> Vector3D {
        self.plus(rhs)
    }
}

impl<T: Into<Operand<Vector3D>>> Sub<T> for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: T) -> Vector3D {
        self.minus(rhs)
    }
}

impl<T: Into<Operand<Vector3D>>> AddAssign<T> for Vector3D {
    fn add_assign(&mut self, rhs: T) {
        self.add_in_place(rhs);
    }
}

impl<T: Into<Operand<Vector3D>>> SubAssign<T> for Vector3D {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_in_place(rhs);
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        self.scale(rhs)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f64) -> Vector3D {
        Vector3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

// =============================================================================
// EQUALITY AGAINST SEQUENCES
// =============================================================================

impl PartialEq<[f64; 3]> for Vector3D {
    fn eq(&self, other: &[f64; 3]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<[f64]> for Vector3D {
    fn eq(&self, other: &[f64]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Vec<f64>> for Vector3D {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.equals(other.as_slice())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3D {
    type Error = GeometryError;

    fn try_from(components: &[f64]) -> GeometryResult<Self> {
        match *components {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::dimension_mismatch(
                Self::DIMENSION,
                components.len(),
            )),
        }
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3D {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeometryResult<Self> {
        let components = parse_components(s)?;
        Self::try_from(components.as_slice())
    }
}

// =============================================================================
// APPROXIMATE COMPARISON
// =============================================================================

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        MAX_RELATIVE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
