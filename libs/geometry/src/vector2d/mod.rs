//! 2D vector value type.
//!
//! Arithmetic, comparison and conversions live here; direction logic
//! (`angle`, `create_from_angle`, `angle_between`) lives in [`angle`].

pub mod angle;

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use config::constants::{Tolerance, EPSILON, MAX_RELATIVE};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::operand::{Comparand, Operand};
use crate::parse::parse_components;

/// A 2-component Euclidean vector.
///
/// Serialized as its component array, `[x, y]`.
///
/// # Examples
/// ```
/// use geometry::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(2.0 * v, v * 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2D {
    /// Number of components.
    pub const DIMENSION: usize = 2;

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// assert_eq!(Vector2D::zero(), [0.0, 0.0]);
    /// ```
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Unit vector along the X axis.
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Unit vector along the Y axis.
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Components as `[x, y]`.
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean length, `sqrt(x² + y²)`, without intermediate overflow or
    /// underflow.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// let a = Vector2D::new(3.0, 4.0);
    /// assert_eq!(a.dot(Vector2D::new(-3.0, 4.0)), 7.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns `self + rhs`, broadcasting a scalar operand.
    pub fn plus(self, rhs: impl Into<Operand<Self>>) -> Self {
        match rhs.into() {
            Operand::Vector(v) => Self::new(self.x + v.x, self.y + v.y),
            Operand::Scalar(s) => Self::new(self.x + s, self.y + s),
        }
    }

    /// Returns `self - rhs`, broadcasting a scalar operand.
    pub fn minus(self, rhs: impl Into<Operand<Self>>) -> Self {
        match rhs.into() {
            Operand::Vector(v) => Self::new(self.x - v.x, self.y - v.y),
            Operand::Scalar(s) => Self::new(self.x - s, self.y - s),
        }
    }

    /// Returns `factor * self`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(factor * self.x, factor * self.y)
    }

    /// Adds `rhs` to this vector in place and returns it for chaining.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// let mut v = Vector2D::zero();
    /// v.add_in_place(Vector2D::new(3.0, 4.0)).add_in_place(1.0);
    /// assert_eq!(v, Vector2D::new(4.0, 5.0));
    /// ```
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
    /// A 3D vector, or a sequence whose length is not 2, is never equal.
    pub fn equals<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        match other.into() {
            Comparand::Vector2(v) => *self == v,
            Comparand::Vector3(_) => false,
            Comparand::Components(components) => self.to_array().as_slice() == components,
        }
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.scalars_match(self.x, other.x) && tolerance.scalars_match(self.y, other.y)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl<T: Into<Operand<Vector2D>>> Add<T> for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: T) -> Vector2D {
        self.plus(rhs)
    }
}

impl<T: Into<Operand<Vector2D>>> Sub<T> for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: T) -> Vector2D {
        self.minus(rhs)
    }
}

impl<T: Into<Operand<Vector2D>>> AddAssign<T> for Vector2D {
    fn add_assign(&mut self, rhs: T) {
        self.add_in_place(rhs);
    }
}

impl<T: Into<Operand<Vector2D>>> SubAssign<T> for Vector2D {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_in_place(rhs);
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.scale(rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

// =============================================================================
// EQUALITY AGAINST SEQUENCES
// =============================================================================

impl PartialEq<[f64; 2]> for Vector2D {
    fn eq(&self, other: &[f64; 2]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<[f64]> for Vector2D {
    fn eq(&self, other: &[f64]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Vec<f64>> for Vector2D {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.equals(other.as_slice())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = GeometryError;

    fn try_from(components: &[f64]) -> GeometryResult<Self> {
        match *components {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(GeometryError::dimension_mismatch(
                Self::DIMENSION,
                components.len(),
            )),
        }
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeometryResult<Self> {
        let components = parse_components(s)?;
        Self::try_from(components.as_slice())
    }
}

// =============================================================================
// APPROXIMATE COMPARISON
// =============================================================================

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        MAX_RELATIVE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
