//! Right-hand sides accepted by the vector operators.
//!
//! [`Operand`] lets `+`, `-`, `+=` and `-=` take either a vector of the same
//! dimensionality or a scalar that is broadcast to every component.
//! [`Comparand`] is the explicit form of heterogeneous equality used by
//! `equals`.

use crate::{Vector2D, Vector3D};

/// A vector or a scalar broadcast to every component.
///
/// # Examples
/// ```
/// use geometry::{Operand, Vector2D};
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.plus(Operand::Scalar(3.0)), Vector2D::new(6.0, 7.0));
/// assert_eq!(v.plus(Vector2D::new(-3.0, 4.0)), Vector2D::new(0.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<V> {
    /// Component-wise operand.
    Vector(V),
    /// Scalar applied to every component.
    Scalar(f64),
}

impl<V> From<f64> for Operand<V> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Vector2D> for Operand<Vector2D> {
    fn from(value: Vector2D) -> Self {
        Operand::Vector(value)
    }
}

impl From<Vector3D> for Operand<Vector3D> {
    fn from(value: Vector3D) -> Self {
        Operand::Vector(value)
    }
}

/// Anything a vector can be compared against with `equals`.
///
/// Comparisons across dimensionality, or against a slice of the wrong
/// length, are `false` rather than an error.
///
/// # Examples
/// ```
/// use geometry::{Comparand, Vector2D, Vector3D};
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert!(v.equals(Comparand::Components(&[3.0, 4.0])));
/// assert!(!v.equals(Comparand::Components(&[3.0, 4.0, 0.0])));
/// assert!(!v.equals(Vector3D::new(3.0, 4.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparand<'a> {
    /// A 2D vector.
    Vector2(Vector2D),
    /// A 3D vector.
    Vector3(Vector3D),
    /// An ordered component sequence of any length.
    Components(&'a [f64]),
}

impl From<Vector2D> for Comparand<'_> {
    fn from(value: Vector2D) -> Self {
        Comparand::Vector2(value)
    }
}

impl From<Vector3D> for Comparand<'_> {
    fn from(value: Vector3D) -> Self {
        Comparand::Vector3(value)
    }
}

impl<'a> From<&'a [f64]> for Comparand<'a> {
    fn from(value: &'a [f64]) -> Self {
        Comparand::Components(value)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Comparand<'a> {
    fn from(value: &'a [f64; N]) -> Self {
        Comparand::Components(value.as_slice())
    }
}
