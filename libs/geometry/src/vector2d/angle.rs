//! Direction of a 2D vector.
//!
//! Angles are radians, counter-clockwise positive, measured from the
//! positive x-axis, in the range (-π, π].

use std::f64::consts::{FRAC_PI_2, PI};

use super::Vector2D;

impl Vector2D {
    /// Signed angle of this vector from the positive x-axis, in (-π, π].
    ///
    /// Vectors lying on an axis return exact multiples of π/2 instead of the
    /// `atan2` result. The zero vector falls into the `x == 0` case and
    /// returns `-π/2`.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// assert_eq!(Vector2D::new(0.0, 1.0).angle(), FRAC_PI_2);
    /// assert_eq!(Vector2D::new(-1.0, 0.0).angle(), PI);
    /// assert_eq!(Vector2D::zero().angle(), -FRAC_PI_2);
    /// ```
    pub fn angle(self) -> f64 {
        if self.x == 0.0 {
            return if self.y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        }
        if self.y == 0.0 {
            return if self.x > 0.0 { 0.0 } else { PI };
        }
        self.y.atan2(self.x)
    }

    /// Builds the vector of the given `length` pointing at `angle`.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// use std::f64::consts::FRAC_PI_6;
    ///
    /// let v = Vector2D::create_from_angle(FRAC_PI_6, 2.0);
    /// assert!((v.x - 3f64.sqrt()).abs() < 1e-12);
    /// assert!((v.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn create_from_angle(angle: f64, length: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    /// Signed angle that `v2` is rotated from `v1`, in [-π, π].
    ///
    /// Positive when `v2` lies counter-clockwise of `v1`. Zero when either
    /// vector is the zero vector.
    ///
    /// The magnitude comes from the dot product; only the sign is taken from
    /// the two axis angles.
    ///
    /// # Examples
    /// ```
    /// use geometry::Vector2D;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let north = Vector2D::new(0.0, 1.0);
    /// let east = Vector2D::new(1.0, 0.0);
    /// let west = Vector2D::new(-1.0, 0.0);
    ///
    /// assert!((Vector2D::angle_between(north, east) + FRAC_PI_2).abs() < 1e-12);
    /// assert!((Vector2D::angle_between(north, west) - FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle_between(v1: Self, v2: Self) -> f64 {
        if v1 == Self::zero() || v2 == Self::zero() {
            return 0.0;
        }

        // Normalize first so extreme magnitudes cannot underflow or overflow
        // the product. Rounding can still push it just past ±1.
        let u1 = v1 / v1.length();
        let u2 = v2 / v2.length();
        let cosine = u1.dot(u2).clamp(-1.0, 1.0);
        let unsigned = cosine.acos();

        let a1 = v1.angle();
        let a2 = v2.angle();

        if a1 >= 0.0 {
            if a2 < a1 {
                if a2 > a1 - PI {
                    -unsigned
                } else {
                    unsigned
                }
            } else {
                unsigned
            }
        } else if a2 > a1 {
            if a2 > a1 + PI {
                -unsigned
            } else {
                unsigned
            }
        } else {
            -unsigned
        }
    }

    /// Signed angle from this vector to `other`; see [`Vector2D::angle_between`].
    pub fn angle_to(self, other: Self) -> f64 {
        Self::angle_between(self, other)
    }
}
