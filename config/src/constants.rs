//! # Configuration Constants
//!
//! Tolerances used when comparing vector components and angles.
//!
//! ## Categories
//!
//! - **Precision**: Absolute and relative comparison tolerances
//! - **Snapshot**: [`Tolerance`], a validated pair of the above
//! - **Helpers**: Scalar comparisons built on [`EPSILON`]

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute epsilon for floating-point comparisons.
///
/// Used as the default epsilon when vectors are compared with the `approx`
/// traits. Small enough that exact lattice values (3, 4, 0.5) never collide,
/// large enough to absorb the rounding of a `cos`/`sin` round trip.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default maximum relative difference for relative comparisons.
///
/// Applies to large magnitudes where a fixed absolute epsilon would be
/// meaningless.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RELATIVE;
///
/// let a: f64 = 1.0e12;
/// let b = a * (1.0 + MAX_RELATIVE / 2.0);
/// assert!((a - b).abs() <= a.abs().max(b.abs()) * MAX_RELATIVE);
/// ```
pub const MAX_RELATIVE: f64 = 1e-8;

// =============================================================================
// TOLERANCE SNAPSHOT
// =============================================================================

/// Validated pair of comparison tolerances.
///
/// # Examples
/// ```
/// use config::constants::Tolerance;
/// let tolerance = Tolerance::default();
/// assert!(tolerance.epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance applied per component.
    pub epsilon: f64,
    /// Relative tolerance applied per component.
    pub max_relative: f64,
}

impl Tolerance {
    /// Builds a tolerance, rejecting values that are not finite and positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerance;
    /// let tolerance = Tolerance::new(1.0e-6, 1.0e-6).expect("valid tolerance");
    /// assert_eq!(tolerance.epsilon, 1.0e-6);
    /// assert!(Tolerance::new(0.0, 1.0e-6).is_err());
    /// ```
    pub fn new(epsilon: f64, max_relative: f64) -> Result<Self, ConfigError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        if !(max_relative.is_finite() && max_relative > 0.0) {
            return Err(ConfigError::InvalidMaxRelative(max_relative));
        }
        Ok(Self {
            epsilon,
            max_relative,
        })
    }

    /// Checks two scalars against this tolerance.
    ///
    /// Values pass when within `epsilon` absolutely or within `max_relative`
    /// of the larger magnitude.
    pub fn scalars_match(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        if diff <= self.epsilon {
            return true;
        }
        diff <= a.abs().max(b.abs()) * self.max_relative
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            max_relative: MAX_RELATIVE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the absolute tolerance is zero, negative or not finite.
    InvalidEpsilon(f64),
    /// Raised when the relative tolerance is zero, negative or not finite.
    InvalidMaxRelative(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "epsilon must be finite and positive: {value}")
            }
            ConfigError::InvalidMaxRelative(value) => {
                write!(f, "max_relative must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
