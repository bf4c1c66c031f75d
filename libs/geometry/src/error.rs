//! # Error Types
//!
//! Errors for the fallible edges of the vector API: building a vector from a
//! runtime-sized slice and parsing the `[x, y]` text form. Arithmetic itself
//! never fails; division by zero follows IEEE-754 and yields inf/NaN.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building vectors from external data.
///
/// ## Example
///
/// ```rust
/// use geometry::{GeometryError, Vector2D};
///
/// match Vector2D::try_from([1.0_f64, 2.0, 3.0].as_slice()) {
///     Ok(v) => println!("vector: {v}"),
///     Err(GeometryError::DimensionMismatch { expected, found }) => {
///         eprintln!("expected {expected} components, got {found}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Wrong number of components for the target vector type.
    #[error("Expected {expected} components, found {found}")]
    DimensionMismatch {
        /// Component count of the target type
        expected: usize,
        /// Component count actually supplied
        found: usize,
    },

    /// Text could not be read as a component list.
    #[error("Cannot parse '{input}' as a vector: {reason}")]
    Parse {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl GeometryError {
    /// Creates a parse error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for fallible vector construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
