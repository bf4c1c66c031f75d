//! # Config Crate
//!
//! Centralized numeric tolerances for the vector geometry crates.
//! Every comparison threshold used by `geometry` is defined here so that
//! approximate equality behaves the same way everywhere.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{Tolerance, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(Tolerance::default().scalars_match(1.0, 1.0 + value));
//!
//! // Or carry a validated snapshot around
//! let tolerance = Tolerance::default();
//! assert_eq!(tolerance.epsilon, EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `const` items and one validated struct
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
