//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of the tolerance constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_max_relative_is_small() {
    assert!(MAX_RELATIVE > 0.0);
    assert!(MAX_RELATIVE < 1e-4, "MAX_RELATIVE should stay well below 0.01%");
}
