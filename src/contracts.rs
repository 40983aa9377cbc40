// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance algorithms.
//!
//! Debug-mode assertions for the properties every returned distance must
//! satisfy. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # Contracts
//!
//! | Contract Function       | Property                                         |
//! |-------------------------|--------------------------------------------------|
//! | `check_distance_bounds` | `\|len(a) - len(b)\| <= d <= max(len(a), len(b))` |
//! | `check_zero_iff_equal`  | `d == 0` exactly when the inputs are equal       |
//!
//! Both distance cores call these on their result before returning. The
//! same properties are exercised over random inputs in `tests/property.rs`
//! and over fuzzer inputs in `fuzz/`.

/// Check that a distance respects the length-based bounds.
///
/// Deleting the length difference is unavoidable, and substituting every
/// symbol of the longer operand is always sufficient, so any real distance
/// lies in `[|len(a) - len(b)|, max(len(a), len(b))]`.
///
/// # Panics (debug builds only)
/// Panics if the distance falls outside the bounds.
#[inline]
pub fn check_distance_bounds(a_len: usize, b_len: usize, distance: usize) {
    debug_assert!(
        distance >= a_len.abs_diff(b_len),
        "Contract violation: distance {} below length-difference lower bound |{} - {}|",
        distance,
        a_len,
        b_len
    );
    debug_assert!(
        distance <= a_len.max(b_len),
        "Contract violation: distance {} above upper bound max({}, {})",
        distance,
        a_len,
        b_len
    );
}

/// Check that zero distance coincides with symbol-wise equality.
///
/// # Panics (debug builds only)
/// Panics if the distance is zero for unequal inputs or non-zero for equal
/// inputs.
#[inline]
pub fn check_zero_iff_equal<T: PartialEq>(a: &[T], b: &[T], distance: usize) {
    debug_assert!(
        (distance == 0) == (a == b),
        "Contract violation: distance {} and input equality {} disagree",
        distance,
        a == b
    );
}
