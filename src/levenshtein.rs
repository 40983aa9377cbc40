// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance over pre-segmented symbol slices.
//!
//! Classic two-row dynamic programming: the longer operand drives the outer
//! loop, so only `min(|a|, |b|) + 1` cells are ever live. The bounded
//! variant adds two early exits: `|len(a) - len(b)|` is a lower bound on
//! edit distance, and row minima never decrease, so a whole row above the
//! threshold can never recover.

use crate::contracts;
#[cfg(feature = "graphemes")]
use crate::segment::{self, DistanceError};

/// Minimum number of single-symbol insertions, deletions, and substitutions
/// turning `a` into `b`.
///
/// Symbols are whatever the caller segmented: grapheme clusters, code
/// points, bytes, tokens. Exact, deterministic, and symmetric; zero exactly
/// for equal slices. Runs in O(|a|·|b|) time and O(min(|a|, |b|)) space.
///
/// # Examples
///
/// ```
/// use mutandis::generic_levenshtein;
///
/// assert_eq!(generic_levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(generic_levenshtein(&[1, 2, 3], &[2, 3, 4]), 2);
/// ```
pub fn generic_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // The longer operand drives the outer loop; rows track the shorter one.
    let (outer, inner) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, outer_sym) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, inner_sym) in inner.iter().enumerate() {
            let cost = usize::from(outer_sym != inner_sym);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[inner.len()];
    contracts::check_distance_bounds(a.len(), b.len(), distance);
    contracts::check_zero_iff_equal(a, b, distance);
    distance
}

/// Is `generic_levenshtein(a, b) <= max`?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a finished row exceeds `max`, abandon the DP
///
/// Agrees with the full computation in every case; the exits only skip
/// work, never change the answer.
pub fn generic_levenshtein_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> bool {
    // Length difference is a lower bound on edit distance.
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, a_sym) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, b_sym) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(a_sym != b_sym);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        if min_row > max {
            return false;
        }
    }

    dp[b.len()] <= max
}

/// Levenshtein distance between two strings, compared by extended grapheme
/// clusters.
///
/// Both operands are segmented and validated against
/// [`segment::MAX_SYMBOLS`] before any table is allocated.
///
/// # Examples
///
/// ```
/// assert_eq!(mutandis::levenshtein("kitten", "sitting")?, 3);
///
/// // One symbol differs: precomposed "é" vs decomposed "e" + U+0301.
/// assert_eq!(mutandis::levenshtein("café", "cafe\u{301}")?, 1);
/// # Ok::<(), mutandis::DistanceError>(())
/// ```
#[cfg(feature = "graphemes")]
pub fn levenshtein(a: &str, b: &str) -> Result<usize, DistanceError> {
    let a_syms = segment::checked_graphemes(a)?;
    let b_syms = segment::checked_graphemes(b)?;
    Ok(generic_levenshtein(&a_syms, &b_syms))
}

/// Are two strings within `max` edits of each other, by grapheme clusters?
///
/// Same validation as [`levenshtein`]; agrees with
/// `levenshtein(a, b)? <= max` in every case.
#[cfg(feature = "graphemes")]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Result<bool, DistanceError> {
    let a_syms = segment::checked_graphemes(a)?;
    let b_syms = segment::checked_graphemes(b)?;
    Ok(generic_levenshtein_within(&a_syms, &b_syms, max))
}
