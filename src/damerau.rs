// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau-Levenshtein distance with unrestricted transpositions.
//!
//! The Lowrance-Wagner recurrence: beyond insert, delete, and substitute,
//! two occurrences of a swapped symbol pair may trade places across any gap
//! for a cost of one, plus ordinary edit costs for everything strictly
//! between them. That needs the full distance table (the transposition
//! branch reads arbitrarily old rows), a map from symbol to the last row it
//! occurred in, and a per-row cursor for the last column that matched.
//!
//! Out-of-range table reads go through an accessor that answers with a
//! sentinel larger than any real distance. "No prior occurrence" surfaces
//! as a negative coordinate, the sentinel loses every `min`, and the
//! transposition branch disables itself with no per-cell special cases.

use std::collections::HashMap;
use std::hash::Hash;

use crate::contracts;
#[cfg(feature = "graphemes")]
use crate::segment::{self, DistanceError};

/// Distance table with a sentinel for out-of-range reads.
///
/// `get` treats any negative coordinate as "no such prefix pair" and
/// returns the ceiling, a value above every real distance, so the
/// recurrence can shift its bookkeeping indices by one without branching
/// on the table edges.
struct DistTable {
    cells: Vec<usize>,
    cols: usize,
    ceiling: usize,
}

impl DistTable {
    fn new(rows: usize, cols: usize, ceiling: usize) -> Self {
        DistTable {
            cells: vec![0; rows * cols],
            cols,
            ceiling,
        }
    }

    fn get(&self, row: isize, col: isize) -> usize {
        if row < 0 || col < 0 {
            return self.ceiling;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Minimum number of single-symbol insertions, deletions, substitutions,
/// and transpositions turning `a` into `b`.
///
/// Transpositions are unrestricted: any two positions holding a swapped
/// symbol pair may trade places for a cost of 1, plus ordinary edit costs
/// for the symbols between them. The result never exceeds
/// [`generic_levenshtein`](crate::generic_levenshtein) for the same pair,
/// and the metric properties (identity, symmetry, triangle inequality)
/// all hold.
///
/// Runs in O(|a|·|b|) time and space. `T: Eq + Hash` because the last-seen
/// bookkeeping is a hash map keyed by symbol.
///
/// # Examples
///
/// ```
/// use mutandis::generic_damerau_levenshtein;
///
/// // One transposition, however far apart the pair sits.
/// assert_eq!(generic_damerau_levenshtein(b"ab", b"ba"), 1);
/// assert_eq!(generic_damerau_levenshtein(b"specter", b"spectre"), 1);
/// ```
pub fn generic_damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // Iteration convention only: rows track the shorter operand. The
    // distance is symmetric, so swapping operands never changes it.
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let ceiling = a.len() + b.len() + 1;

    let mut table = DistTable::new(rows, cols, ceiling);
    for i in 0..rows {
        table.set(i, 0, i);
    }
    for j in 0..cols {
        table.set(0, j, j);
    }

    // Last row where each symbol of `a` occurred, as of the previous row.
    let mut last_row: HashMap<&T, usize> = HashMap::new();

    for i in 1..rows {
        let a_sym = &a[i - 1];
        // Last column of this row where the symbols matched.
        let mut last_match_col = 0;

        for j in 1..cols {
            let b_sym = &b[j - 1];

            let k = last_row.get(b_sym).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a_sym == b_sym {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = table.get(i as isize - 1, j as isize - 1) + cost;
            let insertion = table.get(i as isize, j as isize - 1) + 1;
            let deletion = table.get(i as isize - 1, j as isize) + 1;
            // One unit for the swap, a deletion for each symbol strictly
            // between the pair in `a`, an insertion for each one strictly
            // between in `b`. k = 0 or l = 0 means no prior pairing; the
            // accessor turns the shifted coordinate into the ceiling.
            let transposition =
                table.get(k as isize - 1, l as isize - 1) + (i - k - 1) + 1 + (j - l - 1);

            table.set(
                i,
                j,
                substitution.min(insertion).min(deletion).min(transposition),
            );
        }

        last_row.insert(a_sym, i);
    }

    let distance = table.get(a.len() as isize, b.len() as isize);
    contracts::check_distance_bounds(a.len(), b.len(), distance);
    contracts::check_zero_iff_equal(a, b, distance);
    distance
}

/// Damerau-Levenshtein distance between two strings, compared by extended
/// grapheme clusters.
///
/// Both operands are segmented and validated against
/// [`segment::MAX_SYMBOLS`] before any table is allocated.
///
/// # Examples
///
/// ```
/// // Transpose "ca" to "ac", then insert "b". Plain Levenshtein needs 3.
/// assert_eq!(mutandis::damerau_levenshtein("ca", "abc")?, 2);
/// assert_eq!(mutandis::levenshtein("ca", "abc")?, 3);
/// # Ok::<(), mutandis::DistanceError>(())
/// ```
#[cfg(feature = "graphemes")]
pub fn damerau_levenshtein(a: &str, b: &str) -> Result<usize, DistanceError> {
    let a_syms = segment::checked_graphemes(a)?;
    let b_syms = segment::checked_graphemes(b)?;
    Ok(generic_damerau_levenshtein(&a_syms, &b_syms))
}
