// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the mutandis distance cores.
//!
//! This standalone crate extracts the two dynamic programs over a byte
//! alphabet and proves their shared invariants with Kani, exhaustively for
//! all operands of up to [`MAX_LEN`] symbols.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither distance panics for any operands
//! 2. **Bounds**: `|len(a) - len(b)| <= d <= max(len(a), len(b))`
//! 3. **Zero iff equal**: `d == 0` exactly for equal operands
//! 4. **Symmetry**: `d(a, b) == d(b, a)`
//! 5. **Ordering**: transpositions never increase the distance

/// Operand length bound for the proof harnesses. The quadratic tables put
/// exhaustive checking much beyond this out of the solver's reach.
pub const MAX_LEN: usize = 4;

const DIM: usize = MAX_LEN + 1;

// ============================================================================
// LEVENSHTEIN (copied from src/levenshtein.rs, rows sized to the bound)
// ============================================================================

/// Rolling two-row Levenshtein distance over byte slices.
///
/// Operands must be at most [`MAX_LEN`] bytes; the fixed-size rows replace
/// the main crate's heap rows so the solver sees no allocation.
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let (outer, inner) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut prev = [0usize; DIM];
    let mut curr = [0usize; DIM];
    for (j, cell) in prev.iter_mut().enumerate().take(inner.len() + 1) {
        *cell = j;
    }

    for (i, outer_sym) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, inner_sym) in inner.iter().enumerate() {
            let cost = usize::from(outer_sym != inner_sym);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}

// ============================================================================
// DAMERAU-LEVENSHTEIN (copied from src/damerau.rs, the symbol map
// specialized to a 256-entry array)
// ============================================================================

/// Sentinel-answering table read: negative coordinates mean "no such
/// prefix pair" and lose every `min` against real distances.
fn get(table: &[[usize; DIM]; DIM], row: isize, col: isize, ceiling: usize) -> usize {
    if row < 0 || col < 0 {
        return ceiling;
    }
    table[row as usize][col as usize]
}

/// Full-table Damerau-Levenshtein distance over byte slices, with
/// unrestricted transpositions.
///
/// Operands must be at most [`MAX_LEN`] bytes.
pub fn damerau_levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };

    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let ceiling = a.len() + b.len() + 1;

    let mut table = [[0usize; DIM]; DIM];
    for (i, row) in table.iter_mut().enumerate().take(rows) {
        row[0] = i;
    }
    for j in 0..cols {
        table[0][j] = j;
    }

    // Last row where each byte value occurred, as of the previous row.
    let mut last_row = [0usize; 256];

    for i in 1..rows {
        let a_sym = a[i - 1];
        let mut last_match_col = 0usize;

        for j in 1..cols {
            let b_sym = b[j - 1];

            let k = last_row[usize::from(b_sym)];
            let l = last_match_col;

            let cost = if a_sym == b_sym {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = get(&table, i as isize - 1, j as isize - 1, ceiling) + cost;
            let insertion = get(&table, i as isize, j as isize - 1, ceiling) + 1;
            let deletion = get(&table, i as isize - 1, j as isize, ceiling) + 1;
            let transposition =
                get(&table, k as isize - 1, l as isize - 1, ceiling) + (i - k - 1) + 1 + (j - l - 1);

            table[i][j] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }

        last_row[usize::from(a_sym)] = i;
    }

    table[a.len()][b.len()]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the rolling-row distance never panics and respects the
    /// length bounds, for all operands up to MAX_LEN bytes.
    #[kani::proof]
    #[kani::unwind(6)] // Every loop runs at most MAX_LEN + 1 times
    fn verify_levenshtein_bounds() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        let d = levenshtein(&a[..a_len], &b[..b_len]);

        kani::assert(
            d >= a_len.abs_diff(b_len),
            "distance below length-difference bound",
        );
        kani::assert(d <= a_len.max(b_len), "distance above longer-length bound");
    }

    /// Verify zero distance appears exactly on equal operands.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_levenshtein_zero_iff_equal() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        let d = levenshtein(&a[..a_len], &b[..b_len]);
        kani::assert(
            (d == 0) == (a[..a_len] == b[..b_len]),
            "zero distance disagrees with equality",
        );
    }

    /// Verify operand order never changes the distance.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_levenshtein_symmetry() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        kani::assert(
            levenshtein(&a[..a_len], &b[..b_len]) == levenshtein(&b[..b_len], &a[..a_len]),
            "distance depends on operand order",
        );
    }

    /// Verify the transposition table never panics and respects the
    /// length bounds.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_damerau_bounds() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        let d = damerau_levenshtein(&a[..a_len], &b[..b_len]);

        kani::assert(
            d >= a_len.abs_diff(b_len),
            "distance below length-difference bound",
        );
        kani::assert(d <= a_len.max(b_len), "distance above longer-length bound");
    }

    /// Verify operand order never changes the transposition distance.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_damerau_symmetry() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        kani::assert(
            damerau_levenshtein(&a[..a_len], &b[..b_len])
                == damerau_levenshtein(&b[..b_len], &a[..a_len]),
            "distance depends on operand order",
        );
    }

    /// Verify transpositions only ever shorten the edit sequence.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_damerau_never_exceeds_levenshtein() {
        let a_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let b_len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        for i in 0..a_len {
            a[i] = kani::any();
        }
        for i in 0..b_len {
            b[i] = kani::any();
        }

        kani::assert(
            damerau_levenshtein(&a[..a_len], &b[..b_len])
                <= levenshtein(&a[..a_len], &b[..b_len]),
            "transposition made the distance worse",
        );
    }

    /// Verify the unrestricted transposition on a concrete witness: a swap
    /// plus an insertion beats the three plain edits.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_unrestricted_transposition_witness() {
        kani::assert(damerau_levenshtein(b"ca", b"abc") == 2, "swap-then-insert witness");
        kani::assert(levenshtein(b"ca", b"abc") == 3, "plain-edit witness");
    }
}
