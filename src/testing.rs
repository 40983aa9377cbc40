//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

/// Textbook full-matrix Levenshtein, kept as a differential oracle.
///
/// Quadratic space and none of the rolling-row or early-exit tricks, so it
/// is easy to audit by eye. Tests compare the production implementations
/// against it on random inputs.
pub fn naive_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut table = vec![vec![0usize; cols]; rows];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        table[0][j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[rows - 1][cols - 1]
}

/// Build the endpoint-swap pair `"a…b"` / `"b…a"` with `gap` filler symbols
/// between. Damerau-Levenshtein must report 2 for any gap length.
pub fn transposition_pair(gap: usize) -> (String, String) {
    let middle = "x".repeat(gap);
    (format!("a{}b", middle), format!("b{}a", middle))
}

/// Words exercising multi-byte and multi-code-point segmentation.
pub const MULTILINGUAL_WORDS: &[&str] = &[
    "café",
    "naïve",
    "résumé",
    "über",
    "tōkyō",
    "harīṣh",
    "tummalachērla",
    "māori",
    "తెలుగు",
    "హరీష్",
    "hello",
    "world",
];
