// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the string boundary.
//!
//! Arbitrary UTF-8 goes through segmentation, validation, and both
//! distances. The boundary promises to reject oversized operands eagerly
//! and otherwise never fail, whatever byte shapes the clusters take.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutandis::{damerau_levenshtein, levenshtein, segment, MAX_SYMBOLS};

/// Fuzz input for the string boundary
#[derive(Debug, Arbitrary)]
struct BoundaryInput {
    /// First operand (arbitrary UTF-8)
    a: String,
    /// Second operand
    b: String,
}

fuzz_target!(|input: BoundaryInput| {
    // Cap lengths to avoid timeouts; cut on a char boundary
    let a = cap(&input.a, 256);
    let b = cap(&input.b, 256);

    let ga = segment::graphemes(a);
    let gb = segment::graphemes(b);

    // INVARIANT 1: segmentation is faithful to the input
    assert_eq!(ga.concat(), a, "graphemes do not reassemble");
    assert!(
        ga.len() <= a.chars().count(),
        "more clusters than code points"
    );

    // Under the byte cap no operand can reach MAX_SYMBOLS.
    assert!(ga.len() <= MAX_SYMBOLS && gb.len() <= MAX_SYMBOLS);

    let lev = levenshtein(a, b).expect("under-cap operand rejected");
    let dam = damerau_levenshtein(a, b).expect("under-cap operand rejected");

    // INVARIANT 2: cluster counts bound both distances
    let lower = ga.len().abs_diff(gb.len());
    let upper = ga.len().max(gb.len());
    assert!(
        lower <= lev && lev <= upper,
        "levenshtein {} outside [{}, {}]",
        lev,
        lower,
        upper
    );
    assert!(
        lower <= dam && dam <= upper,
        "damerau {} outside [{}, {}]",
        dam,
        lower,
        upper
    );

    // INVARIANT 3: equal strings, and only equal strings, sit at zero
    assert_eq!(lev == 0, a == b, "zero/equality mismatch");

    // INVARIANT 4: operand order is irrelevant
    assert_eq!(lev, levenshtein(b, a).expect("under-cap operand rejected"));
    assert_eq!(dam, damerau_levenshtein(b, a).expect("under-cap operand rejected"));
});

/// Truncate to at most `max_bytes`, backing up to a char boundary.
fn cap(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
