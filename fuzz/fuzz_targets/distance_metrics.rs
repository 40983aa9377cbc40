// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the slice-level distance cores.
//!
//! Verifies the metric axioms on arbitrary byte sequences. The cores promise
//! exact distances and no panics for any input; if either lies, every caller
//! ranking candidates by distance gets garbage orderings.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutandis::{generic_damerau_levenshtein, generic_levenshtein, generic_levenshtein_within};

/// Fuzz input for the distance cores
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    /// First operand (capped to keep the quadratic table fast)
    a: Vec<u8>,
    /// Second operand
    b: Vec<u8>,
    /// Budget for the bounded variant
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts in the quadratic table
    let a = &input.a[..input.a.len().min(64)];
    let b = &input.b[..input.b.len().min(64)];

    let lev = generic_levenshtein(a, b);
    let dam = generic_damerau_levenshtein(a, b);

    // INVARIANT 1: length difference and longer length bound both distances
    let lower = a.len().abs_diff(b.len());
    let upper = a.len().max(b.len());
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

    // INVARIANT 2: zero distance exactly for equal operands
    assert_eq!(lev == 0, a == b, "levenshtein zero/equality mismatch");
    assert_eq!(dam == 0, a == b, "damerau zero/equality mismatch");

    // INVARIANT 3: operand order is irrelevant
    assert_eq!(lev, generic_levenshtein(b, a), "levenshtein asymmetric");
    assert_eq!(dam, generic_damerau_levenshtein(b, a), "damerau asymmetric");

    // INVARIANT 4: transpositions only ever help
    assert!(dam <= lev, "damerau {} exceeds levenshtein {}", dam, lev);

    // INVARIANT 5: the bounded check agrees with the full distance
    let max = usize::from(input.max);
    assert_eq!(
        generic_levenshtein_within(a, b, max),
        lev <= max,
        "bounded check disagrees at budget {}",
        max
    );
});
