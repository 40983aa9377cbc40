//! Tests for the Lowrance-Wagner transposition distance.

use super::common::{transposition_pair, KNOWN_DISTANCES};
use mutandis::{
    damerau_levenshtein, generic_damerau_levenshtein, levenshtein, DistanceError, MAX_SYMBOLS,
};

#[test]
fn test_known_distances() {
    for &(a, b, _, expected) in KNOWN_DISTANCES {
        assert_eq!(
            damerau_levenshtein(a, b).unwrap(),
            expected,
            "damerau_levenshtein({:?}, {:?})",
            a,
            b
        );
    }
}

#[test]
fn test_symmetry_over_known_pairs() {
    for &(a, b, _, expected) in KNOWN_DISTANCES {
        assert_eq!(damerau_levenshtein(b, a).unwrap(), expected);
    }
}

#[test]
fn test_transposition_across_any_gap() {
    // gap 0 is a plain adjacent swap; any larger gap adds exactly one more
    // edit pair, after which the distance stays flat.
    for gap in 0..32 {
        let (a, b) = transposition_pair(gap);
        let expected = if gap == 0 { 1 } else { 2 };
        assert_eq!(
            damerau_levenshtein(&a, &b).unwrap(),
            expected,
            "gap {}",
            gap
        );
    }
}

#[test]
fn test_never_exceeds_levenshtein() {
    for &(a, b, _, _) in KNOWN_DISTANCES {
        assert!(damerau_levenshtein(a, b).unwrap() <= levenshtein(a, b).unwrap());
    }
}

#[test]
fn test_gap_symbols_are_charged() {
    // The transposition branch pays for every symbol strictly between the
    // swapped pair, so a matching middle does not make the swap free.
    assert_eq!(damerau_levenshtein("banana", "nabana").unwrap(), 2);
    assert_eq!(damerau_levenshtein("abcd", "dbca").unwrap(), 2);
}

#[test]
fn test_two_independent_swaps() {
    assert_eq!(damerau_levenshtein("abcd", "badc").unwrap(), 2);
}

#[test]
fn test_swap_combined_with_other_edits() {
    // One adjacent swap plus one insertion.
    assert_eq!(damerau_levenshtein("recieve", "receives").unwrap(), 2);
}

#[test]
fn test_swapped_emoji_clusters() {
    // Each face is one grapheme cluster, so the swap is one operation.
    assert_eq!(
        damerau_levenshtein("\u{1F431}\u{1F436}", "\u{1F436}\u{1F431}").unwrap(),
        1
    );
}

#[test]
fn test_generic_token_sequences() {
    let a = ["edit", "distance", "module"];
    let b = ["distance", "edit", "module"];
    assert_eq!(generic_damerau_levenshtein(&a, &b), 1);
}

#[test]
fn test_oversized_operand_is_rejected() {
    let long = "x".repeat(MAX_SYMBOLS + 1);
    assert!(matches!(
        damerau_levenshtein("ok", &long),
        Err(DistanceError::InputTooLong { .. })
    ));
}
