//! Tests for the rolling-row Levenshtein core and its string boundary.

use super::common::{naive_levenshtein, KNOWN_DISTANCES, MULTILINGUAL_WORDS};
use mutandis::{
    generic_levenshtein, generic_levenshtein_within, levenshtein, levenshtein_within,
    DistanceError, MAX_SYMBOLS,
};

#[test]
fn test_known_distances() {
    for &(a, b, expected, _) in KNOWN_DISTANCES {
        assert_eq!(
            levenshtein(a, b).unwrap(),
            expected,
            "levenshtein({:?}, {:?})",
            a,
            b
        );
    }
}

#[test]
fn test_symmetry_over_known_pairs() {
    for &(a, b, expected, _) in KNOWN_DISTANCES {
        assert_eq!(levenshtein(b, a).unwrap(), expected);
    }
}

#[test]
fn test_agrees_with_naive_matrix() {
    for a in MULTILINGUAL_WORDS {
        for b in MULTILINGUAL_WORDS {
            let av: Vec<char> = a.chars().collect();
            let bv: Vec<char> = b.chars().collect();
            assert_eq!(
                generic_levenshtein(&av, &bv),
                naive_levenshtein(&av, &bv),
                "{:?} vs {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_prefix_and_suffix_edits() {
    assert_eq!(levenshtein("distance", "istance").unwrap(), 1);
    assert_eq!(levenshtein("distance", "distanc").unwrap(), 1);
    assert_eq!(levenshtein("distance", "xdistance").unwrap(), 1);
}

#[test]
fn test_disjoint_alphabets() {
    // No symbol in common: substitute the shorter operand, insert the rest.
    assert_eq!(levenshtein("aaaa", "bbbbbb").unwrap(), 6);
}

#[test]
fn test_grapheme_clusters_count_once() {
    // A four-code-point ZWJ family sequence against one person emoji is a
    // single substitution.
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let person = "\u{1F9D1}";
    assert_eq!(levenshtein(family, person).unwrap(), 1);
}

#[test]
fn test_within_budget_boundaries() {
    for &(a, b, expected, _) in KNOWN_DISTANCES {
        for max in 0..8 {
            assert_eq!(
                levenshtein_within(a, b, max).unwrap(),
                expected <= max,
                "levenshtein_within({:?}, {:?}, {})",
                a,
                b,
                max
            );
        }
    }
}

#[test]
fn test_within_length_difference_exit() {
    let long = "a".repeat(64);
    assert!(!generic_levenshtein_within(long.as_bytes(), b"a", 3));
}

#[test]
fn test_operand_at_cap_is_accepted() {
    let long = "a".repeat(MAX_SYMBOLS);
    assert_eq!(levenshtein(&long, "").unwrap(), MAX_SYMBOLS);
}

#[test]
fn test_oversized_operand_is_rejected() {
    let long = "a".repeat(MAX_SYMBOLS + 1);
    let err = levenshtein(&long, "abc").unwrap_err();
    assert_eq!(
        err,
        DistanceError::InputTooLong {
            len: MAX_SYMBOLS + 1,
            max: MAX_SYMBOLS,
        }
    );
    assert!(levenshtein_within(&long, "abc", 2).is_err());
}
