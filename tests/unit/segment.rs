//! Tests for grapheme segmentation and boundary validation.

use super::common::MULTILINGUAL_WORDS;
use mutandis::segment::{code_points, graphemes, nfc_graphemes};
use mutandis::{generic_levenshtein, levenshtein, DistanceError, MAX_SYMBOLS};

#[test]
fn test_ascii_round_trip() {
    for word in ["cat", "kitten", "distance"] {
        let symbols = graphemes(word);
        assert_eq!(symbols.len(), word.len());
        assert_eq!(symbols.concat(), word);
    }
}

#[test]
fn test_grapheme_and_code_point_granularity_diverge() {
    // Decomposed é: one cluster, two code points.
    let text = "e\u{301}";
    assert_eq!(graphemes(text).len(), 1);
    assert_eq!(code_points(text).len(), 2);
}

#[test]
fn test_multilingual_words_segment_cleanly() {
    for word in MULTILINGUAL_WORDS {
        let symbols = graphemes(word);
        assert!(!symbols.is_empty());
        assert_eq!(symbols.concat(), *word);
        assert!(symbols.len() <= code_points(word).len());
    }
}

#[test]
fn test_granularity_changes_the_answer() {
    let composed = "café";
    let decomposed = "cafe\u{301}";

    // Grapheme clusters: the final symbols differ, one substitution.
    assert_eq!(levenshtein(composed, decomposed).unwrap(), 1);

    // Code points: a substitution plus a trailing insertion.
    let a = code_points(composed);
    let b = code_points(decomposed);
    assert_eq!(generic_levenshtein(&a, &b), 2);

    // NFC first: canonically equivalent, so distance zero.
    let na = nfc_graphemes(composed);
    let nb = nfc_graphemes(decomposed);
    assert_eq!(generic_levenshtein(&na, &nb), 0);
}

#[test]
fn test_cap_applies_per_operand() {
    let at_cap = "a".repeat(MAX_SYMBOLS);
    let over_cap = "a".repeat(MAX_SYMBOLS + 1);

    assert!(levenshtein(&at_cap, "").is_ok());
    let err = levenshtein(&over_cap, "").unwrap_err();
    assert_eq!(
        err,
        DistanceError::InputTooLong {
            len: MAX_SYMBOLS + 1,
            max: MAX_SYMBOLS,
        }
    );
    assert!(levenshtein("", &over_cap).is_err());
}

#[test]
fn test_cap_counts_clusters_not_code_points() {
    // Twice as many code points as clusters, still exactly at the cap.
    let text = "e\u{301}".repeat(MAX_SYMBOLS);
    assert_eq!(graphemes(&text).len(), MAX_SYMBOLS);
    assert!(levenshtein(&text, "e").is_ok());
}

#[test]
fn test_error_is_std_error() {
    let err = DistanceError::InputTooLong {
        len: 9999,
        max: MAX_SYMBOLS,
    };
    let dynamic: &dyn std::error::Error = &err;
    assert!(dynamic.to_string().contains("9999"));
}
