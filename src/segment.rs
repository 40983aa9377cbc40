// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The input boundary: grapheme segmentation and validation.
//!
//! The distance cores consume pre-segmented symbol slices and never look at
//! text. This module produces those slices: extended grapheme clusters per
//! UAX #29, so a base letter plus combining accent, a ZWJ emoji sequence, or
//! a regional-indicator flag counts as one symbol rather than several code
//! units. Callers wanting a coarser granularity can use [`code_points`], or
//! segment however they like and call the `generic_*` functions directly.
//!
//! Validation happens here too, once and eagerly: the string-boundary
//! functions reject an operand that segments to more than [`MAX_SYMBOLS`]
//! symbols before any distance table is allocated. Past this boundary the
//! cores cannot fail.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Maximum symbols accepted per operand at the string boundary.
///
/// Bounds the Damerau-Levenshtein table, which is quadratic in the operand
/// lengths, to roughly 128 MiB in the worst case. The slice-level API is
/// uncapped; sizing there is the caller's contract.
pub const MAX_SYMBOLS: usize = 4096;

// The worst-case table at the cap must stay addressable.
const _: () = {
    assert!((MAX_SYMBOLS + 1).checked_mul(MAX_SYMBOLS + 1).is_some());
};

/// Error type for string-boundary validation failures.
///
/// Inputs are checked before any table is allocated; a failure means the
/// call was rejected up front, never partially run. Callers should treat
/// this as a programming error (an operand that was never bounded), not a
/// transient condition to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// An operand segments to more symbols than [`MAX_SYMBOLS`].
    InputTooLong { len: usize, max: usize },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::InputTooLong { len, max } => {
                write!(f, "input segments to {} symbols, limit is {}", len, max)
            }
        }
    }
}

impl std::error::Error for DistanceError {}

/// Segment text into extended grapheme clusters.
///
/// # Examples
///
/// ```
/// // Decomposed "e" + combining acute is one user-perceived character.
/// assert_eq!(mutandis::segment::graphemes("cafe\u{301}").len(), 4);
/// assert_eq!(mutandis::segment::code_points("cafe\u{301}").len(), 5);
/// ```
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Segment text into raw code points.
///
/// The coarser granularity the distance functions also accept: combining
/// marks and ZWJ components count one symbol each, so distances over code
/// points can exceed distances over grapheme clusters for the same text.
pub fn code_points(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// NFC-compose, then segment into extended grapheme clusters.
///
/// Canonically equivalent spellings (precomposed "é" vs "e" + U+0301)
/// produce identical symbol sequences, so their distance is 0. Composition
/// may rewrite the text, hence the owned symbols.
#[cfg(feature = "normalization")]
pub fn nfc_graphemes(text: &str) -> Vec<String> {
    use unicode_normalization::UnicodeNormalization;

    let composed: String = text.nfc().collect();
    composed.graphemes(true).map(str::to_owned).collect()
}

/// Segment one string-boundary operand and enforce the cap.
pub(crate) fn checked_graphemes(text: &str) -> Result<Vec<&str>, DistanceError> {
    let symbols = graphemes(text);
    if symbols.len() > MAX_SYMBOLS {
        return Err(DistanceError::InputTooLong {
            len: symbols.len(),
            max: MAX_SYMBOLS,
        });
    }
    Ok(symbols)
}
