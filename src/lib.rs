// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distances over user-perceived characters.
//!
//! Two distance functions with exact, metric semantics:
//!
//! - [`levenshtein`]: insertions, deletions, substitutions.
//! - [`damerau_levenshtein`]: the above plus transposition of a symbol
//!   pair across any gap (the unrestricted Lowrance-Wagner variant, not
//!   the adjacent-swap-only one).
//!
//! The string API compares extended grapheme clusters, so "é" as one code
//! point and "é" as "e" plus a combining accent each count as one symbol,
//! and a ZWJ emoji sequence counts as one symbol rather than four. The
//! `generic_*` functions take pre-segmented slices of anything comparable
//! instead: code points, bytes, tokens, whatever the caller chooses.
//!
//! ```
//! // Granularity is the caller's choice, and it changes the answer:
//! let a = "café";           // precomposed é
//! let b = "cafe\u{301}";    // decomposed e + U+0301
//!
//! // By grapheme cluster: one substituted symbol.
//! assert_eq!(mutandis::levenshtein(a, b)?, 1);
//!
//! // By code point: a substitution plus an insertion.
//! let (pa, pb) = (mutandis::segment::code_points(a), mutandis::segment::code_points(b));
//! assert_eq!(mutandis::generic_levenshtein(&pa, &pb), 2);
//!
//! // NFC-composed first: canonically equivalent, distance zero.
//! let (na, nb) = (mutandis::segment::nfc_graphemes(a), mutandis::segment::nfc_graphemes(b));
//! assert_eq!(mutandis::generic_levenshtein(&na, &nb), 0);
//! # Ok::<(), mutandis::DistanceError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      ┌───────────────────┐
//! │  segment.rs  │─────▶│  levenshtein.rs   │  two rolling rows
//! │ (graphemes,  │      │  damerau.rs       │  sentinel-accessor table
//! │  validation) │      │  (distance cores) │
//! └──────────────┘      └───────────────────┘
//!                                 │
//!                                 ▼
//!                       ┌───────────────────┐
//!                       │   contracts.rs    │  debug-mode metric checks
//!                       └───────────────────┘
//! ```
//!
//! The cores are pure: no shared state, no I/O, one table and one map per
//! call, safe to invoke from any number of threads. Validation happens
//! once, at the string boundary ([`segment::MAX_SYMBOLS`]); past it
//! nothing fails.
//!
//! # Features
//!
//! | Feature         | Default | Provides                                                |
//! |-----------------|---------|---------------------------------------------------------|
//! | `graphemes`     | yes     | string API via `unicode-segmentation`                   |
//! | `normalization` | yes     | [`segment::nfc_graphemes`] via `unicode-normalization`  |
//!
//! With both disabled the crate is dependency-free and exposes only the
//! slice-level functions.

// Module declarations
pub mod contracts;
mod damerau;
mod levenshtein;
#[cfg(feature = "graphemes")]
pub mod segment;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use damerau::generic_damerau_levenshtein;
pub use levenshtein::{generic_levenshtein, generic_levenshtein_within};

#[cfg(feature = "graphemes")]
pub use damerau::damerau_levenshtein;
#[cfg(feature = "graphemes")]
pub use levenshtein::{levenshtein, levenshtein_within};
#[cfg(feature = "graphemes")]
pub use segment::{DistanceError, MAX_SYMBOLS};
