//! Multiset-based sequence analysis.
//!
//! This module answers order-independent questions about finite sequences:
//! how often each element occurs ([`frequency_count`]), how many distinct
//! elements repeat ([`duplicate_count`]), and whether two sequences are
//! rearrangements of each other ([`is_equivalent_multiset`]). Text-specific
//! entry points take an explicit [`CaseFolding`] policy; the library never
//! folds case silently.
//!
//! The underlying [`Multiset`] is an ordinary value type derived per call
//! and discarded after use; nothing here caches across operations. Analysis
//! results can be handed back to the pipeline engine through
//! [`Multiset::into_pipeline`].
//!
//! The hash map backing [`Multiset`] switches with the `fxhash` and `ahash`
//! cargo features; the default is the standard library hasher.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::multiset::{duplicate_count, is_equivalent_multiset};
//!
//! assert_eq!(duplicate_count(vec!['x', 'y', 'x']), 1);
//! assert!(is_equivalent_multiset(&[1, 2, 3], &[3, 2, 1]));
//! ```

mod analysis;
mod counts;

pub use analysis::{
    CaseFolding, char_duplicate_count, char_frequencies, duplicate_count, frequency_count,
    is_equivalent_multiset,
};
pub use counts::Multiset;
