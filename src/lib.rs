//! # seqflow
//!
//! A small functional library for transforming and analyzing finite
//! sequences.
//!
//! ## Overview
//!
//! This library provides three layers, composed by data flow:
//!
//! - **Combinators**: composable unary predicates, transforms, and sinks
//!   with defined evaluation order and short-circuiting
//! - **Pipelines**: lazy, single-pass filter/map/distinct/sort/limit chains
//!   over finite sequences, with scalar terminal reducers and binary search
//! - **Multisets**: per-element frequency counting, duplicate
//!   classification, and order-independent sequence equivalence
//!
//! All values are immutable for the duration of any single operation; the
//! library performs no I/O and keeps no global state.
//!
//! ## Feature Flags
//!
//! - `combinator`: predicate/transform/sink composition
//! - `pipeline`: lazy sequence pipelines and binary search
//! - `multiset`: frequency and equivalence analysis
//! - `rayon`: parallel evaluation of filter/map stages
//! - `serde`: Serialize/Deserialize for [`multiset::Multiset`] and
//!   [`multiset::CaseFolding`]
//! - `fxhash` / `ahash`: alternative hashers for multiset storage
//! - `full`: enable everything
//!
//! ## Example
//!
//! ```rust
//! use seqflow::combinator::and;
//! use seqflow::pipeline::from_sequence;
//!
//! let even = |n: &i32| n % 2 == 0;
//! let small = |n: &i32| *n < 9;
//! let keep = and(even, small);
//!
//! let result = from_sequence((1..=10).collect())
//!     .filter(keep)
//!     .map(|n| n * n)
//!     .collect()
//!     .unwrap();
//! assert_eq!(result, vec![4, 16, 36, 64]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use seqflow::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "multiset")]
    pub use crate::multiset::*;
}

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "multiset")]
pub mod multiset;
