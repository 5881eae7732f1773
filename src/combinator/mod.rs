//! Composable predicates, transforms, and sinks.
//!
//! This module builds single-input operations out of smaller ones with a
//! defined evaluation order and short-circuiting:
//!
//! - Predicates (`Fn(&T) -> bool`): [`and`], [`or`], [`not`], the n-ary
//!   [`and_all`]/[`or_all`], and the variadic [`all!`]/[`any!`] macros
//! - Transforms (`Fn(T) -> R`): [`then`] (data-flow order) and [`compose`]
//!   (mathematical order), plus fallible chaining via [`fallible`] and
//!   [`try_then`]
//! - Sinks (`Fn(&T)`): [`tee`] and [`try_tee`], executing chained sinks in
//!   declaration order per element
//!
//! # Capture semantics
//!
//! Every combinator takes its operands by value and the closures it builds
//! capture by `move`. A composed operation therefore snapshots the outer
//! values it references at construction time; it can never observe a later
//! mutation of a captured binding. Programs that try to mutate a captured
//! binding after composition are rejected by the borrow checker when the
//! composition is built, not at evaluation time. This also makes composed
//! operations referentially transparent and safe to hand to parallel
//! pipeline stages.
//!
//! # Evaluation order
//!
//! The left operand of any binary combinator is always evaluated first. For
//! [`and`]/[`or`] (and the macros) the right operand is skipped whenever
//! the left already determines the result. For fallible chains, a failing
//! stage short-circuits the remaining stages and surfaces an
//! [`InvocationError`] naming the stage that failed.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::combinator::{and, then};
//!
//! let starts_with_a = |name: &&str| name.starts_with('A');
//! let longer_than_three = |name: &&str| name.len() > 3;
//! let condition = and(starts_with_a, longer_than_three);
//! assert!(condition(&"Andrew"));
//!
//! let render = |n: i32| n.to_string();
//! let measure = |s: String| s.len();
//! assert_eq!(then(render, measure)(129), 3);
//! ```

mod all_macro;
mod any_macro;
mod error;
mod predicate;
mod sink;
mod transform;
mod utils;

pub use error::{ArityError, CombinatorError, InvocationError};
pub use predicate::{and, and_all, not, or, or_all};
pub use sink::{tee, try_tee};
pub use transform::{compose, fallible, then, then_all, try_then};
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::all;
pub use crate::any;
