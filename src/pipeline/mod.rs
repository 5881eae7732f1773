//! Lazy, single-pass pipelines over finite sequences.
//!
//! A [`Pipeline`] describes a chain of stages over a finite ordered
//! sequence but executes nothing while the chain is built. Stages
//! ([`filter`](Pipeline::filter), [`map`](Pipeline::map),
//! [`distinct`](Pipeline::distinct), [`sort_by`](Pipeline::sort_by),
//! [`limit`](Pipeline::limit)) each wrap the deferred computation in a new
//! one; only a terminal ([`collect`](Pipeline::collect),
//! [`reduce`](Pipeline::reduce), [`max_by`](Pipeline::max_by),
//! [`count`](Pipeline::count),
//! [`for_each_ordered`](Pipeline::for_each_ordered), ...) runs the whole
//! chain.
//!
//! # Design Philosophy
//!
//! A pipeline "describes" a traversal but doesn't "execute" it. Execution
//! happens only at a terminal, and each handle supports exactly one pass:
//! the first terminal consumes the deferred computation, and any later
//! terminal on the same handle returns
//! [`AlreadyConsumedError`]. This single-pass strategy is deliberate and
//! fixed; a handle is never silently re-derived.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::pipeline::from_sequence;
//!
//! let result = from_sequence((1..=10).collect::<Vec<i32>>())
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .collect()
//!     .unwrap();
//! assert_eq!(result, vec![4, 16, 36, 64, 100]);
//! ```
//!
//! ## Deferral
//!
//! Stage closures are stored for later, so a probe they should update must
//! be owned (for example through [`Rc`](std::rc::Rc)), not borrowed:
//!
//! ```rust
//! use seqflow::pipeline::from_sequence;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let touched = Rc::new(Cell::new(0));
//! let probe = Rc::clone(&touched);
//! let mut handle = from_sequence(vec![1, 2, 3]).map(move |n| {
//!     probe.set(probe.get() + 1);
//!     n * 10
//! });
//!
//! // Construction ran nothing
//! assert_eq!(touched.get(), 0);
//!
//! let result = handle.collect().unwrap();
//! assert_eq!(result, vec![10, 20, 30]);
//! assert_eq!(touched.get(), 3);
//! ```

mod error;
mod search;

#[cfg(feature = "rayon")]
pub mod parallel;

pub use error::{AlreadyConsumedError, EmptySequenceError, PipelineError};
pub use search::{search, search_natural};

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::combinator::InvocationError;

type Thunk<T> = Box<dyn FnOnce() -> Result<Vec<T>, PipelineError>>;

/// A lazy, single-pass chain of stages over a finite sequence.
///
/// Stages consume the handle by value and return a new one; terminals take
/// `&mut self` and consume the deferred computation exactly once. See the
/// [module documentation](self) for the execution model.
pub struct Pipeline<T> {
    thunk: Option<Thunk<T>>,
}

/// Builds a pipeline over the given sequence.
///
/// Insertion order of `source` is significant: every stage preserves or
/// deterministically rearranges it as documented, and ordered terminals
/// consume elements in the order the final stage produced.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::from_sequence;
///
/// let doubled = from_sequence(vec![1, 2, 3]).map(|n| n * 2).collect().unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn from_sequence<T: 'static>(source: Vec<T>) -> Pipeline<T> {
    Pipeline::new(source)
}

impl<T: 'static> Pipeline<T> {
    /// Builds a pipeline over the given sequence.
    ///
    /// Equivalent to [`from_sequence`].
    pub fn new(source: Vec<T>) -> Self {
        Self {
            thunk: Some(Box::new(move || Ok(source))),
        }
    }

    fn chain<R: 'static>(
        mut self,
        stage: impl FnOnce(Vec<T>) -> Result<Vec<R>, PipelineError> + 'static,
    ) -> Pipeline<R> {
        let thunk = self
            .thunk
            .take()
            .map(|previous| -> Thunk<R> { Box::new(move || stage(previous()?)) });
        Pipeline { thunk }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// The relative order of retained elements is preserved.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.chain(move |sequence| Ok(sequence.into_iter().filter(|value| predicate(value)).collect()))
    }

    /// Applies `transform` to each element independently.
    ///
    /// Length and order are preserved.
    #[must_use]
    pub fn map<R: 'static, F>(self, transform: F) -> Pipeline<R>
    where
        F: Fn(T) -> R + 'static,
    {
        self.chain(move |sequence| Ok(sequence.into_iter().map(transform).collect()))
    }

    /// Applies a fallible, stage-tagged transform to each element.
    ///
    /// The first element failure aborts the stage; its
    /// [`InvocationError`] surfaces from whichever terminal runs the
    /// pipeline, and no later stage observes a partial result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::combinator::fallible;
    /// use seqflow::pipeline::{from_sequence, PipelineError};
    ///
    /// let parse = fallible("parse", |s: &str| s.parse::<i32>());
    /// let error = from_sequence(vec!["1", "two", "3"])
    ///     .try_map(parse)
    ///     .collect()
    ///     .unwrap_err();
    /// assert!(matches!(error, PipelineError::Invocation(e) if e.stage == "parse"));
    /// ```
    #[must_use]
    pub fn try_map<R: 'static, F>(self, transform: F) -> Pipeline<R>
    where
        F: Fn(T) -> Result<R, InvocationError> + 'static,
    {
        self.chain(move |sequence| {
            sequence
                .into_iter()
                .map(&transform)
                .collect::<Result<Vec<R>, InvocationError>>()
                .map_err(PipelineError::from)
        })
    }

    /// Retains the first occurrence of each distinct value, in input order.
    ///
    /// Equality is by value (`Eq`).
    #[must_use]
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.chain(|sequence| {
            let mut seen = HashSet::new();
            Ok(sequence
                .into_iter()
                .filter(|value| seen.insert(value.clone()))
                .collect())
        })
    }

    /// Sorts the sequence stably by the given comparator.
    ///
    /// Elements the comparator considers equal keep their relative order. A
    /// comparator that is not a total order yields an unspecified (but
    /// non-crashing) element order; callers own that contract.
    #[must_use]
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.chain(move |mut sequence| {
            sequence.sort_by(|left, right| compare(left, right));
            Ok(sequence)
        })
    }

    /// Sorts the sequence stably by natural order.
    #[must_use]
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.chain(|mut sequence| {
            sequence.sort();
            Ok(sequence)
        })
    }

    /// Keeps at most the first `count` elements.
    #[must_use]
    pub fn limit(self, count: usize) -> Self {
        self.chain(move |mut sequence| {
            sequence.truncate(count);
            Ok(sequence)
        })
    }

    fn run(&mut self, terminal: &'static str) -> Result<Vec<T>, PipelineError> {
        let thunk = self
            .thunk
            .take()
            .ok_or(AlreadyConsumedError { terminal })?;
        thunk()
    }

    /// Runs the pipeline and materializes the resulting sequence.
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    pub fn collect(&mut self) -> Result<Vec<T>, PipelineError> {
        self.run("collect")
    }

    /// Runs the pipeline and returns the number of elements produced.
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    pub fn count(&mut self) -> Result<u64, PipelineError> {
        Ok(self.run("count")?.len() as u64)
    }

    /// Runs the pipeline and sums the elements.
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::pipeline::from_sequence;
    ///
    /// let total: i32 = from_sequence((1..=10).collect()).sum().unwrap();
    /// assert_eq!(total, 55);
    /// ```
    pub fn sum(&mut self) -> Result<T, PipelineError>
    where
        T: std::iter::Sum<T>,
    {
        Ok(self.run("sum")?.into_iter().sum())
    }

    /// Runs the pipeline and folds the elements in order.
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::pipeline::from_sequence;
    ///
    /// let product = from_sequence(vec![1, 2, 3, 4])
    ///     .reduce(1, |accumulated, n| accumulated * n)
    ///     .unwrap();
    /// assert_eq!(product, 24);
    /// ```
    pub fn reduce<A, F>(&mut self, init: A, op: F) -> Result<A, PipelineError>
    where
        F: FnMut(A, T) -> A,
    {
        Ok(self.run("reduce")?.into_iter().fold(init, op))
    }

    /// Runs the pipeline and returns the greatest element per `compare`.
    ///
    /// Ties are broken by first occurrence: a later element replaces the
    /// current best only when it compares strictly greater.
    ///
    /// # Errors
    ///
    /// [`EmptySequenceError`] if the pipeline produced no elements;
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::pipeline::from_sequence;
    ///
    /// let longest = from_sequence(vec!["John", "Terry", "Andrew"])
    ///     .max_by(|left, right| left.len().cmp(&right.len()))
    ///     .unwrap();
    /// assert_eq!(longest, "Andrew");
    /// ```
    pub fn max_by<F>(&mut self, compare: F) -> Result<T, PipelineError>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut elements = self.run("max_by")?.into_iter();
        let first = elements
            .next()
            .ok_or(EmptySequenceError { terminal: "max_by" })?;
        Ok(elements.fold(first, |best, candidate| {
            if compare(&candidate, &best) == Ordering::Greater {
                candidate
            } else {
                best
            }
        }))
    }

    /// Runs the pipeline and returns the least element per `compare`.
    ///
    /// Ties are broken by first occurrence.
    ///
    /// # Errors
    ///
    /// [`EmptySequenceError`] if the pipeline produced no elements;
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle.
    pub fn min_by<F>(&mut self, compare: F) -> Result<T, PipelineError>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut elements = self.run("min_by")?.into_iter();
        let first = elements
            .next()
            .ok_or(EmptySequenceError { terminal: "min_by" })?;
        Ok(elements.fold(first, |best, candidate| {
            if compare(&candidate, &best) == Ordering::Less {
                candidate
            } else {
                best
            }
        }))
    }

    /// Runs the pipeline, delivering each element to `sink` in order.
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    pub fn for_each_ordered<S>(&mut self, mut sink: S) -> Result<(), PipelineError>
    where
        S: FnMut(T),
    {
        for element in self.run("for_each_ordered")? {
            sink(element);
        }
        Ok(())
    }

    /// Runs the pipeline, delivering each element to a fallible sink in
    /// order.
    ///
    /// The walk stops at the first sink failure; elements after the failing
    /// one are not delivered.
    ///
    /// # Errors
    ///
    /// The first [`InvocationError`] raised by the sink;
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle.
    pub fn try_for_each_ordered<S>(&mut self, mut sink: S) -> Result<(), PipelineError>
    where
        S: FnMut(T) -> Result<(), InvocationError>,
    {
        for element in self.run("try_for_each_ordered")? {
            sink(element)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("consumed", &self.thunk.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_terminal_is_already_consumed() {
        let mut handle = from_sequence(vec![1, 2, 3]);
        assert_eq!(handle.collect().unwrap(), vec![1, 2, 3]);

        let error = handle.count().unwrap_err();
        assert_eq!(
            error,
            PipelineError::AlreadyConsumed(AlreadyConsumedError { terminal: "count" })
        );
    }

    #[test]
    fn test_stage_on_consumed_handle_stays_consumed() {
        let mut handle = from_sequence(vec![1, 2, 3]);
        let _ = handle.collect().unwrap();

        let mut chained = handle.map(|n| n + 1);
        assert!(matches!(
            chained.collect(),
            Err(PipelineError::AlreadyConsumed(_))
        ));
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let result = from_sequence(vec![3, 1, 3, 2, 1]).distinct().collect().unwrap();
        assert_eq!(result, vec![3, 1, 2]);
    }

    #[test]
    fn test_max_by_on_empty_is_empty_sequence_error() {
        let error = from_sequence(Vec::<i32>::new())
            .max_by(|left, right| left.cmp(right))
            .unwrap_err();
        assert_eq!(
            error,
            PipelineError::Empty(EmptySequenceError { terminal: "max_by" })
        );
    }

    #[test]
    fn test_debug_reports_consumption() {
        let mut handle = from_sequence(vec![1]);
        assert_eq!(format!("{handle:?}"), "Pipeline { consumed: false }");
        let _ = handle.collect();
        assert_eq!(format!("{handle:?}"), "Pipeline { consumed: true }");
    }
}
