//! Parallel evaluation of independent filter/map stages.
//!
//! A [`ParallelPipeline`] mirrors the sequential [`Pipeline`](super::Pipeline)
//! for the stages whose per-element work is independent: `filter`, `map`,
//! and `try_map`. The input sequence is partitioned across the rayon worker
//! pool; each worker reads only its own partition and writes only its own
//! output slot, and no locks are held across stage boundaries. Results are
//! reassembled in original input order before any ordered-consuming
//! terminal runs, so [`for_each_ordered`](ParallelPipeline::for_each_ordered)
//! observes exactly the sequential order even though the underlying work
//! was unordered. [`for_each_unordered`](ParallelPipeline::for_each_unordered)
//! delivers elements as they complete, with no ordering guarantee.
//!
//! # Shared state under parallel sinks
//!
//! A sink running during parallel execution may observe elements in a
//! different order than sequential execution would deliver them. Any shared
//! mutable collection such a sink writes into must be a synchronized,
//! thread-safe collection; [`SharedBuffer`] is provided for that purpose.
//! Unsynchronized shared writes during parallel execution are not
//! supported.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::pipeline::parallel::from_sequence;
//!
//! let squares = from_sequence((1..=100).collect::<Vec<i64>>())
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .collect()
//!     .unwrap();
//!
//! // Identical to the sequential result, in input order.
//! assert_eq!(squares[0], 4);
//! assert_eq!(squares[49], 10_000);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;
use static_assertions::assert_impl_all;

use super::error::{AlreadyConsumedError, PipelineError};
use crate::combinator::InvocationError;

type ParallelThunk<T> = Box<dyn FnOnce() -> Result<Vec<T>, PipelineError> + Send>;

/// A lazy, single-pass pipeline whose stages run on the rayon pool.
///
/// Construction and consumption follow the sequential
/// [`Pipeline`](super::Pipeline) contract exactly: nothing executes until a
/// terminal, the first terminal consumes the handle, and later terminals
/// return [`AlreadyConsumedError`].
pub struct ParallelPipeline<T: Send> {
    thunk: Option<ParallelThunk<T>>,
}

/// Builds a parallel pipeline over the given sequence.
pub fn from_sequence<T: Send + 'static>(source: Vec<T>) -> ParallelPipeline<T> {
    ParallelPipeline::new(source)
}

impl<T: Send + 'static> ParallelPipeline<T> {
    /// Builds a parallel pipeline over the given sequence.
    pub fn new(source: Vec<T>) -> Self {
        Self {
            thunk: Some(Box::new(move || Ok(source))),
        }
    }

    fn chain<R: Send + 'static>(
        mut self,
        stage: impl FnOnce(Vec<T>) -> Result<Vec<R>, PipelineError> + Send + 'static,
    ) -> ParallelPipeline<R> {
        let thunk = self
            .thunk
            .take()
            .map(|previous| -> ParallelThunk<R> { Box::new(move || stage(previous()?)) });
        ParallelPipeline { thunk }
    }

    /// Keeps only the elements for which `predicate` returns `true`,
    /// evaluating the predicate across the worker pool.
    ///
    /// The relative order of retained elements is preserved in the output.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.chain(move |sequence| {
            Ok(sequence
                .into_par_iter()
                .filter(|value| predicate(value))
                .collect())
        })
    }

    /// Applies `transform` to each element across the worker pool.
    ///
    /// Elements may be transformed out of order internally; the results are
    /// reassembled in original input order.
    #[must_use]
    pub fn map<R, F>(self, transform: F) -> ParallelPipeline<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.chain(move |sequence| Ok(sequence.into_par_iter().map(transform).collect()))
    }

    /// Applies a fallible, stage-tagged transform across the worker pool.
    ///
    /// The first per-element failure encountered wins: it aborts the
    /// invocation, remaining in-flight work is discarded, and the
    /// [`InvocationError`] surfaces from whichever terminal runs the
    /// pipeline. No partial result is observable.
    #[must_use]
    pub fn try_map<R, F>(self, transform: F) -> ParallelPipeline<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Result<R, InvocationError> + Send + Sync + 'static,
    {
        self.chain(move |sequence| {
            sequence
                .into_par_iter()
                .map(&transform)
                .collect::<Result<Vec<R>, InvocationError>>()
                .map_err(PipelineError::from)
        })
    }

    fn run(&mut self, terminal: &'static str) -> Result<Vec<T>, PipelineError> {
        let thunk = self
            .thunk
            .take()
            .ok_or(AlreadyConsumedError { terminal })?;
        thunk()
    }

    /// Runs the pipeline and materializes the result in input order.
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

    /// Runs the pipeline, delivering each element to `sink` in original
    /// input order.
    ///
    /// Out-of-order stage completions are buffered (by the order-preserving
    /// reassembly of the parallel stages) until their predecessors are
    /// ready, so the sink observes exactly the sequential delivery order.
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

    /// Runs the pipeline, delivering elements as they complete with no
    /// ordering guarantee.
    ///
    /// The sink runs concurrently on the worker pool; shared mutable state
    /// it touches must be synchronized (see [`SharedBuffer`]).
    ///
    /// # Errors
    ///
    /// [`AlreadyConsumedError`] if a terminal already ran on this handle;
    /// any [`InvocationError`] raised by a fallible stage.
    pub fn for_each_unordered<S>(&mut self, sink: S) -> Result<(), PipelineError>
    where
        S: Fn(T) + Send + Sync,
    {
        self.run("for_each_unordered")?
            .into_par_iter()
            .for_each(sink);
        Ok(())
    }
}

impl<T: Send> fmt::Debug for ParallelPipeline<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ParallelPipeline")
            .field("consumed", &self.thunk.is_none())
            .finish()
    }
}

/// A synchronized, append-only buffer for sinks running under parallel
/// execution.
///
/// Cloning is cheap and shares the underlying storage, so one handle can be
/// moved into a parallel sink while another keeps access to the collected
/// elements.
///
/// # Examples
///
/// ```rust
/// use seqflow::pipeline::parallel::{from_sequence, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let writer = buffer.clone();
///
/// from_sequence((1..=50).collect::<Vec<i32>>())
///     .map(|n| n * 2)
///     .for_each_unordered(move |n| writer.push(n))
///     .unwrap();
///
/// // Arrival order is unspecified, the contents are not.
/// let mut collected = buffer.into_vec();
/// collected.sort_unstable();
/// assert_eq!(collected, (1..=50).map(|n| n * 2).collect::<Vec<i32>>());
/// ```
pub struct SharedBuffer<T> {
    inner: Arc<Mutex<Vec<T>>>,
}

impl<T> SharedBuffer<T> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a value.
    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    /// Returns the number of collected elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Extracts the collected elements.
    ///
    /// If other handles to the same buffer are still alive, the elements
    /// are drained out from under them and the buffer they see is left
    /// empty.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        Arc::try_unwrap(self.inner).map_or_else(
            |shared| std::mem::take(&mut *shared.lock()),
            Mutex::into_inner,
        )
    }
}

impl<T: Clone> SharedBuffer<T> {
    /// Returns a copy of the collected elements.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().clone()
    }
}

impl<T> Default for SharedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

assert_impl_all!(SharedBuffer<i32>: Send, Sync, Clone);
assert_impl_all!(ParallelPipeline<i32>: Send);
