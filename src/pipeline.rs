//! The core [`Pipeline`] type and its source constructors.
//!
//! A `Pipeline<T>` wraps a single *producer*: a repeatable factory that, on
//! every invocation, opens a fresh, independent traversal of the same
//! logical element sequence. Operators never run the producer; they wrap it
//! in another lazy stage and hand back a new `Pipeline`. Only the terminal
//! operators in [`terminal`](crate::terminal) actually pull elements.
//!
//! Producers yield `Result<T>` items so that the one lazily-raised error
//! ([`NonStringable`](crate::Error::NonStringable), out of `distinct`)
//! travels through downstream stages to whichever terminal call drove the
//! pull. Stages pass `Err` items through untouched.

use crate::error::Result;
use std::sync::Arc;

/// Marker bound every pipeline element type must satisfy.
///
/// Blanket-implemented; you never implement this by hand.
pub trait Element: 'static + Send + Sync + Clone {}
impl<T> Element for T where T: 'static + Send + Sync + Clone {}

/// One traversal of a pipeline: a boxed external iterator over the chain.
pub(crate) type PullIter<T> = Box<dyn Iterator<Item = Result<T>>>;

/// The repeatable traversal factory a [`Pipeline`] wraps.
pub(crate) type Producer<T> = Arc<dyn Fn() -> PullIter<T> + Send + Sync>;

/// An immutable, lazy, composable sequence value.
///
/// Pipelines are:
/// - **Immutable**: every operator returns a new `Pipeline`; the receiver
///   is never mutated and stays usable.
/// - **Lazy**: building a chain of N operators does no work; elements are
///   pulled one at a time, on demand, when a terminal operator runs.
/// - **Re-invocable**: any number of terminal operations may be run
///   against the same value; each opens an independent traversal from the
///   first element.
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let squares = range(1, 100).map(|n| n * n).take(4);
///
/// assert_eq!(squares.to_vec()?, vec![1, 4, 9, 16]);
/// // Same value, fresh traversal:
/// assert_eq!(squares.count()?, 4);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<T> {
    pub(crate) producer: Producer<T>,
}

/// Cloning shares the producer; both values describe the same sequence.
impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self { producer: Arc::clone(&self.producer) }
    }
}

impl<T: Element> Pipeline<T> {
    pub(crate) fn from_producer<F>(f: F) -> Self
    where
        F: Fn() -> PullIter<T> + Send + Sync + 'static,
    {
        Self { producer: Arc::new(f) }
    }

    /// Open a fresh traversal of the chain.
    pub(crate) fn pull(&self) -> PullIter<T> {
        (self.producer)()
    }
}

/// Build a pipeline over the elements of a vector, in original order.
///
/// The vector is held behind an `Arc` and cloned element-by-element on each
/// traversal; it is never consumed or mutated, so the pipeline can be
/// driven any number of times.
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let p = from_vec(vec![1, 2, 3]);
/// assert_eq!(p.to_vec()?, vec![1, 2, 3]);
/// assert_eq!(p.to_vec()?, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// ```
pub fn from_vec<T: Element>(data: Vec<T>) -> Pipeline<T> {
    let data = Arc::new(data);
    Pipeline::from_producer(move || {
        let data = Arc::clone(&data);
        Box::new((0..data.len()).map(move |i| Ok(data[i].clone()))) as PullIter<T>
    })
}

/// Build a pipeline with no elements.
pub fn empty<T: Element>() -> Pipeline<T> {
    Pipeline::from_producer(|| Box::new(std::iter::empty()) as PullIter<T>)
}

/// Build a pipeline from a caller-supplied producer.
///
/// `f` must return a *fresh* iterator on every call, each starting from the
/// same logical first element — that is the re-invocability contract every
/// source upholds. This is the escape hatch for generated sources beyond
/// [`from_vec`] and [`range`].
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let powers = from_producer(|| (0u32..).map(|n| 1u64 << n));
/// assert_eq!(powers.take(4).to_vec()?, vec![1, 2, 4, 8]);
/// # Ok(())
/// # }
/// ```
pub fn from_producer<T, I, F>(f: F) -> Pipeline<T>
where
    T: Element,
    I: Iterator<Item = T> + 'static,
    F: Fn() -> I + Send + Sync + 'static,
{
    Pipeline::from_producer(move || Box::new(f().map(Ok)) as PullIter<T>)
}

/// Build a pipeline over the inclusive arithmetic sequence
/// `start, start + 1, …, end`.
///
/// Equivalent to [`range_step`] with a step of 1. `start > end` yields
/// nothing.
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// # fn main() -> anyhow::Result<()> {
/// assert_eq!(range(1, 3).to_vec()?, vec![1, 2, 3]);
/// assert_eq!(range(3, 1).count()?, 0);
/// # Ok(())
/// # }
/// ```
pub fn range(start: i64, end: i64) -> Pipeline<i64> {
    range_step(start, end, 1)
}

/// Build a pipeline yielding `start, start + step, start + 2 * step, …`
/// while the current value is `<= end`.
///
/// The step is deliberately not validated: with `start <= end`, a step of 0
/// repeats `start` forever and a negative step descends without ever
/// crossing `end` — both produce unbounded sequences, which is documented
/// behavior, not an error. Pair unbounded sequences with [`take`] or
/// another stopping stage before a draining terminal such as [`to_vec`].
/// The sequence also ends if the next value would overflow `i64`.
///
/// [`take`]: Pipeline::take
/// [`to_vec`]: Pipeline::to_vec
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// # fn main() -> anyhow::Result<()> {
/// assert_eq!(range_step(1, 5, 2).to_vec()?, vec![1, 3, 5]);
/// assert_eq!(range_step(1, 6, 2).to_vec()?, vec![1, 3, 5]);
/// # Ok(())
/// # }
/// ```
pub fn range_step(start: i64, end: i64, step: i64) -> Pipeline<i64> {
    Pipeline::from_producer(move || {
        let iter = std::iter::successors((start <= end).then_some(start), move |&v| {
            v.checked_add(step).filter(|&next| next <= end)
        });
        Box::new(iter.map(Ok)) as PullIter<i64>
    })
}
