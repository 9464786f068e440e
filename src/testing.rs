//! Testing utilities for lazyflow pipelines.
//!
//! This module provides the pieces needed to write precise tests against
//! lazy chains:
//!
//! - **Assertions**: compare materialized pipeline output with expected
//!   sequences, with detailed mismatch messages
//! - **Pull probes**: [`PullCounter`] counts how many elements actually
//!   flow past a point in the chain, which is how laziness and
//!   short-circuiting claims are verified
//!
//! # Quick Start
//! ```
//! use lazyflow::*;
//! use lazyflow::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let probe = PullCounter::new();
//! let out = from_vec(vec![1, 2, 3, 4, 5])
//!     .inspect(probe.probe())
//!     .take(2)
//!     .to_vec()?;
//!
//! assert_sequences_equal(&out, &[1, 2]);
//! assert_eq!(probe.pulls(), 2); // take(2) pulled exactly two elements
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Assert that two sequences are equal in order and content.
///
/// Compares element-by-element and panics with a detailed message naming
/// the first differing index.
///
/// # Panics
///
/// Panics if the sequences differ in length or content.
///
/// # Example
/// ```
/// use lazyflow::testing::assert_sequences_equal;
///
/// assert_sequences_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_sequences_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that every element of a sequence satisfies a predicate.
///
/// # Panics
///
/// Panics naming the first offending element.
pub fn assert_all<T: Debug>(actual: &[T], mut pred: impl FnMut(&T) -> bool) {
    for (i, a) in actual.iter().enumerate() {
        assert!(
            pred(a),
            "Element at index {i} fails the predicate:\n  Element: {a:?}\n  Full sequence: {actual:?}"
        );
    }
}

/// A shared counter for observing how many elements flow past a point in a
/// chain.
///
/// Attach it with [`probe`](PullCounter::probe) behind an
/// [`inspect`](crate::Pipeline::inspect) stage; every element pulled
/// through that stage bumps the counter. Because `inspect` runs per pull,
/// the count is exactly the number of upstream pulls the downstream
/// stages caused: the tool for verifying `take`'s pull bound, `first`'s
/// single pull, and that building a chain pulls nothing at all.
///
/// Cloning shares the counter.
#[derive(Clone, Debug, Default)]
pub struct PullCounter {
    hits: Arc<AtomicUsize>,
}

impl PullCounter {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inspector closure that bumps this counter per element.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    /// use lazyflow::testing::PullCounter;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let probe = PullCounter::new();
    /// let p = range(1, 100).inspect(probe.probe());
    ///
    /// assert_eq!(probe.pulls(), 0); // nothing pulled yet
    /// p.first()?;
    /// assert_eq!(probe.pulls(), 1); // first() pulls exactly one
    /// # Ok(())
    /// # }
    /// ```
    pub fn probe<T>(&self) -> impl Fn(&T) + Send + Sync + 'static {
        let hits = Arc::clone(&self.hits);
        move |_| {
            hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of elements observed so far.
    #[must_use]
    pub fn pulls(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
