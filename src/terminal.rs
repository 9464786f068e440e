//! Terminal operators: the operations that actually drive a chain.
//!
//! Each call here opens one fresh traversal of the pipeline and pulls
//! elements until its result is decided — to exhaustion for the draining
//! operators (`to_vec`, `count`, `for_each`, the folds), or until a
//! stopping condition for the short-circuiting ones (`first`, `all`, `any`,
//! `none`). Because traversals are independent, the same `Pipeline` value
//! can be driven any number of times with identical results.
//!
//! Draining an unbounded source (see [`range_step`](crate::range_step))
//! does not terminate; that hazard is documented, not defended against.
//!
//! Any error raised by a stage mid-traversal (see
//! [`Error`](crate::Error)) stops the pull loop and is returned to the
//! caller; nothing is retried or swallowed.

use crate::error::Result;
use crate::pipeline::{Element, Pipeline};

impl<T: Element> Pipeline<T> {
    /// Pull every element, in order, into a vector.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let v = range(1, 4).map(|x| x * 10).to_vec()?;
    /// assert_eq!(v, vec![10, 20, 30, 40]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.pull().collect()
    }

    /// Count the elements, fully draining the chain.
    pub fn count(&self) -> Result<usize> {
        let mut n = 0;
        for item in self.pull() {
            item?;
            n += 1;
        }
        Ok(n)
    }

    /// Pull every element in order, running `f` on each.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut total = 0;
    /// from_vec(vec![1, 2, 3]).for_each(|x| total += x)?;
    /// assert_eq!(total, 6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for item in self.pull() {
            f(item?);
        }
        Ok(())
    }

    /// True iff `pred` holds for every element.
    ///
    /// Stops pulling at the first failing element. Vacuously true on an
    /// empty sequence.
    pub fn all<F>(&self, mut pred: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.pull() {
            if !pred(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True iff `pred` holds for at least one element.
    ///
    /// Stops pulling at the first satisfying element. False on an empty
    /// sequence.
    pub fn any<F>(&self, mut pred: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.pull() {
            if pred(&item?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True iff `pred` holds for no element.
    ///
    /// Stops pulling at the first satisfying element. Vacuously true on an
    /// empty sequence.
    pub fn none<F>(&self, mut pred: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.pull() {
            if pred(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Pull exactly one element: `Some(first)` if the sequence is
    /// non-empty, `None` if it is empty. Never pulls a second element.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// assert_eq!(from_vec(vec![1, 2, 3]).first()?, Some(1));
    /// assert_eq!(empty::<i32>().first()?, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn first(&self) -> Result<Option<T>> {
        self.pull().next().transpose()
    }

    /// Left fold with an explicit seed: `f(…f(f(seed, e0), e1)…, eN)`.
    ///
    /// Returns the seed itself on an empty sequence. The seed is a
    /// required parameter, so a legitimate seed value can never be
    /// mistaken for "no seed" — for seedless folding use
    /// [`reduce`](Pipeline::reduce).
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let product = from_vec(vec![1, 2, 3]).fold(2, |acc, x| acc * x)?;
    /// assert_eq!(product, 12);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold<A, F>(&self, seed: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = seed;
        for item in self.pull() {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Seedless left fold: the first element is the initial accumulator
    /// and folding starts from the second.
    ///
    /// Returns `None` on an empty sequence, so emptiness is explicit in
    /// the type and never conflated with a sentinel accumulator value.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let product = from_vec(vec![1, 2, 3]).reduce(|acc, x| acc * x)?;
    /// assert_eq!(product, Some(6));
    /// assert_eq!(empty::<i32>().reduce(|acc, x| acc * x)?, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn reduce<F>(&self, mut f: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let mut iter = self.pull();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        let mut acc = first?;
        for item in iter {
            acc = f(acc, item?);
        }
        Ok(Some(acc))
    }
}
