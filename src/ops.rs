//! Lazy transformation operators.
//!
//! Every method here returns a **new** [`Pipeline`] wrapping the receiver's
//! producer in one more lazy stage; nothing is pulled from upstream until a
//! terminal operator drives the chain. The receiver is untouched and stays
//! usable.
//!
//! Stages are pull-based and buffer nothing: each pull request computes and
//! yields exactly one element (or discards elements one at a time, for the
//! skipping stages). Upstream `Err` items pass through every stage
//! unchanged; transforms and predicates only ever see `Ok` elements.

use crate::pipeline::{Element, Pipeline, PullIter};
use std::sync::Arc;

impl<T: Element> Pipeline<T> {
    /// Transform each element with `f`, in order, 1:1.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let doubled = from_vec(vec![1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.to_vec()?, vec![2, 4, 6]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn map<O, F>(&self, f: F) -> Pipeline<O>
    where
        O: Element,
        F: Fn(T) -> O + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let f = Arc::new(f);
        Pipeline::from_producer(move || {
            let f = Arc::clone(&f);
            Box::new(upstream().map(move |item| item.map(|v| f(v)))) as PullIter<O>
        })
    }

    /// Keep only the elements for which `pred` holds, preserving order.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let evens = from_vec(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(evens.to_vec()?, vec![2, 4]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn filter<F>(&self, pred: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let pred = Arc::new(pred);
        Pipeline::from_producer(move || {
            let pred = Arc::clone(&pred);
            Box::new(upstream().filter(move |item| match item {
                Ok(v) => pred(v),
                Err(_) => true,
            })) as PullIter<T>
        })
    }

    /// Run `f` on each element as it is pulled, then yield it unchanged.
    ///
    /// The side effect happens pull-by-pull, in traversal order — never
    /// eagerly, and never for elements a downstream stage stops short of.
    /// That makes `inspect` the natural probe for observing how far a chain
    /// actually pulls (see [`testing::PullCounter`](crate::testing::PullCounter)).
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let p = from_vec(vec![1, 2, 3]).inspect(|x| println!("pulled {x}"));
    /// // Nothing printed yet; the prints happen during to_vec().
    /// assert_eq!(p.to_vec()?.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn inspect<F>(&self, f: F) -> Pipeline<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let f = Arc::new(f);
        Pipeline::from_producer(move || {
            let f = Arc::clone(&f);
            Box::new(upstream().map(move |item| {
                if let Ok(v) = &item {
                    f(v);
                }
                item
            })) as PullIter<T>
        })
    }

    /// Yield at most the first `n` elements.
    ///
    /// Never pulls more than `n` elements from upstream; with `n = 0` the
    /// upstream producer runs but its iterator is never advanced. More than
    /// the upstream has yields everything the upstream has.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// assert_eq!(from_vec(vec![1, 2, 3]).take(2).to_vec()?, vec![1, 2]);
    /// assert_eq!(from_vec(vec![1, 2, 3]).take(10).to_vec()?, vec![1, 2, 3]);
    /// assert!(from_vec(vec![1, 2, 3]).take(0).to_vec()?.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn take(&self, n: usize) -> Pipeline<T> {
        let upstream = Arc::clone(&self.producer);
        Pipeline::from_producer(move || Box::new(upstream().take(n)) as PullIter<T>)
    }

    /// Yield elements while `pred` holds, then stop permanently.
    ///
    /// The first failing element ends the traversal; later elements are
    /// never pulled, even if they would satisfy `pred` again.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let head = from_vec(vec![1, 2, 3, 1]).take_while(|x| *x <= 2);
    /// assert_eq!(head.to_vec()?, vec![1, 2]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn take_while<F>(&self, pred: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let pred = Arc::new(pred);
        Pipeline::from_producer(move || {
            let pred = Arc::clone(&pred);
            Box::new(upstream().take_while(move |item| match item {
                Ok(v) => pred(v),
                Err(_) => true,
            })) as PullIter<T>
        })
    }

    /// Pull and discard the first `n` elements, then yield the rest.
    ///
    /// Skipping more than the upstream has yields nothing.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// assert_eq!(from_vec(vec![1, 2, 3]).skip(2).to_vec()?, vec![3]);
    /// assert!(from_vec(vec![1, 2, 3]).skip(10).to_vec()?.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn skip(&self, n: usize) -> Pipeline<T> {
        let upstream = Arc::clone(&self.producer);
        Pipeline::from_producer(move || {
            let mut remaining = n;
            Box::new(upstream().filter(move |item| {
                if item.is_err() {
                    return true;
                }
                if remaining > 0 {
                    remaining -= 1;
                    false
                } else {
                    true
                }
            })) as PullIter<T>
        })
    }

    /// Discard elements while `pred` holds; once it fails, yield that
    /// element and everything after it unconditionally.
    ///
    /// There is no re-entry into skip mode: later elements satisfying
    /// `pred` again are still yielded.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let tail = from_vec(vec![1, 2, 3, 1]).skip_while(|x| *x <= 2);
    /// assert_eq!(tail.to_vec()?, vec![3, 1]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn skip_while<F>(&self, pred: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let pred = Arc::new(pred);
        Pipeline::from_producer(move || {
            let pred = Arc::clone(&pred);
            let mut skipping = true;
            Box::new(upstream().filter(move |item| {
                let Ok(v) = item else {
                    return true;
                };
                if skipping && pred(v) {
                    false
                } else {
                    skipping = false;
                    true
                }
            })) as PullIter<T>
        })
    }
}
