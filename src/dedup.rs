//! Deduplication: the [`DedupKey`] capability and the `distinct` stages.
//!
//! [`Pipeline::distinct`] keeps the first occurrence of every distinct
//! element, where "distinct" is decided by a canonical string key rather
//! than by `Eq` alone. Scalars key by their own textual value; composite
//! types must opt in by implementing [`DedupKey`] (one method), or be
//! deduplicated through [`Pipeline::distinct_by`] with an explicit key
//! function.
//!
//! Keying is *fallible* so that dynamically-shaped elements (notably
//! [`serde_json::Value`]) can refuse to key for their composite variants.
//! The refusal ([`Error::NonStringable`]) surfaces lazily, at the pull that
//! reaches the offending element, never while the chain is being built.
//!
//! ## Provided implementations
//! - integer primitives, `bool`, `char`, `String`, `&'static str`: the
//!   value's own textual form
//! - `f32` / `f64` and the [`ordered_float`] wrappers `OrderedFloat`,
//!   `NotNan`: textual form; every NaN payload renders as `NaN` and so
//!   collapses to a single key
//! - `Option<T>`: `None` keys as `none()`, `Some(v)` as `some(<v's key>)`
//! - [`serde_json::Value`]: scalar variants key by their JSON text;
//!   `Array` and `Object` fail with [`Error::NonStringable`]

use crate::error::{Error, Result};
use crate::pipeline::{Element, Pipeline, PullIter};
use ordered_float::{NotNan, OrderedFloat};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Capability to produce the canonical string key `distinct()` dedups by.
///
/// Two elements are duplicates iff their keys are identical strings. The
/// key must be stable: the same value always produces the same key.
///
/// # Example
/// ```
/// use lazyflow::{DedupKey, Result};
///
/// #[derive(Clone)]
/// struct UserId(u64);
///
/// impl DedupKey for UserId {
///     fn dedup_key(&self) -> Result<String> {
///         Ok(self.0.to_string())
///     }
/// }
/// ```
pub trait DedupKey {
    /// The canonical string form of this value, or
    /// [`Error::NonStringable`] if it has none.
    fn dedup_key(&self) -> Result<String>;
}

macro_rules! scalar_dedup_key {
    ($($ty:ty),* $(,)?) => {$(
        impl DedupKey for $ty {
            fn dedup_key(&self) -> Result<String> {
                Ok(self.to_string())
            }
        }
    )*};
}

scalar_dedup_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char,
);

// Float textual form: all NaN payloads render as `NaN` and share one key;
// `-0` and `0` render differently and stay distinct, matching the wrappers'
// total order.
scalar_dedup_key!(f32, f64);

impl DedupKey for String {
    fn dedup_key(&self) -> Result<String> {
        Ok(self.clone())
    }
}

impl DedupKey for &'static str {
    fn dedup_key(&self) -> Result<String> {
        Ok((*self).to_string())
    }
}

impl<T: ordered_float::FloatCore + DedupKey> DedupKey for OrderedFloat<T> {
    fn dedup_key(&self) -> Result<String> {
        self.into_inner().dedup_key()
    }
}

impl<T: ordered_float::FloatCore + DedupKey> DedupKey for NotNan<T> {
    fn dedup_key(&self) -> Result<String> {
        self.into_inner().dedup_key()
    }
}

impl<T: DedupKey> DedupKey for Option<T> {
    fn dedup_key(&self) -> Result<String> {
        match self {
            None => Ok("none()".to_string()),
            Some(v) => Ok(format!("some({})", v.dedup_key()?)),
        }
    }
}

/// Scalar JSON values key by their JSON text. Arrays and objects are
/// composite and refuse to key; deduplicate those through
/// [`Pipeline::distinct_by`] with an explicit key function instead.
impl DedupKey for Value {
    fn dedup_key(&self) -> Result<String> {
        match self {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Array(_) => {
                Err(Error::non_stringable::<Value>("JSON array has no canonical string form"))
            }
            Value::Object(_) => {
                Err(Error::non_stringable::<Value>("JSON object has no canonical string form"))
            }
        }
    }
}

impl<T: Element + DedupKey> Pipeline<T> {
    /// Keep each element the first time its [`dedup_key`](DedupKey::dedup_key)
    /// is seen, preserving first-occurrence order.
    ///
    /// The seen-key set is owned by the traversal: every terminal drive of
    /// the resulting pipeline starts with an empty set, and concurrent
    /// traversals never share state.
    ///
    /// An element whose key extraction fails turns into an
    /// [`Error::NonStringable`] at the pull that reaches it, surfaced by
    /// the terminal operation driving the chain.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let unique = from_vec(vec![1, 2, 2, 3]).distinct();
    /// assert_eq!(unique.to_vec()?, vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Pipeline<T> {
        let upstream = Arc::clone(&self.producer);
        Pipeline::from_producer(move || {
            let mut seen: HashSet<String> = HashSet::new();
            Box::new(upstream().filter_map(move |item| match item {
                Err(e) => Some(Err(e)),
                Ok(v) => match v.dedup_key() {
                    Err(e) => Some(Err(e)),
                    Ok(key) => seen.insert(key).then(|| Ok(v)),
                },
            })) as PullIter<T>
        })
    }
}

impl<T: Element> Pipeline<T> {
    /// Keep the first element per key, with an explicit, infallible key
    /// function.
    ///
    /// Unlike [`distinct`](Pipeline::distinct) this never fails: the caller
    /// supplies the key extraction, so there is no element that cannot be
    /// keyed. Use it for composite types without a [`DedupKey`] impl, or
    /// to dedup by a projection of the element.
    ///
    /// # Example
    /// ```
    /// use lazyflow::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let words = from_vec(vec!["apple", "avocado", "banana", "cherry"]);
    /// let one_per_initial = words.distinct_by(|w| w.chars().next());
    /// assert_eq!(one_per_initial.to_vec()?, vec!["apple", "banana", "cherry"]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(&self, key_fn: F) -> Pipeline<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let upstream = Arc::clone(&self.producer);
        let key_fn = Arc::new(key_fn);
        Pipeline::from_producer(move || {
            let key_fn = Arc::clone(&key_fn);
            let mut seen: HashSet<K> = HashSet::new();
            Box::new(upstream().filter_map(move |item| match item {
                Err(e) => Some(Err(e)),
                Ok(v) => seen.insert(key_fn(&v)).then(|| Ok(v)),
            })) as PullIter<T>
        })
    }
}
