//! Error types surfaced while driving a pipeline.
//!
//! A [`Pipeline`](crate::Pipeline) never fails while it is being *built* —
//! every operator call simply wraps the upstream producer in another lazy
//! stage. Failures surface at the terminal operation that pulls the
//! offending element, which is why every terminal operator returns
//! [`Result`].
//!
//! The only error the core defines is [`Error::NonStringable`]: an element
//! reached [`distinct`](crate::Pipeline::distinct) without being able to
//! produce a canonical string dedup key. See the
//! [`DedupKey`](crate::DedupKey) trait for the keying contract.

use std::fmt;

/// Result alias used by every terminal operator.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while a terminal operation drives a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element pulled by `distinct()` has no canonical string key.
    ///
    /// Raised lazily, at the moment the offending element is pulled —
    /// never at pipeline construction time. If a short-circuiting stage
    /// (`take`, `first`, …) stops the traversal before the element is
    /// reached, the error is never observed.
    NonStringable {
        /// Rust type of the offending element.
        type_name: &'static str,
        /// Human-readable description of the shape that has no key.
        detail: String,
    },
}

impl Error {
    /// Create a [`Error::NonStringable`] for an element of type `T`.
    ///
    /// Intended for [`DedupKey`](crate::DedupKey) implementations on
    /// composite types that are only conditionally keyable.
    pub fn non_stringable<T: ?Sized>(detail: impl Into<String>) -> Self {
        Self::NonStringable {
            type_name: std::any::type_name::<T>(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonStringable { type_name, detail } => {
                write!(f, "element of type `{type_name}` has no canonical string key: {detail}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_stringable_names_the_type() {
        let err = Error::non_stringable::<Vec<u8>>("vectors are composite");
        let msg = err.to_string();
        assert!(msg.contains("Vec<u8>"), "unexpected message: {msg}");
        assert!(msg.contains("vectors are composite"), "unexpected message: {msg}");
    }
}
