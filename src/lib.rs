//! # Lazyflow
//!
//! A **lazy, composable sequence pipeline library** for Rust. Lazyflow
//! provides a fluent API for building pull-based transformation chains over
//! finite or generated sequences, without materializing intermediate
//! results.
//!
//! ## Key Features
//!
//! - **Fluent pipeline API** - chain transformations with method calls
//! - **Lazy to the end** - no element moves until a terminal operator runs
//! - **Pull-based** - each stage computes one element per request and
//!   buffers nothing
//! - **Re-invocable** - one pipeline value, any number of independent
//!   traversals
//! - **Short-circuiting terminals** - `first`, `all`, `any`, `none` stop
//!   pulling the moment their result is decided
//! - **Keyed deduplication** - `distinct` with canonical string keys,
//!   `distinct_by` with explicit key functions
//! - **Type-safe** - generic over the element type, with dynamic JSON
//!   elements supported through [`serde_json::Value`]
//!
//! ## Quick Start
//!
//! ```
//! use lazyflow::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let first_even_squares = range(1, 1_000_000)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .take(3);
//!
//! // Nothing has been computed yet. to_vec() drives the chain and pulls
//! // exactly six source elements (the six needed to find three evens).
//! assert_eq!(first_even_squares.to_vec()?, vec![4, 16, 36]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline<T>`] is an immutable value wrapping a *producer*: a
//! repeatable factory of a lazy, ordered element sequence. Build one from a
//! vector ([`from_vec`]), an inclusive arithmetic range ([`range`],
//! [`range_step`]), a custom generator ([`from_producer`]), or nothing
//! ([`empty`]).
//!
//! ### Transformation operators
//!
//! Each operator wraps the upstream in one more lazy stage and returns a
//! new `Pipeline`; the receiver is untouched:
//!
//! - [`map`](Pipeline::map) - transform each element
//! - [`filter`](Pipeline::filter) - keep elements matching a predicate
//! - [`inspect`](Pipeline::inspect) - observe elements as they are pulled
//! - [`take`](Pipeline::take) / [`take_while`](Pipeline::take_while) -
//!   truncate the sequence
//! - [`skip`](Pipeline::skip) / [`skip_while`](Pipeline::skip_while) -
//!   drop a prefix
//! - [`distinct`](Pipeline::distinct) / [`distinct_by`](Pipeline::distinct_by) -
//!   drop duplicates, keeping first occurrences
//!
//! ### Terminal operators
//!
//! Terminal operators open one traversal and pull until their result is
//! decided: [`to_vec`](Pipeline::to_vec), [`count`](Pipeline::count),
//! [`for_each`](Pipeline::for_each), [`first`](Pipeline::first),
//! [`all`](Pipeline::all) / [`any`](Pipeline::any) /
//! [`none`](Pipeline::none), [`fold`](Pipeline::fold) /
//! [`reduce`](Pipeline::reduce). All return [`Result`], because the one
//! lazily-raised error ([`Error::NonStringable`]) surfaces at the terminal
//! call that pulls the offending element.
//!
//! ### Deduplication
//!
//! [`distinct`](Pipeline::distinct) keys elements by the canonical string
//! form defined by the [`DedupKey`] trait; scalars are covered out of the
//! box and composite types opt in with one method. See the [`dedup`]
//! module for the keying rules and the failure mode for unkeyable values.
//!
//! ## Unbounded sequences
//!
//! Sources can be unbounded ([`range_step`] with a non-positive step, or a
//! [`from_producer`] generator). That is fine as long as a stopping stage
//! (`take`, `take_while`) or a short-circuiting terminal bounds the
//! traversal; draining an unbounded chain with `to_vec`/`count` does not
//! terminate.
//!
//! ## Module Overview
//!
//! - [`pipeline`] - the `Pipeline` type and source constructors
//! - [`ops`] - lazy transformation operators
//! - [`dedup`] - the `DedupKey` capability and the distinct stages
//! - [`terminal`] - terminal operators
//! - [`extensions`] - `CompositeTransform` for reusable operator bundles
//! - [`error`] - error and result types
//! - [`testing`] - assertions and pull-counting probes for tests

pub mod dedup;
pub mod error;
pub mod extensions;
pub mod ops;
pub mod pipeline;
pub mod terminal;
pub mod testing;

pub use dedup::DedupKey;
pub use error::{Error, Result};
pub use extensions::CompositeTransform;
pub use pipeline::{Element, Pipeline, empty, from_producer, from_vec, range, range_step};
