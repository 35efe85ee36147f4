//! Seq - Lazy, composable sequence operators for any iterator.
//!
//! Seq adds a small set of pipeline operators to every [`Iterator`] through
//! the [`LazySeq`] extension trait:
//!
//! - Streaming: filter, project, flatten, bounded take and skip
//! - Buffering: stable sort ascending or descending by key, reverse
//! - Terminal: element access, quantifiers, counting, summing, materializing
//!
//! # Quick Start
//!
//! ```rust
//! use standout_seq::{LazySeq, SeqError};
//!
//! struct Task {
//!     name: &'static str,
//!     priority: u8,
//!     done: bool,
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs", priority: 3, done: false },
//!     Task { name: "Fix bug", priority: 5, done: false },
//!     Task { name: "Old task", priority: 1, done: true },
//! ];
//!
//! let open: Vec<&str> = tasks
//!     .iter()
//!     .filter_by(|t| !t.done)
//!     .order_by_desc(|t| t.priority)
//!     .select(|t| t.name)
//!     .to_list();
//! assert_eq!(open, vec!["Fix bug", "Write docs"]);
//!
//! let urgent = tasks.iter().first_where(|t| t.priority > 9);
//! assert_eq!(urgent.err(), Some(SeqError::NoMatch));
//! ```
//!
//! # Evaluation Model
//!
//! Building a pipeline does no work. Each operator returns an adapter that
//! owns its upstream and its closure; elements move through the chain one at
//! a time when the outermost adapter is pulled, so closures run once per
//! element in pull order.
//!
//! The buffering operators ([`OrderBy`], [`OrderByPartial`], [`Reversed`])
//! cannot produce anything from a prefix, so on their first pull they drain
//! upstream completely into a `Vec`, then stream it. Construction is still
//! free, but memory grows with the upstream and an infinite upstream never
//! yields. Put [`LazySeq::limit`] *before* them to bound the work.
//!
//! # Exhaustion
//!
//! Terminal operators take the pipeline by value, so a consumed pipeline
//! cannot be traversed again. Every adapter is fused: after returning
//! `None` once it keeps returning `None` and never pulls its upstream again.
//!
//! # Errors
//!
//! Only operators with a "must exist" contract fail, returning [`SeqError`]:
//!
//! | Operator | Error |
//! |----------|-------|
//! | [`LazySeq::first`] | [`SeqError::EmptySequence`] |
//! | [`LazySeq::first_where`] | [`SeqError::NoMatch`] |
//! | [`LazySeq::order_by_partial`] | [`SeqError::UnorderedKeys`] (as an item) |
//!
//! The `*_or_default` and `*_or_none` variants never fail.

mod buffered;
mod error;
mod ordering;
mod seq;
mod streaming;
mod traits;

// Re-export public API
pub use buffered::{OrderBy, OrderByPartial, Reversed};
pub use error::{Result, SeqError};
pub use ordering::Dir;
pub use seq::LazySeq;
pub use streaming::{Filter, Limit, Offset, Select, SelectMany};
pub use traits::Summable;
