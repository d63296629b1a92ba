//! # Seqops
//!
//! `seqops` is a small set of generic higher-order helper functions over
//! ordered in-memory sequences: filtering, mapping, predicate matching,
//! min/max by comparator, deduplication, partitioning, grouping, and
//! reduction.
//!
//! It is a pure, stateless utility surface: every operation is a single
//! bounded pass over a slice, parameterized by a caller-supplied closure.
//! There is no I/O, no internal concurrency, and no state shared across
//! calls.
//!
//! ## Key Features
//!
//! - **Order preserving**: [`filter`], [`map`], [`distinct`],
//!   [`partition_by`], and the buckets of [`group_by`] all keep the relative
//!   order of the input.
//! - **No hidden panics**: empty-input cases are part of each operation's
//!   contract — [`max`], [`min`], and [`reduce`] return `Option` rather than
//!   panicking or expecting a sentinel.
//! - **Input never mutated**: operations take `&[E]` and return new owned
//!   values; the single side-effecting operation is [`for_each`], whose
//!   effects live entirely in the caller's closure.
//! - **Fixed-shape partitions**: [`partition_by`] returns a [`Partition`]
//!   record with `matched`/`unmatched` branches instead of a bool-keyed map.
//!
//! ## Usage
//!
//! ### Predicates and transforms
//!
//! ```rust
//! use seqops::{filter, map, all_match};
//!
//! let words = ["ant", "bee", "cow", "emu"];
//!
//! let with_e = filter(&words, |w| w.contains('e'));
//! assert_eq!(with_e, vec!["bee", "emu"]);
//!
//! let upper = map(&words, |w| w.to_uppercase());
//! assert_eq!(upper[0], "ANT");
//!
//! assert!(all_match(&words, |w| w.len() == 3));
//! ```
//!
//! ### Grouping and merging
//!
//! ```rust
//! use seqops::{group_by, to_map};
//!
//! let orders = [("alice", 10), ("bob", 5), ("alice", 7)];
//!
//! let per_customer = group_by(&orders, |o| o.0);
//! assert_eq!(per_customer[&"alice"], vec![("alice", 10), ("alice", 7)]);
//!
//! let totals = to_map(&orders, |o| o.0, |o| o.1, |sum, amount| sum + amount);
//! assert_eq!(totals[&"alice"], 17);
//! assert_eq!(totals[&"bob"], 5);
//! ```
//!
//! ### Reduction
//!
//! ```rust
//! use seqops::{fold, reduce};
//!
//! assert_eq!(fold(0, &[1, 2, 3], |acc, n| acc + n), 6);
//! assert_eq!(reduce(&[1, 2, 3], |acc, n| acc * n), Some(6));
//! ```
//!
//! ## Performance Characteristics
//!
//! Every operation is O(n) in the input length, plus hashing cost for
//! [`distinct`], [`group_by`], and [`to_map`], which use `ahash`-backed
//! maps/sets. All operations run to completion synchronously; calls are
//! independent, so invoking them concurrently from multiple threads is safe
//! as long as the supplied closures are.

pub mod core;
pub mod ops;

pub use crate::core::Partition;
pub use ops::{
    all_match, any_match, count_matching, distinct, filter, fold, for_each, group_by, map, max,
    min, none_match, partition_by, reduce, to_map,
};

pub mod prelude {
    pub use crate::core::Partition;
    pub use crate::ops::{
        all_match, any_match, count_matching, distinct, filter, fold, for_each, group_by, map,
        max, min, none_match, partition_by, reduce, to_map,
    };
}
