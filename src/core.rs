//! Supporting result types for the sequence operations.
//!
//! This module defines:
//! - [`Partition`]: The fixed two-branch result of [`partition_by`](crate::ops::partition_by).

/// The result of splitting a sequence with a predicate.
///
/// Unlike a `HashMap<bool, Vec<E>>`, the shape is fixed: there are always
/// exactly two branches, both present even when empty, and both preserving
/// the relative order of the input.
///
/// # Examples
///
/// ```
/// use seqops::{partition_by, Partition};
///
/// let Partition { matched, unmatched } = partition_by(&[1, 2, 3, 4], |n| n % 2 == 0);
///
/// assert_eq!(matched, vec![2, 4]);
/// assert_eq!(unmatched, vec![1, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition<E> {
    /// Elements satisfying the predicate, in input order.
    pub matched: Vec<E>,
    /// Elements rejected by the predicate, in input order.
    pub unmatched: Vec<E>,
}

impl<E> Partition<E> {
    /// Total number of elements across both branches.
    ///
    /// Always equals the length of the partitioned input.
    pub fn len(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Returns `true` if both branches are empty.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unmatched.is_empty()
    }

    /// Consumes the partition, returning `(matched, unmatched)`.
    pub fn into_pair(self) -> (Vec<E>, Vec<E>) {
        (self.matched, self.unmatched)
    }
}
