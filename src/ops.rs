//! The sequence operations.
//!
//! Every function here is a single bounded pass over an input slice, driven
//! by a caller-supplied closure (predicate, transform, comparator, or
//! combining operator). The input is never mutated; results are returned as
//! new owned values. Operations are independent of each other and hold no
//! state across calls.
//!
//! Grouped results ([`group_by`], [`to_map`]) use [`AHashMap`]; key iteration
//! order is unspecified, but every bucket preserves input order.

use crate::core::Partition;
use ahash::{AHashMap, AHashSet};
use std::cmp::Ordering;
use std::hash::Hash;

/// Returns the elements satisfying `predicate`, preserving input order.
///
/// # Examples
///
/// ```
/// use seqops::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<E: Clone>(elements: &[E], mut predicate: impl FnMut(&E) -> bool) -> Vec<E> {
    let mut result = Vec::new();
    for item in elements {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Empty input yields `false`. Short-circuits on the first match.
///
/// ```
/// use seqops::any_match;
///
/// assert!(any_match(&["ant", "bee"], |s| s.starts_with('b')));
///
/// let empty: [i32; 0] = [];
/// assert!(!any_match(&empty, |_| true));
/// ```
pub fn any_match<E>(elements: &[E], mut predicate: impl FnMut(&E) -> bool) -> bool {
    for item in elements {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Empty input yields `true` (vacuous truth). Short-circuits on the first
/// counterexample.
///
/// ```
/// use seqops::all_match;
///
/// assert!(all_match(&[2, 4, 6], |n| n % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(all_match(&empty, |_| false));
/// ```
pub fn all_match<E>(elements: &[E], mut predicate: impl FnMut(&E) -> bool) -> bool {
    for item in elements {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// Returns `true` if no element satisfies `predicate`.
///
/// Empty input yields `true`.
///
/// ```
/// use seqops::none_match;
///
/// assert!(none_match(&[1, 3, 5], |n| n % 2 == 0));
/// ```
pub fn none_match<E>(elements: &[E], mut predicate: impl FnMut(&E) -> bool) -> bool {
    for item in elements {
        if predicate(item) {
            return false;
        }
    }
    true
}

/// Counts the elements satisfying `predicate`.
///
/// ```
/// use seqops::count_matching;
///
/// assert_eq!(count_matching(&[1, 2, 3, 4], |n| *n > 2), 2);
/// ```
pub fn count_matching<E>(elements: &[E], mut predicate: impl FnMut(&E) -> bool) -> usize {
    let mut count = 0;
    for item in elements {
        if predicate(item) {
            count += 1;
        }
    }
    count
}

/// Applies `transform` to each element, returning the results in order.
///
/// The output always has the same length as the input.
///
/// # Examples
///
/// ```
/// use seqops::map;
///
/// let lengths = map(&["a", "bb", "ccc"], |s| s.len());
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn map<T, R>(elements: &[T], mut transform: impl FnMut(&T) -> R) -> Vec<R> {
    let mut result = Vec::with_capacity(elements.len());
    for item in elements {
        result.push(transform(item));
    }
    result
}

/// Returns the maximum element by `compare`, or `None` if the input is empty.
///
/// The running best is replaced only when a candidate is strictly greater, so
/// on ties the first occurrence in input order wins.
///
/// # Examples
///
/// ```
/// use seqops::max;
///
/// assert_eq!(max(&[3, 1, 2], |a, b| a.cmp(b)), Some(&3));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(max(&empty, |a, b| a.cmp(b)), None);
/// ```
pub fn max<E>(elements: &[E], mut compare: impl FnMut(&E, &E) -> Ordering) -> Option<&E> {
    let mut best = elements.first()?;
    for candidate in &elements[1..] {
        if compare(candidate, best) == Ordering::Greater {
            best = candidate;
        }
    }
    Some(best)
}

/// Returns the minimum element by `compare`, or `None` if the input is empty.
///
/// Ties keep the first occurrence, as with [`max`].
///
/// ```
/// use seqops::min;
///
/// assert_eq!(min(&[3, 1, 2], |a, b| a.cmp(b)), Some(&1));
/// ```
pub fn min<E>(elements: &[E], mut compare: impl FnMut(&E, &E) -> Ordering) -> Option<&E> {
    let mut best = elements.first()?;
    for candidate in &elements[1..] {
        if compare(candidate, best) == Ordering::Less {
            best = candidate;
        }
    }
    Some(best)
}

/// Returns the input with duplicates removed, keeping the first occurrence of
/// each value in input order.
///
/// Uses a hashed seen-set, so deduplication is O(n) expected rather than a
/// quadratic containment scan.
///
/// # Examples
///
/// ```
/// use seqops::distinct;
///
/// assert_eq!(distinct(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn distinct<E: Clone + Eq + Hash>(elements: &[E]) -> Vec<E> {
    let mut seen = AHashSet::with_capacity(elements.len());
    let mut result = Vec::new();
    for item in elements {
        if seen.insert(item.clone()) {
            result.push(item.clone());
        }
    }
    result
}

/// Invokes `consumer` once per element, in input order.
///
/// This is the one side-effecting operation; it returns nothing.
///
/// ```
/// use seqops::for_each;
///
/// let mut sum = 0;
/// for_each(&[1, 2, 3], |n| sum += n);
/// assert_eq!(sum, 6);
/// ```
pub fn for_each<E>(elements: &[E], mut consumer: impl FnMut(&E)) {
    for item in elements {
        consumer(item);
    }
}

/// Left-folds the sequence with `op`, seeded by its first element.
///
/// Returns `None` on empty input; a single-element input returns that element
/// unchanged.
///
/// # Examples
///
/// ```
/// use seqops::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |acc, n| acc + n), Some(6));
/// assert_eq!(reduce(&[7], |acc, n| acc + n), Some(7));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |acc: i32, n| acc + n), None);
/// ```
pub fn reduce<E: Clone>(elements: &[E], mut op: impl FnMut(E, &E) -> E) -> Option<E> {
    let mut acc = elements.first()?.clone();
    for item in &elements[1..] {
        acc = op(acc, item);
    }
    Some(acc)
}

/// Left-folds the sequence with `op`, starting from `seed`.
///
/// Empty input returns `seed` unchanged. For `[a, b, c]` the result is
/// `op(op(op(seed, a), b), c)`.
///
/// # Examples
///
/// ```
/// use seqops::fold;
///
/// assert_eq!(fold(0, &[1, 2, 3], |acc, n| acc + n), 6);
/// assert_eq!(fold(42, &[], |acc, n: &i32| acc + n), 42);
/// ```
pub fn fold<A, E>(seed: A, elements: &[E], mut op: impl FnMut(A, &E) -> A) -> A {
    let mut acc = seed;
    for item in elements {
        acc = op(acc, item);
    }
    acc
}

/// Splits the sequence into the elements satisfying `predicate` and the rest.
///
/// Both branches of the returned [`Partition`] preserve input order, and both
/// are present (possibly empty) for any input.
///
/// # Examples
///
/// ```
/// use seqops::partition_by;
///
/// let split = partition_by(&["ant", "bee", "cow"], |s| s.contains('e'));
/// assert_eq!(split.matched, vec!["bee"]);
/// assert_eq!(split.unmatched, vec!["ant", "cow"]);
/// ```
pub fn partition_by<E: Clone>(
    elements: &[E],
    mut predicate: impl FnMut(&E) -> bool,
) -> Partition<E> {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for item in elements {
        if predicate(item) {
            matched.push(item.clone());
        } else {
            unmatched.push(item.clone());
        }
    }
    Partition { matched, unmatched }
}

/// Groups elements into buckets keyed by `classifier`.
///
/// Each bucket holds its elements in input order. Keys appear in the map in
/// unspecified order; an empty input produces an empty map.
///
/// # Examples
///
/// ```
/// use seqops::group_by;
///
/// let by_len = group_by(&["ant", "bee", "wasp"], |s| s.len());
/// assert_eq!(by_len[&3], vec!["ant", "bee"]);
/// assert_eq!(by_len[&4], vec!["wasp"]);
/// ```
pub fn group_by<T, K>(elements: &[T], mut classifier: impl FnMut(&T) -> K) -> AHashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
{
    let mut result: AHashMap<K, Vec<T>> = AHashMap::new();
    for item in elements {
        result.entry(classifier(item)).or_default().push(item.clone());
    }
    result
}

/// Builds a map from the sequence, extracting a key and a value per element
/// and combining colliding values with `merge`.
///
/// When two elements produce the same key, `merge` is called with the value
/// accumulated so far on the left and the newer value on the right.
///
/// # Examples
///
/// ```
/// use seqops::to_map;
///
/// let pairs = [("a", 1), ("b", 2), ("a", 3)];
/// let merged = to_map(&pairs, |p| p.0, |p| p.1, |old, new| old + new);
///
/// assert_eq!(merged[&"a"], 4);
/// assert_eq!(merged[&"b"], 2);
/// ```
pub fn to_map<T, K, U>(
    elements: &[T],
    mut key_fn: impl FnMut(&T) -> K,
    mut value_fn: impl FnMut(&T) -> U,
    mut merge: impl FnMut(U, U) -> U,
) -> AHashMap<K, U>
where
    K: Eq + Hash,
{
    let mut result: AHashMap<K, U> = AHashMap::new();
    for item in elements {
        let key = key_fn(item);
        let value = value_fn(item);
        match result.remove(&key) {
            Some(existing) => {
                result.insert(key, merge(existing, value));
            }
            None => {
                result.insert(key, value);
            }
        }
    }
    result
}
