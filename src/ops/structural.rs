use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};

/// Materialize the collection into a native sequence.
///
/// ```rust
/// use enumerable::{to_vec, unfold};
///
/// let lazy = unfold('a', |c| (*c < 'd').then(|| (*c, (*c as u8 + 1) as char)));
/// assert_eq!(to_vec(&lazy), vec!['a', 'b', 'c']);
/// ```
pub fn to_vec<C>(collection: &C) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    match collection.iterate() {
        Witness::Native(items) => items.to_vec(),
        Witness::Suspended(iter) => iter.into_iter().collect(),
    }
}

/// Elements in reverse order.
pub fn reverse<C>(collection: &C) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().rev().cloned().collect(),
        Witness::Suspended(iter) => {
            let mut out: Vec<_> = iter.into_iter().collect();
            out.reverse();
            out
        }
    }
}

/// Elements with duplicates removed; the first occurrence wins and order is kept.
///
/// ```rust
/// use enumerable::uniq;
///
/// assert_eq!(uniq(&vec![1, 2, 3, 2, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone + Hash + Eq,
{
    uniq_by(collection, Clone::clone)
}

/// Elements with duplicate keys removed; the first element per key wins.
///
/// ```rust
/// use enumerable::uniq_by;
///
/// let tagged = vec![(1, 'x'), (2, 'y'), (1, 'z')];
/// assert_eq!(uniq_by(&tagged, |p| p.0), vec![(1, 'x'), (2, 'y')]);
/// ```
pub fn uniq_by<C, F, K>(collection: &C, mut key: F) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: Hash + Eq,
{
    let mut seen = HashSet::new();
    match collection.iterate() {
        Witness::Native(items) => items
            .iter()
            .filter(|x| seen.insert(key(x)))
            .cloned()
            .collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            if seen.insert(key(&x)) {
                out.push(x);
            }
            ControlFlow::Continue(out)
        }),
    }
}

/// Split into the elements satisfying `pred` and the rest, both in input order.
///
/// ```rust
/// use enumerable::partition;
///
/// let (even, odd) = partition(&vec![1, 2, 3, 4, 5], |x| x % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<C, P>(collection: &C, mut pred: P) -> (Vec<C::Item>, Vec<C::Item>)
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().cloned().partition(|x| pred(x)),
        Witness::Suspended(iter) => drive(iter, (Vec::new(), Vec::new()), |(mut yes, mut no), x| {
            if pred(&x) {
                yes.push(x);
            } else {
                no.push(x);
            }
            ControlFlow::Continue((yes, no))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_to_vec_round_trips_suspended() {
        let q = VecDeque::from(vec!["x", "y", "z"]);
        assert_eq!(to_vec(&q), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_reverse_both_forms() {
        assert_eq!(reverse(&vec![1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(reverse(&(1u32..4)), vec![3, 2, 1]);
        assert!(reverse(&(1u32..1)).is_empty());
    }

    #[test]
    fn test_uniq_by_first_occurrence_wins_suspended() {
        let q = VecDeque::from(vec![(1, 'x'), (2, 'y'), (1, 'z')]);
        assert_eq!(uniq_by(&q, |p| p.0), vec![(1, 'x'), (2, 'y')]);
        assert_eq!(uniq(&VecDeque::from(vec![1, 2, 3, 2, 1])), vec![1, 2, 3]);
    }

    #[test]
    fn test_partition_suspended_is_stable() {
        let (small, big) = partition(&(0u32..10), |x| *x < 3 || *x == 7);
        assert_eq!(small, vec![0, 1, 2, 7]);
        assert_eq!(big, vec![3, 4, 5, 6, 8, 9]);
    }
}
