//! Prefix and suffix slicing.
//!
//! Counts are signed. A non-negative count is applied in a single pass. A
//! negative count is measured from the end: the collection is sized first and
//! the count re-derived as `max(0, len - |count|)`, after which the same
//! non-negative logic runs again from the start. `take`, `drop` and `split`
//! all share that rule, so `split(c, n) == (take(c, n), drop(c, n))` for
//! every `n`.

use std::ops::ControlFlow;

use log::debug;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};

/// Turn a signed count into a prefix length, sizing the collection when the
/// count is negative.
pub(crate) fn prefix_len<C>(collection: &C, count: isize) -> usize
where
    C: Enumerable + ?Sized,
{
    match usize::try_from(count) {
        Ok(n) => n,
        Err(_) => {
            let len = collection.size();
            let resolved = len.saturating_sub(count.unsigned_abs());
            debug!("count {count} over {len} elements resolved to prefix {resolved}");
            resolved
        }
    }
}

/// The first `count` elements.
///
/// ```rust
/// use enumerable::take;
///
/// assert_eq!(take(&vec![1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(take(&vec![1, 2, 3], -1), vec![1, 2]);
/// assert_eq!(take(&vec![1, 2, 3], 10), vec![1, 2, 3]);
/// ```
pub fn take<C>(collection: &C, count: isize) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    let n = prefix_len(collection, count);
    if n == 0 {
        return Vec::new();
    }
    match collection.iterate() {
        Witness::Native(items) => items[..n.min(items.len())].to_vec(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            out.push(x);
            if out.len() == n {
                ControlFlow::Break(out)
            } else {
                ControlFlow::Continue(out)
            }
        }),
    }
}

/// Everything after the first `count` elements.
pub fn drop<C>(collection: &C, count: isize) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    let n = prefix_len(collection, count);
    match collection.iterate() {
        Witness::Native(items) => items[n.min(items.len())..].to_vec(),
        Witness::Suspended(iter) => {
            let mut skipped = 0;
            drive(iter, Vec::new(), |mut out, x| {
                if skipped < n {
                    skipped += 1;
                } else {
                    out.push(x);
                }
                ControlFlow::Continue(out)
            })
        }
    }
}

/// The first `count` elements and the rest, in one traversal of the prefix logic.
///
/// ```rust
/// use enumerable::split;
///
/// assert_eq!(split(&vec![1, 2, 3], 1), (vec![1], vec![2, 3]));
/// assert_eq!(split(&vec![1, 2, 3], -1), (vec![1, 2], vec![3]));
/// assert_eq!(split(&vec![1, 2, 3], -5), (vec![], vec![1, 2, 3]));
/// ```
pub fn split<C>(collection: &C, count: isize) -> (Vec<C::Item>, Vec<C::Item>)
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    let n = prefix_len(collection, count);
    match collection.iterate() {
        Witness::Native(items) => {
            let (head, tail) = items.split_at(n.min(items.len()));
            (head.to_vec(), tail.to_vec())
        }
        Witness::Suspended(iter) => drive(iter, (Vec::new(), Vec::new()), |(mut head, mut tail), x| {
            if head.len() < n {
                head.push(x);
            } else {
                tail.push(x);
            }
            ControlFlow::Continue((head, tail))
        }),
    }
}

/// The longest prefix whose elements all satisfy `pred`.
///
/// Stops pulling at the first failure, so it terminates on infinite input
/// as long as some element fails.
pub fn take_while<C, P>(collection: &C, mut pred: P) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().take_while(|x| pred(x)).cloned().collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            if pred(&x) {
                out.push(x);
                ControlFlow::Continue(out)
            } else {
                ControlFlow::Break(out)
            }
        }),
    }
}

/// Everything from the first element that fails `pred` onwards.
pub fn drop_while<C, P>(collection: &C, mut pred: P) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => {
            let start = items.iter().position(|x| !pred(x)).unwrap_or(items.len());
            items[start..].to_vec()
        }
        Witness::Suspended(iter) => {
            let mut dropping = true;
            drive(iter, Vec::new(), |mut out, x| {
                if dropping && !pred(&x) {
                    dropping = false;
                }
                if !dropping {
                    out.push(x);
                }
                ControlFlow::Continue(out)
            })
        }
    }
}

/// `(take_while(c, pred), drop_while(c, pred))` in one pass.
///
/// ```rust
/// use enumerable::split_while;
///
/// let (small, rest) = split_while(&vec![1, 2, 5, 1], |x| *x < 3);
/// assert_eq!(small, vec![1, 2]);
/// assert_eq!(rest, vec![5, 1]);
/// ```
pub fn split_while<C, P>(collection: &C, mut pred: P) -> (Vec<C::Item>, Vec<C::Item>)
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => {
            let start = items.iter().position(|x| !pred(x)).unwrap_or(items.len());
            let (head, tail) = items.split_at(start);
            (head.to_vec(), tail.to_vec())
        }
        Witness::Suspended(iter) => {
            let mut taking = true;
            drive(iter, (Vec::new(), Vec::new()), |(mut head, mut tail), x| {
                if taking && !pred(&x) {
                    taking = false;
                }
                if taking {
                    head.push(x);
                } else {
                    tail.push(x);
                }
                ControlFlow::Continue((head, tail))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{iterate_fn, unfold};
    use std::cell::Cell;

    #[test]
    fn test_prefix_len() {
        let v = vec![1, 2, 3];
        assert_eq!(prefix_len(&v, 2), 2);
        assert_eq!(prefix_len(&v, 7), 7);
        assert_eq!(prefix_len(&v, -1), 2);
        assert_eq!(prefix_len(&v, -3), 0);
        assert_eq!(prefix_len(&v, isize::MIN), 0);
    }

    #[test]
    fn test_take_zero_never_pulls() {
        let pulls = Cell::new(0);
        let counted = unfold(0u32, |n| {
            pulls.set(pulls.get() + 1);
            Some((*n, n + 1))
        });
        assert!(take(&counted, 0).is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_stops_on_infinite() {
        let naturals = iterate_fn(0u32, |n| n + 1);
        assert_eq!(take(&naturals, 3), vec![0, 1, 2]);
        assert_eq!(take_while(&naturals, |n| *n < 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_negative_counts_over_suspended() {
        let r = 1u32..6;
        assert_eq!(take(&r, -2), vec![1, 2, 3]);
        assert_eq!(drop(&r, -2), vec![4, 5]);
        assert_eq!(split(&r, -2), (vec![1, 2, 3], vec![4, 5]));
        assert_eq!(split(&r, -9), (vec![], vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_drop_past_end() {
        assert!(drop(&vec![1, 2], 5).is_empty());
        assert!(drop(&(0u32..2), 5).is_empty());
    }

    #[test]
    fn test_drop_while_keeps_later_matches() {
        let v = vec![1, 2, 5, 1, 2];
        assert_eq!(drop_while(&v, |x| *x < 3), vec![5, 1, 2]);
        let lazy = unfold(0usize, move |i| v.get(*i).map(|x| (*x, i + 1)));
        assert_eq!(drop_while(&lazy, |x| *x < 3), vec![5, 1, 2]);
        assert_eq!(split_while(&lazy, |x| *x < 3), (vec![1, 2], vec![5, 1, 2]));
    }
}
