//! Positional lookup.
//!
//! Lookup is linear for suspended collections and constant for native ones.
//! A negative index counts from the end (`-1` is the last element); it costs
//! a sizing pass before the lookup itself.

use std::ops::ControlFlow;

use log::debug;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};
use crate::error::{Error, Result};

/// The element at `index`, or `None` when the collection is too short.
///
/// ```rust
/// use enumerable::fetch;
///
/// assert_eq!(fetch(&vec![2, 4, 6], 0), Some(2));
/// assert_eq!(fetch(&vec![2, 4, 6], -1), Some(6));
/// assert_eq!(fetch(&vec![2, 4, 6], 4), None);
/// ```
pub fn fetch<C>(collection: &C, index: isize) -> Option<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    lookup(collection, index).ok()
}

/// The element at `index`, failing with [`Error::OutOfBounds`] when absent.
///
/// ```rust
/// use enumerable::{fetch_strict, Error};
///
/// assert_eq!(fetch_strict(&vec![2, 4, 6], 1), Ok(4));
/// assert_eq!(fetch_strict(&vec![2, 4, 6], 4), Err(Error::OutOfBounds { index: 4, size: 3 }));
/// ```
pub fn fetch_strict<C>(collection: &C, index: isize) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    lookup(collection, index).map_err(|size| Error::OutOfBounds { index, size })
}

/// The element at `index`, or `default` when absent.
pub fn at<C>(collection: &C, index: isize, default: C::Item) -> C::Item
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    lookup(collection, index).unwrap_or(default)
}

/// Find the element at a signed index; on a miss, report the collection size.
fn lookup<C>(collection: &C, index: isize) -> std::result::Result<C::Item, usize>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    match usize::try_from(index) {
        Ok(position) => nth(collection, position),
        Err(_) => {
            let len = collection.size();
            let back = index.unsigned_abs();
            if back > len {
                return Err(len);
            }
            debug!("index {index} over {len} elements resolved to position {}", len - back);
            nth(collection, len - back)
        }
    }
}

fn nth<C>(collection: &C, position: usize) -> std::result::Result<C::Item, usize>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    match collection.iterate() {
        Witness::Native(items) => items.get(position).cloned().ok_or(items.len()),
        Witness::Suspended(iter) => {
            let mut seen = 0;
            drive(iter, Err(0), |_, x| {
                if seen == position {
                    ControlFlow::Break(Ok(x))
                } else {
                    seen += 1;
                    ControlFlow::Continue(Err(seen))
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::iterate_fn;

    #[test]
    fn test_fetch_suspended() {
        let r = 10u32..13;
        assert_eq!(fetch(&r, 0), Some(10));
        assert_eq!(fetch(&r, 2), Some(12));
        assert_eq!(fetch(&r, 3), None);
        assert_eq!(fetch(&r, -3), Some(10));
        assert_eq!(fetch(&r, -4), None);
    }

    #[test]
    fn test_fetch_strict_reports_size() {
        assert_eq!(
            fetch_strict(&(0u32..3), 7),
            Err(Error::OutOfBounds { index: 7, size: 3 })
        );
        assert_eq!(
            fetch_strict(&vec![1, 2, 3], -4),
            Err(Error::OutOfBounds { index: -4, size: 3 })
        );
    }

    #[test]
    fn test_at_defaults() {
        assert_eq!(at(&vec!['a', 'b'], 1, '?'), 'b');
        assert_eq!(at(&vec!['a', 'b'], 2, '?'), '?');
        assert_eq!(at(&(0u32..2), 5, 99), 99);
    }

    #[test]
    fn test_fetch_on_infinite_terminates() {
        let odds = iterate_fn(1u64, |n| n + 2);
        assert_eq!(fetch(&odds, 50), Some(101));
    }
}
