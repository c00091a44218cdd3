//! Stable comparison sort.
//!
//! Elements are pulled one at a time through a [`Cursor`](crate::Cursor) into
//! a run detector, which cuts the input into monotonic runs, and the runs are
//! merged bottom-up. Both witness forms feed the same engine. Already
//! ordered (or reverse-ordered) input is recognised in a single pass with
//! `n - 1` comparisons. Collections with fewer than two elements never reach
//! the comparator.
//!
//! The comparator is a "belongs before or ties" predicate: `before(a, b)`
//! answers `true` when `a` may come first. For an ascending sort that is
//! `a <= b`; `a >= b` sorts descending. Equal elements keep their input
//! order either way.

mod merge;
mod runs;

use log::debug;

use crate::enumerable::Enumerable;
use crate::iter::cursor;

use merge::merge_runs;
use runs::{RunBuilder, Runs};

/// Cut `elements` into runs and merge them.
fn sort_stream<T, I, F>(elements: I, before: &mut F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut builder = RunBuilder::new();
    for item in elements {
        builder.push(item, before);
    }
    let Runs { runs, orientation } = builder.finish();
    debug!(
        "sorting {} elements in {} runs stored {orientation:?}",
        runs.iter().map(Vec::len).sum::<usize>(),
        runs.len()
    );
    merge_runs(runs, orientation, before)
}

/// Sort ascending by the natural order.
///
/// ```rust
/// use enumerable::sort;
///
/// assert_eq!(sort(&vec![3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn sort<C>(collection: &C) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: PartialOrd + Clone,
{
    sort_by(collection, |a, b| a <= b)
}

/// Stable sort by a "belongs before or ties" predicate.
///
/// ```rust
/// use enumerable::{sort_by, unfold};
///
/// let countdown = unfold(0, |n| if *n < 5 { Some((*n, n + 1)) } else { None });
/// assert_eq!(sort_by(&countdown, |a, b| a >= b), vec![4, 3, 2, 1, 0]);
/// ```
pub fn sort_by<C, F>(collection: &C, mut before: F) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    sort_stream(cursor(collection), &mut before)
}

/// Stable ascending sort by a derived key. `key` runs once per element.
///
/// ```rust
/// use enumerable::sort_by_key;
///
/// let words = vec!["pear", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by_key(&words, |w| w.len()), vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by_key<C, F, K>(collection: &C, mut key: F) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: PartialOrd,
{
    let mut before = |a: &(K, C::Item), b: &(K, C::Item)| a.0 <= b.0;
    let keyed = cursor(collection).map(|x| (key(&x), x));
    sort_stream(keyed, &mut before).into_iter().map(|(_, item)| item).collect()
}
