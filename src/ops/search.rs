use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};

/// First element satisfying `pred`, or `default` when none does.
///
/// ```rust
/// use enumerable::find;
///
/// assert_eq!(find(&vec![1, 4, 6], 0, |x| x % 2 == 0), 4);
/// assert_eq!(find(&vec![1, 3, 5], 0, |x| x % 2 == 0), 0);
/// ```
pub fn find<C, P>(collection: &C, default: C::Item, mut pred: P) -> C::Item
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().find(|x| pred(x)).cloned().unwrap_or(default),
        Witness::Suspended(iter) => drive(iter, default, |default, x| {
            if pred(&x) {
                ControlFlow::Break(x)
            } else {
                ControlFlow::Continue(default)
            }
        }),
    }
}

/// First `Some` produced by `f`, or `default` when `f` never produces one.
///
/// ```rust
/// use enumerable::find_value;
///
/// let words = vec!["apple", "42", "7"];
/// assert_eq!(find_value(&words, -1, |w| w.parse::<i32>().ok()), 42);
/// ```
pub fn find_value<C, F, R>(collection: &C, default: R, mut f: F) -> R
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item) -> Option<R>,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().find_map(f).unwrap_or(default),
        Witness::Suspended(iter) => drive(iter, default, |default, x| match f(&x) {
            Some(found) => ControlFlow::Break(found),
            None => ControlFlow::Continue(default),
        }),
    }
}

/// Position of the first element satisfying `pred`.
pub fn find_index<C, P>(collection: &C, mut pred: P) -> Option<usize>
where
    C: Enumerable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().position(pred),
        Witness::Suspended(iter) => {
            let mut index = 0;
            drive(iter, None, |_, x| {
                if pred(&x) {
                    ControlFlow::Break(Some(index))
                } else {
                    index += 1;
                    ControlFlow::Continue(None)
                }
            })
        }
    }
}
