use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};
use crate::truthy::Truthy;

/// Whether every element is truthy. True for an empty collection.
///
/// ```rust
/// use enumerable::all;
///
/// assert!(all(&vec![true, true]));
/// assert!(!all(&vec![Some(1), None]));
/// assert!(all(&Vec::<bool>::new()));
/// ```
pub fn all<C>(collection: &C) -> bool
where
    C: Enumerable + ?Sized,
    C::Item: Truthy,
{
    all_by(collection, Truthy::is_truthy)
}

/// Whether every element satisfies `pred`. Stops at the first failure.
pub fn all_by<C, P>(collection: &C, mut pred: P) -> bool
where
    C: Enumerable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().all(pred),
        Witness::Suspended(iter) => drive(iter, true, |_, x| {
            if pred(&x) {
                ControlFlow::Continue(true)
            } else {
                ControlFlow::Break(false)
            }
        }),
    }
}

/// Whether some element is truthy. False for an empty collection.
pub fn any<C>(collection: &C) -> bool
where
    C: Enumerable + ?Sized,
    C::Item: Truthy,
{
    any_by(collection, Truthy::is_truthy)
}

/// Whether some element satisfies `pred`. Stops at the first success.
///
/// ```rust
/// use enumerable::{any_by, iterate_fn};
///
/// let naturals = iterate_fn(0u64, |n| n + 1);
/// assert!(any_by(&naturals, |n| n * n > 1000));
/// ```
pub fn any_by<C, P>(collection: &C, mut pred: P) -> bool
where
    C: Enumerable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().any(pred),
        Witness::Suspended(iter) => drive(iter, false, |_, x| {
            if pred(&x) {
                ControlFlow::Break(true)
            } else {
                ControlFlow::Continue(false)
            }
        }),
    }
}
