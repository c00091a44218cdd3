//! The capability contract every enumerable collection implements.
//!
//! A collection answers [`Enumerable::iterate`] with a [`Witness`]: either a
//! borrowed native slice the operations can walk directly, or a
//! [`Suspended`] traversal they have to drive one step at a time. Every
//! operation in this crate matches on that answer once and runs the
//! corresponding path.

use std::ops::ControlFlow;

use crate::drive::drive;
use crate::suspended::Suspended;

/// How a collection can be traversed.
pub enum Witness<'a, T, S> {
    /// An already materialized ordered sequence.
    Native(&'a [T]),
    /// A paused traversal to be resumed element by element.
    Suspended(Suspended<'a, T, S>),
}

impl<'a, T, S> Witness<'a, T, S> {
    /// Returns `true` for the native form.
    pub fn is_native(&self) -> bool {
        matches!(self, Witness::Native(_))
    }
}

/// Collections that can be enumerated.
///
/// Only [`iterate`](Enumerable::iterate) is required. The provided
/// [`reduce`](Enumerable::reduce), [`contains`](Enumerable::contains) and
/// [`size`](Enumerable::size) walk the witness and can be overridden by types
/// that answer them faster.
///
/// ```rust
/// use enumerable::{Enumerable, Step, Suspended, Witness};
///
/// /// The integers `0..n`, produced lazily.
/// struct Naturals(u32);
///
/// impl Enumerable for Naturals {
///     type Item = u32;
///     type State = u32;
///
///     fn iterate(&self) -> Witness<'_, u32, u32> {
///         let limit = self.0;
///         Witness::Suspended(Suspended::new(
///             move |n| if n < limit { Step::Yielded((n, n + 1)) } else { Step::Complete(()) },
///             0,
///         ))
///     }
/// }
///
/// assert_eq!(Naturals(4).size(), 4);
/// assert_eq!(Naturals(4).reduce(0, |acc, x| acc + x), 6);
/// assert!(Naturals(4).contains(&3));
/// ```
pub trait Enumerable {
    /// Element type.
    type Item;
    /// Resumption state of the suspended form.
    type State;

    /// Query how this collection can be traversed.
    ///
    /// Must be free of side effects; every call starts a fresh traversal.
    fn iterate(&self) -> Witness<'_, Self::Item, Self::State>;

    /// Left fold over all elements.
    fn reduce<A, F>(&self, acc: A, mut f: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        match self.iterate() {
            Witness::Native(items) => items.iter().fold(acc, f),
            Witness::Suspended(iter) => drive(iter, acc, |acc, x| ControlFlow::Continue(f(acc, &x))),
        }
    }

    /// Whether some element equals `value`. Stops at the first match.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self.iterate() {
            Witness::Native(items) => items.contains(value),
            Witness::Suspended(iter) => drive(iter, false, |_, x| {
                if x == *value {
                    ControlFlow::Break(true)
                } else {
                    ControlFlow::Continue(false)
                }
            }),
        }
    }

    /// Number of elements.
    fn size(&self) -> usize {
        match self.iterate() {
            Witness::Native(items) => items.len(),
            Witness::Suspended(iter) => drive(iter, 0, |n, _| ControlFlow::Continue(n + 1)),
        }
    }
}

impl<C> Enumerable for &C
where
    C: Enumerable + ?Sized,
{
    type Item = C::Item;
    type State = C::State;

    fn iterate(&self) -> Witness<'_, Self::Item, Self::State> {
        (**self).iterate()
    }

    fn reduce<A, F>(&self, acc: A, f: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        (**self).reduce(acc, f)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).contains(value)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
