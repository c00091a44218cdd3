//! Pull-style adapters over suspended traversals.
//!
//! [`Pull`] turns a [`Suspended`] into an ordinary [`Iterator`], resuming the
//! step function once per `next()`. [`Cursor`] pulls owned elements from any
//! [`Enumerable`], whichever witness it answers with.
//!
//! ```rust
//! use enumerable::{cursor, unfold};
//!
//! let evens = unfold(0u32, |n| Some((*n * 2, n + 1)));
//! let firsts: Vec<_> = cursor(&evens).take(3).collect();
//! assert_eq!(firsts, vec![0, 2, 4]);
//! ```

use std::iter::{Cloned, FusedIterator};
use std::slice;

use either::Either;

use crate::enumerable::{Enumerable, Witness};
use crate::step::Step;
use crate::suspended::Suspended;

/// Iterator adapter for [`Suspended`].
///
/// Resumes the wrapped traversal on every call to `next()` until the step
/// function reports completion. Once exhausted it keeps returning `None`
/// without invoking the step function again.
pub struct Pull<'a, T, S> {
    state: PullState<'a, T, S>,
}

enum PullState<'a, T, S> {
    Active(Suspended<'a, T, S>),
    Exhausted,
}

impl<'a, T, S> PullState<'a, T, S> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, PullState::Exhausted)
    }
}

impl<'a, T, S> Pull<'a, T, S> {
    /// Create a pulling iterator from a suspended traversal.
    pub fn new(suspended: Suspended<'a, T, S>) -> Self {
        Self {
            state: PullState::Active(suspended),
        }
    }

    /// Check whether the step function has reported completion.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PullState::Exhausted)
    }

    /// Give back the paused traversal, or `None` once exhausted.
    pub fn into_suspended(self) -> Option<Suspended<'a, T, S>> {
        match self.state {
            PullState::Active(suspended) => Some(suspended),
            PullState::Exhausted => None,
        }
    }
}

impl<T, S> Iterator for Pull<'_, T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            PullState::Active(suspended) => match suspended.resume() {
                Step::Yielded((item, rest)) => {
                    self.state = PullState::Active(rest);
                    Some(item)
                }
                Step::Complete(()) => None,
            },
            PullState::Exhausted => None,
        }
    }
}

impl<T, S> FusedIterator for Pull<'_, T, S> {}

/// Owned-element puller over either witness form.
///
/// Native sequences are cloned out of the borrowed slice one element at a
/// time; suspended ones are resumed lazily, so a cursor over an infinite
/// generator is fine as long as the consumer stops.
pub type Cursor<'a, T, S> = Either<Cloned<slice::Iter<'a, T>>, Pull<'a, T, S>>;

/// Open a [`Cursor`] over `collection`.
pub fn cursor<C>(collection: &C) -> Cursor<'_, C::Item, C::State>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
{
    match collection.iterate() {
        Witness::Native(items) => Either::Left(items.iter().cloned()),
        Witness::Suspended(iter) => Either::Right(iter.into_iter()),
    }
}
