//! Paused traversals.
//!
//! A [`Suspended`] pairs a step function with the state to resume from. The
//! step function is pure: feeding it the same state always produces the same
//! [`Step`], so a `Suspended` can be resumed exactly once and the traversal
//! continues from the state it hands back.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::{Step, Suspended};
//!
//! let countdown = Suspended::new(|n: u32| if n == 0 {
//!     Step::Complete(())
//! } else {
//!     Step::Yielded((n, n - 1))
//! }, 2);
//!
//! let (first, rest) = countdown.resume().yielded_value().unwrap();
//! assert_eq!(first, 2);
//! let (second, rest) = rest.resume().yielded_value().unwrap();
//! assert_eq!(second, 1);
//! assert!(rest.resume().is_complete());
//! ```

use std::fmt;

use crate::iter::Pull;
use crate::step::Step;

/// Boxed step function: `State -> (Element, NextState) | Stop`.
pub type StepFn<'a, T, S> = Box<dyn Fn(S) -> Step<(T, S)> + 'a>;

/// A step function together with the state it will be resumed from.
pub struct Suspended<'a, T, S> {
    step: StepFn<'a, T, S>,
    state: S,
}

impl<'a, T, S> Suspended<'a, T, S> {
    /// Pause a traversal at `state`, to be advanced by `step`.
    pub fn new<F>(step: F, state: S) -> Self
    where
        F: Fn(S) -> Step<(T, S)> + 'a,
    {
        Self {
            step: Box::new(step),
            state,
        }
    }

    /// Invoke the step function on the current state.
    ///
    /// Returns the produced element along with the traversal paused just
    /// after it, or `Complete` when the sequence is exhausted.
    pub fn resume(self) -> Step<(T, Self)> {
        let Suspended { step, state } = self;
        match step(state) {
            Step::Yielded((item, next)) => Step::Yielded((item, Suspended { step, state: next })),
            Step::Complete(()) => Step::Complete(()),
        }
    }

    /// The state this traversal will be resumed from.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Re-express the traversal over a wider state type.
    ///
    /// `inject` wraps each state; `project` recovers it, returning `None` for
    /// states this traversal never produced, which end the sequence.
    pub fn map_state<S2, I, P>(self, inject: I, project: P) -> Suspended<'a, T, S2>
    where
        T: 'a,
        S: 'a,
        I: Fn(S) -> S2 + 'a,
        P: Fn(S2) -> Option<S> + 'a,
    {
        let Suspended { step, state } = self;
        let first = inject(state);
        Suspended::new(
            move |wide: S2| match project(wide) {
                Some(narrow) => step(narrow).map_state(&inject),
                None => Step::Complete(()),
            },
            first,
        )
    }
}

impl<'a, T, S> IntoIterator for Suspended<'a, T, S> {
    type Item = T;
    type IntoIter = Pull<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        Pull::new(self)
    }
}

impl<T, S: fmt::Debug> fmt::Debug for Suspended<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suspended")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upto(limit: u32) -> Suspended<'static, u32, u32> {
        Suspended::new(
            move |n: u32| {
                if n < limit {
                    Step::Yielded((n, n + 1))
                } else {
                    Step::Complete(())
                }
            },
            0,
        )
    }

    #[test]
    fn test_resume_walks_states_in_order() {
        let mut seen = Vec::new();
        let mut cur = upto(3);
        loop {
            match cur.resume() {
                Step::Yielded((x, rest)) => {
                    seen.push(x);
                    cur = rest;
                }
                Step::Complete(()) => break,
            }
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_step_function_is_repeatable() {
        let a = upto(5);
        let b = upto(5);
        assert_eq!(a.state(), b.state());
        let (x, _) = a.resume().yielded_value().unwrap();
        let (y, _) = b.resume().yielded_value().unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn test_map_state_preserves_sequence() {
        let wide = upto(3).map_state(|n| Some(n), |s: Option<u32>| s);
        assert_eq!(wide.state(), &Some(0));
        assert_eq!(wide.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_debug_shows_state() {
        let rendered = format!("{:?}", upto(1));
        assert!(rendered.contains("state: 0"));
    }
}
