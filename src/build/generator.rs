use std::fmt;
use std::rc::Rc;

use crate::enumerable::{Enumerable, Witness};
use crate::step::Step;
use crate::suspended::Suspended;

/// A lazily produced collection.
///
/// Holds a zero-argument factory; every [`iterate`](Enumerable::iterate) call
/// invokes it for a new step function and first state, so a generator can be
/// enumerated any number of times and may be infinite.
pub struct Generator<'a, T, S> {
    factory: Box<dyn Fn() -> Suspended<'a, T, S> + 'a>,
}

/// Create a generator from a factory returning `(step, first_state)`.
///
/// ```rust
/// use enumerable::{generator, map, Step};
///
/// let squares = generator(|| {
///     (|n: u32| if n < 4 { Step::Yielded((n * n, n + 1)) } else { Step::Complete(()) }, 0)
/// });
/// assert_eq!(map(&squares, |x| x + 1), vec![1, 2, 5, 10]);
/// ```
pub fn generator<'a, T, S, F, G>(factory: F) -> Generator<'a, T, S>
where
    F: Fn() -> (G, S) + 'a,
    G: Fn(S) -> Step<(T, S)> + 'a,
{
    Generator {
        factory: Box::new(move || {
            let (step, first) = factory();
            Suspended::new(step, first)
        }),
    }
}

/// Create a generator from a seed and a function producing the next element
/// and state, or `None` to stop.
///
/// ```rust
/// use enumerable::{to_vec, unfold};
///
/// let countdown = unfold(3u8, |n| (*n > 0).then(|| (*n, n - 1)));
/// assert_eq!(to_vec(&countdown), vec![3, 2, 1]);
/// ```
pub fn unfold<'a, T, S, F>(seed: S, f: F) -> Generator<'a, T, S>
where
    S: Clone + 'a,
    F: Fn(&S) -> Option<(T, S)> + 'a,
{
    let f = Rc::new(f);
    generator(move || {
        let f = Rc::clone(&f);
        (move |state: S| Step::from_option(f(&state)), seed.clone())
    })
}

/// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
///
/// Only short-circuiting operations terminate on it.
///
/// ```rust
/// use enumerable::{iterate_fn, take};
///
/// let doubling = iterate_fn(1u32, |n| n * 2);
/// assert_eq!(take(&doubling, 4), vec![1, 2, 4, 8]);
/// ```
pub fn iterate_fn<'a, T, F>(seed: T, f: F) -> Generator<'a, T, T>
where
    T: Clone + 'a,
    F: Fn(&T) -> T + 'a,
{
    let f = Rc::new(f);
    generator(move || {
        let f = Rc::clone(&f);
        (
            move |current: T| {
                let next = f(&current);
                Step::Yielded((current, next))
            },
            seed.clone(),
        )
    })
}

impl<'a, T, S> Enumerable for Generator<'a, T, S> {
    type Item = T;
    type State = S;

    fn iterate(&self) -> Witness<'_, T, S> {
        Witness::Suspended((self.factory)())
    }
}

impl<T, S> fmt::Debug for Generator<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_generator_restarts_on_every_iterate() {
        let made = Cell::new(0);
        let g = generator(|| {
            made.set(made.get() + 1);
            (
                |n: u8| {
                    if n < 2 {
                        Step::Yielded((n, n + 1))
                    } else {
                        Step::Complete(())
                    }
                },
                0u8,
            )
        });

        assert_eq!(g.size(), 2);
        assert_eq!(g.size(), 2);
        assert_eq!(made.get(), 2);
    }

    #[test]
    fn test_unfold_replays_from_seed() {
        let g = unfold(String::from("ab"), |s: &String| {
            let mut rest = s.clone();
            rest.pop().map(|c| (c, rest))
        });
        assert_eq!(g.reduce(String::new(), |mut acc, c| {
            acc.push(*c);
            acc
        }), "ba");
        assert!(g.contains(&'a'));
        assert!(!g.contains(&'z'));
    }

    #[test]
    fn test_iterate_fn_contains_short_circuits() {
        let odds = iterate_fn(1u64, |n| n + 2);
        assert!(odds.contains(&99));
    }

    #[test]
    fn test_generator_is_never_native() {
        let g = iterate_fn(0, |n: &i32| n + 1);
        assert!(!g.iterate().is_native());
    }
}
