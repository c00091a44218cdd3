use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};

/// Left fold, through the collection's own [`Enumerable::reduce`].
///
/// ```rust
/// use enumerable::{reduce, unfold};
///
/// assert_eq!(reduce(&vec![1, 2, 3], 0, |acc, x| acc + x), 6);
///
/// let lazy = unfold(1, |n| (*n <= 3).then(|| (*n, n + 1)));
/// assert_eq!(reduce(&lazy, 0, |acc, x| acc + x), 6);
/// ```
pub fn reduce<C, A, F>(collection: &C, acc: A, f: F) -> A
where
    C: Enumerable + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.reduce(acc, f)
}

/// Map every element while threading an accumulator through the same pass.
///
/// `f` receives the accumulator and an element and returns the mapped value
/// with the next accumulator.
///
/// ```rust
/// use enumerable::map_reduce;
///
/// let (running, total) = map_reduce(&vec![1, 2, 3], 0, |sum, x| (sum + x, sum + x));
/// assert_eq!(running, vec![1, 3, 6]);
/// assert_eq!(total, 6);
/// ```
pub fn map_reduce<C, A, F, R>(collection: &C, acc: A, mut f: F) -> (Vec<R>, A)
where
    C: Enumerable + ?Sized,
    F: FnMut(A, &C::Item) -> (R, A),
{
    match collection.iterate() {
        Witness::Native(items) => {
            let mut mapped = Vec::with_capacity(items.len());
            let acc = items.iter().fold(acc, |acc, x| {
                let (r, next) = f(acc, x);
                mapped.push(r);
                next
            });
            (mapped, acc)
        }
        Witness::Suspended(iter) => drive(iter, (Vec::new(), acc), |(mut mapped, acc), x| {
            let (r, next) = f(acc, &x);
            mapped.push(r);
            ControlFlow::Continue((mapped, next))
        }),
    }
}
