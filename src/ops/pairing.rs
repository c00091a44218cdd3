use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};
use crate::iter::cursor;

/// Pair up elements of `left` and `right` position by position.
///
/// `left` decides the length. Once `right` runs out its slots are `None`, and
/// `right` is never pulled past `left`'s length, so it may be infinite.
///
/// ```rust
/// use enumerable::{iterate_fn, zip};
///
/// assert_eq!(zip(&vec![1, 2, 3], &vec![1, 2]), vec![(1, Some(1)), (2, Some(2)), (3, None)]);
///
/// let naturals = iterate_fn(0u32, |n| n + 1);
/// assert_eq!(zip(&vec!['a', 'b'], &naturals), vec![('a', Some(0)), ('b', Some(1))]);
/// ```
pub fn zip<A, B>(left: &A, right: &B) -> Vec<(A::Item, Option<B::Item>)>
where
    A: Enumerable + ?Sized,
    B: Enumerable + ?Sized,
    A::Item: Clone,
    B::Item: Clone,
{
    let mut others = cursor(right);
    match left.iterate() {
        Witness::Native(items) => items.iter().map(|x| (x.clone(), others.next())).collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            out.push((x, others.next()));
            ControlFlow::Continue(out)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::unfold;
    use std::cell::Cell;

    #[test]
    fn test_zip_left_governs_length() {
        assert_eq!(zip(&(1u32..3), &vec!["a", "b", "c"]), vec![(1, Some("a")), (2, Some("b"))]);
        assert_eq!(zip(&(1u32..4), &(7u32..8)), vec![(1, Some(7)), (2, None), (3, None)]);
        assert!(zip(&Vec::<u8>::new(), &vec![1]).is_empty());
    }

    #[test]
    fn test_zip_pulls_right_lazily() {
        let pulls = Cell::new(0);
        let right = unfold(0u32, |n| {
            pulls.set(pulls.get() + 1);
            Some((*n, n + 1))
        });
        zip(&vec![(); 3], &right);
        assert_eq!(pulls.get(), 3);
    }
}
