use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};

/// Whether `value` occurs in `collection`.
///
/// Delegates to the collection's own [`Enumerable::contains`], so types with
/// a faster membership test use it.
///
/// ```rust
/// use enumerable::contains;
///
/// assert!(contains(&vec![1, 2, 3], &2));
/// assert!(contains(&(0u32..1_000_000), &999_999));
/// ```
pub fn contains<C>(collection: &C, value: &C::Item) -> bool
where
    C: Enumerable + ?Sized,
    C::Item: PartialEq,
{
    collection.contains(value)
}

/// Number of elements, as reported by the collection's own [`Enumerable::size`].
pub fn size<C>(collection: &C) -> usize
where
    C: Enumerable + ?Sized,
{
    collection.size()
}

/// Number of elements satisfying `pred`.
///
/// ```rust
/// use enumerable::count_by;
///
/// assert_eq!(count_by(&vec![1, 2, 3, 4], |x| x % 2 == 0), 2);
/// ```
pub fn count_by<C, P>(collection: &C, mut pred: P) -> usize
where
    C: Enumerable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().filter(|x| pred(x)).count(),
        Witness::Suspended(iter) => drive(iter, 0, |n, x| {
            ControlFlow::Continue(if pred(&x) { n + 1 } else { n })
        }),
    }
}

/// Whether the collection has no elements. Pulls at most one element.
pub fn is_empty<C>(collection: &C) -> bool
where
    C: Enumerable + ?Sized,
{
    match collection.iterate() {
        Witness::Native(items) => items.is_empty(),
        Witness::Suspended(iter) => iter.resume().is_complete(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{iterate_fn, unfold};

    fn letters() -> crate::build::Generator<'static, char, u8> {
        unfold(0u8, |i| (*i < 5).then(|| ((b'a' + i) as char, i + 1)))
    }

    #[test]
    fn test_size_both_forms() {
        assert_eq!(size(&vec!['a', 'b', 'c', 'd', 'e']), 5);
        assert_eq!(size(&letters()), 5);
        assert_eq!(size(&Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_count_by_both_forms() {
        let vowels = |c: &char| "aeiou".contains(*c);
        assert_eq!(count_by(&vec!['a', 'b', 'c', 'd', 'e'], vowels), 2);
        assert_eq!(count_by(&letters(), vowels), 2);
    }

    #[test]
    fn test_contains_suspended_stops_early() {
        assert!(contains(&iterate_fn(0u64, |n| n + 3), &300));
        assert!(!contains(&letters(), &'z'));
    }

    #[test]
    fn test_is_empty_on_infinite() {
        assert!(!is_empty(&iterate_fn(0, |n: &i32| n + 1)));
        assert!(is_empty(&unfold((), |_| None::<((), ())>)));
        assert!(is_empty(&[0u8; 0]));
    }
}
