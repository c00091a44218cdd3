use std::ops::ControlFlow;

use crate::drive::{drive, drive_each};
use crate::enumerable::{Enumerable, Witness};

/// Visit every element in order.
pub fn each<C, F>(collection: &C, mut f: F)
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item),
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().for_each(f),
        Witness::Suspended(iter) => drive_each(iter, |x| f(&x)),
    }
}

/// Visit every element along with its 0-based position.
pub fn each_with_index<C, F>(collection: &C, mut f: F)
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item, usize),
{
    match collection.iterate() {
        Witness::Native(items) => {
            for (i, x) in items.iter().enumerate() {
                f(x, i);
            }
        }
        Witness::Suspended(iter) => {
            drive(iter, 0, |i, x| {
                f(&x, i);
                ControlFlow::Continue(i + 1)
            });
        }
    }
}

/// Apply `f` to every element, collecting the results in order.
///
/// ```rust
/// use enumerable::map;
///
/// assert_eq!(map(&vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, F, R>(collection: &C, mut f: F) -> Vec<R>
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().map(f).collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            out.push(f(&x));
            ControlFlow::Continue(out)
        }),
    }
}

/// Like [`map`], also passing each element's 0-based position.
pub fn map_with_index<C, F, R>(collection: &C, mut f: F) -> Vec<R>
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item, usize) -> R,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().enumerate().map(|(i, x)| f(x, i)).collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            let index = out.len();
            out.push(f(&x, index));
            ControlFlow::Continue(out)
        }),
    }
}

/// Elements satisfying `pred`, in order.
pub fn filter<C, P>(collection: &C, mut pred: P) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().filter(|x| pred(x)).cloned().collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            if pred(&x) {
                out.push(x);
            }
            ControlFlow::Continue(out)
        }),
    }
}

/// Elements not satisfying `pred`, in order.
pub fn reject<C, P>(collection: &C, mut pred: P) -> Vec<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |x| !pred(x))
}

/// Filter and map in a single pass: `f` only sees elements `pred` accepted.
///
/// ```rust
/// use enumerable::filter_map;
///
/// let evens_squared = filter_map(&vec![1, 2, 3, 4], |x| x % 2 == 0, |x| x * x);
/// assert_eq!(evens_squared, vec![4, 16]);
/// ```
pub fn filter_map<C, P, F, R>(collection: &C, mut pred: P, mut f: F) -> Vec<R>
where
    C: Enumerable + ?Sized,
    P: FnMut(&C::Item) -> bool,
    F: FnMut(&C::Item) -> R,
{
    match collection.iterate() {
        Witness::Native(items) => items.iter().filter(|x| pred(x)).map(f).collect(),
        Witness::Suspended(iter) => drive(iter, Vec::new(), |mut out, x| {
            if pred(&x) {
                out.push(f(&x));
            }
            ControlFlow::Continue(out)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::unfold;

    fn digits() -> crate::build::Generator<'static, u32, u32> {
        unfold(0u32, |n| (*n < 5).then(|| (*n, n + 1)))
    }

    #[test]
    fn test_each_visits_in_order() {
        let mut native = Vec::new();
        each(&vec![0u32, 1, 2, 3, 4], |x| native.push(*x));
        let mut suspended = Vec::new();
        each(&digits(), |x| suspended.push(*x));
        assert_eq!(native, suspended);
    }

    #[test]
    fn test_each_with_index_is_zero_based() {
        let mut seen = Vec::new();
        each_with_index(&digits(), |x, i| seen.push((i, *x * 2)));
        assert_eq!(seen, vec![(0, 0), (1, 2), (2, 4), (3, 6), (4, 8)]);
    }

    #[test]
    fn test_map_with_index_both_forms() {
        let expected = vec![0, 1, 4, 9, 16];
        assert_eq!(map_with_index(&vec![0, 1, 2, 3, 4], |x, i| x * i as u32), expected);
        assert_eq!(map_with_index(&digits(), |x, i| x * i as u32), expected);
    }

    #[test]
    fn test_filter_and_reject_split_the_input() {
        let odd = |x: &u32| x % 2 == 1;
        assert_eq!(filter(&digits(), odd), vec![1, 3]);
        assert_eq!(reject(&digits(), odd), vec![0, 2, 4]);
        assert_eq!(filter(&vec![0, 1, 2, 3, 4], odd), vec![1, 3]);
    }

    #[test]
    fn test_filter_map_only_transforms_accepted() {
        let mut transformed = Vec::new();
        let out = filter_map(
            &digits(),
            |x| *x > 2,
            |x| {
                transformed.push(*x);
                x.to_string()
            },
        );
        assert_eq!(out, vec!["3", "4"]);
        assert_eq!(transformed, vec![3, 4]);
    }

    #[test]
    #[should_panic(expected = "predicate failed on 3")]
    fn test_predicate_panic_propagates_from_suspended_arm() {
        filter(&digits(), |n| {
            assert!(*n != 3, "predicate failed on {n}");
            true
        });
    }

    #[test]
    #[should_panic(expected = "transform failed")]
    fn test_transform_panic_propagates_from_native_arm() {
        map(&vec![1, 2, 3], |x| if *x == 2 { panic!("transform failed") } else { *x });
    }
}
