//! Maximum and minimum.
//!
//! The running extremum is only replaced by a strictly greater (or strictly
//! lesser) value, so among equal candidates the first one encountered wins.

use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};
use crate::error::{Error, Result};

/// The greatest element.
///
/// ```rust
/// use enumerable::{max, Error};
///
/// assert_eq!(max(&vec![1, 3, 2]), Ok(3));
/// assert_eq!(max(&Vec::<i32>::new()), Err(Error::EmptyCollection));
/// ```
pub fn max<C>(collection: &C) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: PartialOrd + Clone,
{
    extremum(collection, |candidate, best| candidate > best)
}

/// The least element.
pub fn min<C>(collection: &C) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: PartialOrd + Clone,
{
    extremum(collection, |candidate, best| candidate < best)
}

/// The element whose projection is greatest. `key` runs once per element.
///
/// ```rust
/// use enumerable::max_by_key;
///
/// let words = vec!["kiwi", "banana", "cherry"];
/// assert_eq!(max_by_key(&words, |w| w.len()), Ok("banana"));
/// ```
pub fn max_by_key<C, F, K>(collection: &C, key: F) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: PartialOrd,
{
    extremum_by_key(collection, key, |candidate, best| candidate > best)
}

/// The element whose projection is least. `key` runs once per element.
pub fn min_by_key<C, F, K>(collection: &C, key: F) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: PartialOrd,
{
    extremum_by_key(collection, key, |candidate, best| candidate < best)
}

fn extremum<C, B>(collection: &C, mut beats: B) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    B: FnMut(&C::Item, &C::Item) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => {
            let (first, rest) = items.split_first().ok_or(Error::EmptyCollection)?;
            let best = rest
                .iter()
                .fold(first, |best, x| if beats(x, best) { x } else { best });
            Ok(best.clone())
        }
        Witness::Suspended(iter) => drive(iter, None, |best, x| {
            ControlFlow::Continue(match best {
                Some(best) if !beats(&x, &best) => Some(best),
                _ => Some(x),
            })
        })
        .ok_or(Error::EmptyCollection),
    }
}

fn extremum_by_key<C, F, K, B>(collection: &C, mut key: F, mut beats: B) -> Result<C::Item>
where
    C: Enumerable + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    B: FnMut(&K, &K) -> bool,
{
    match collection.iterate() {
        Witness::Native(items) => {
            let (first, rest) = items.split_first().ok_or(Error::EmptyCollection)?;
            let (_, best) = rest.iter().fold((key(first), first), |(best_key, best), x| {
                let k = key(x);
                if beats(&k, &best_key) {
                    (k, x)
                } else {
                    (best_key, best)
                }
            });
            Ok(best.clone())
        }
        Witness::Suspended(iter) => drive(iter, None, |best, x| {
            let k = key(&x);
            ControlFlow::Continue(match best {
                Some((best_key, best)) if !beats(&k, &best_key) => Some((best_key, best)),
                _ => Some((k, x)),
            })
        })
        .map(|(_, best)| best)
        .ok_or(Error::EmptyCollection),
    }
}
