use either::Either;

use crate::enumerable::{Enumerable, Witness};

/// Either side of an `Either`, as long as both enumerate the same element type.
///
/// The suspended state is tagged with the side it came from.
impl<L, R> Enumerable for Either<L, R>
where
    L: Enumerable,
    R: Enumerable<Item = L::Item>,
{
    type Item = L::Item;
    type State = Either<L::State, R::State>;

    fn iterate(&self) -> Witness<'_, Self::Item, Self::State> {
        match self {
            Either::Left(l) => match l.iterate() {
                Witness::Native(items) => Witness::Native(items),
                Witness::Suspended(iter) => {
                    Witness::Suspended(iter.map_state(Either::Left, Either::left))
                }
            },
            Either::Right(r) => match r.iterate() {
                Witness::Native(items) => Witness::Native(items),
                Witness::Suspended(iter) => {
                    Witness::Suspended(iter.map_state(Either::Right, Either::right))
                }
            },
        }
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self {
            Either::Left(l) => l.contains(value),
            Either::Right(r) => r.contains(value),
        }
    }

    fn size(&self) -> usize {
        match self {
            Either::Left(l) => l.size(),
            Either::Right(r) => r.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn pick(native: bool) -> Either<Vec<u8>, VecDeque<u8>> {
        if native {
            Either::Left(vec![1, 2, 3])
        } else {
            Either::Right(VecDeque::from(vec![1, 2, 3]))
        }
    }

    #[test]
    fn test_either_forwards_witness_form() {
        assert!(pick(true).iterate().is_native());
        assert!(!pick(false).iterate().is_native());
    }

    #[test]
    fn test_either_sides_agree() {
        for native in [true, false] {
            let c = pick(native);
            assert_eq!(c.reduce(0u32, |acc, x| acc + u32::from(*x)), 6);
            assert_eq!(Enumerable::size(&c), 3);
            assert!(Enumerable::contains(&c, &2));
        }
    }
}
