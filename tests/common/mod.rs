#![allow(dead_code)]

use either::Either;
use enumerable::{unfold, Generator};

/// The same content held natively or replayed by a generator.
pub type Sample<T> = Either<Vec<T>, Generator<'static, T, usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Native,
    Suspended,
}

impl Form {
    pub fn of<T: Clone + 'static>(self, items: Vec<T>) -> Sample<T> {
        match self {
            Form::Native => Either::Left(items),
            Form::Suspended => Either::Right(replay(items)),
        }
    }
}

/// A generator yielding `items` in order, once per traversal.
pub fn replay<T: Clone + 'static>(items: Vec<T>) -> Generator<'static, T, usize> {
    unfold(0usize, move |i| items.get(*i).map(|x| (x.clone(), i + 1)))
}
