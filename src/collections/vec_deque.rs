use std::collections::VecDeque;

use crate::enumerable::{Enumerable, Witness};
use crate::step::Step;
use crate::suspended::Suspended;

/// Ring buffers are not contiguous, so they are walked by position.
impl<T: Clone> Enumerable for VecDeque<T> {
    type Item = T;
    type State = usize;

    fn iterate(&self) -> Witness<'_, T, usize> {
        Witness::Suspended(Suspended::new(
            move |index: usize| Step::from_option(self.get(index).map(|x| (x.clone(), index + 1))),
            0,
        ))
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        VecDeque::contains(self, value)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_deque_walks_front_to_back() {
        let mut q = VecDeque::from(vec![2, 3]);
        q.push_front(1);
        assert!(!q.iterate().is_native());
        assert_eq!(q.reduce(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        }), vec![1, 2, 3]);
        assert_eq!(Enumerable::size(&q), 3);
        assert!(Enumerable::contains(&q, &1));
    }
}
