use std::convert::Infallible;

use crate::enumerable::{Enumerable, Witness};

impl<T> Enumerable for [T] {
    type Item = T;
    type State = Infallible;

    fn iterate(&self) -> Witness<'_, T, Infallible> {
        Witness::Native(self)
    }
}

impl<T> Enumerable for Vec<T> {
    type Item = T;
    type State = Infallible;

    fn iterate(&self) -> Witness<'_, T, Infallible> {
        Witness::Native(self.as_slice())
    }
}

impl<T, const N: usize> Enumerable for [T; N] {
    type Item = T;
    type State = Infallible;

    fn iterate(&self) -> Witness<'_, T, Infallible> {
        Witness::Native(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_sequences_are_native() {
        let v = vec![1, 2, 3];
        assert!(v.iterate().is_native());
        assert!(v.as_slice().iterate().is_native());
        assert!([1, 2, 3].iterate().is_native());
    }

    #[test]
    fn test_provided_methods_over_native() {
        let v = vec![1, 2, 3];
        assert_eq!(v.reduce(0, |acc, x| acc + x), 6);
        assert_eq!(v.size(), 3);
        assert!(v.contains(&2));
        assert!(!v.contains(&4));
    }

    #[test]
    fn test_reference_forwards() {
        let v = vec!["a", "b"];
        let r = &v;
        assert_eq!(Enumerable::size(&r), 2);
        assert!(Enumerable::contains(&r, &"b"));
    }
}
