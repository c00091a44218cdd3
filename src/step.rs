/// Result of invoking a step function: either an element together with the
/// state to resume from, or the end of the sequence.
///
/// Step functions return `Step<(T, S)>`; the completion payload defaults to
/// `()` because a finished traversal carries nothing back.
///
/// # Examples
///
/// ```rust
/// use enumerable::Step;
///
/// let next: Step<(i32, u8)> = Step::Yielded((42, 1));
/// let done: Step<(i32, u8)> = Step::Complete(());
///
/// assert_eq!(next.map_yielded(|(x, s)| (x * 2, s)), Step::Yielded((84, 1)));
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// An element was produced; the traversal can be resumed.
    Yielded(Y),
    /// The traversal is exhausted.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// ```rust
    /// use enumerable::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding the completion value.
    ///
    /// ```rust
    /// use enumerable::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32> = Step::Complete(());
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Maps a `Step<Y, D>` to `Step<Y2, D>` by applying a function to the yielded value.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }
}

impl<T, S> Step<(T, S)> {
    /// Builds a step from an `Option` of `(element, next_state)`.
    ///
    /// ```rust
    /// use enumerable::Step;
    ///
    /// assert_eq!(Step::from_option(Some((1, 2))), Step::Yielded((1, 2)));
    /// assert_eq!(Step::<(i32, i32)>::from_option(None), Step::Complete(()));
    /// ```
    #[inline]
    pub fn from_option(next: Option<(T, S)>) -> Self {
        match next {
            Some(pair) => Step::Yielded(pair),
            None => Step::Complete(()),
        }
    }

    /// Maps the resumption state, leaving the element untouched.
    #[inline]
    pub fn map_state<S2, F>(self, f: F) -> Step<(T, S2)>
    where
        F: FnOnce(S) -> S2,
    {
        self.map_yielded(|(item, state)| (item, f(state)))
    }
}
