//! Truthiness for the predicate-less quantifiers.

/// Values that can stand in for a boolean.
///
/// [`all`](crate::all) and [`any`](crate::any) test elements with this when
/// no predicate is given.
///
/// ```rust
/// use enumerable::Truthy;
///
/// assert!(true.is_truthy());
/// assert!(Some(0).is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(!Err::<(), _>("nope").is_truthy());
/// ```
pub trait Truthy {
    /// Whether this value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Truthy for Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.is_ok()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
