//! The generic loop that drives suspended traversals.

use std::ops::ControlFlow;

use crate::step::Step;
use crate::suspended::Suspended;

/// Drive a suspended traversal, threading an accumulator through `folder`.
///
/// The step function is resumed until it completes or `folder` answers
/// `Break`, in which case the traversal is abandoned and the accumulator
/// inside the `Break` is returned. Elements are moved into `folder`.
///
/// ```rust
/// use std::ops::ControlFlow;
/// use enumerable::{drive, Step, Suspended};
///
/// let naturals = Suspended::new(|n: u64| Step::Yielded((n, n + 1)), 0);
/// let first_big = drive(naturals, None, |_, n| {
///     if n * n > 50 { ControlFlow::Break(Some(n)) } else { ControlFlow::Continue(None) }
/// });
/// assert_eq!(first_big, Some(8));
/// ```
pub fn drive<T, S, A, F>(mut suspended: Suspended<'_, T, S>, mut acc: A, mut folder: F) -> A
where
    F: FnMut(A, T) -> ControlFlow<A, A>,
{
    loop {
        match suspended.resume() {
            Step::Yielded((item, rest)) => match folder(acc, item) {
                ControlFlow::Continue(next) => {
                    acc = next;
                    suspended = rest;
                }
                ControlFlow::Break(done) => return done,
            },
            Step::Complete(()) => return acc,
        }
    }
}

/// Drive a suspended traversal to exhaustion, handing each element to `visit`.
pub fn drive_each<T, S, F>(suspended: Suspended<'_, T, S>, mut visit: F)
where
    F: FnMut(T),
{
    drive(suspended, (), |(), item| {
        visit(item);
        ControlFlow::Continue(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn letters() -> Suspended<'static, char, u8> {
        Suspended::new(
            |i: u8| {
                if i < 4 {
                    Step::Yielded(((b'a' + i) as char, i + 1))
                } else {
                    Step::Complete(())
                }
            },
            0,
        )
    }

    #[test]
    fn test_drive_folds_every_element() {
        let word = drive(letters(), String::new(), |mut acc, c| {
            acc.push(c);
            ControlFlow::Continue(acc)
        });
        assert_eq!(word, "abcd");
    }

    #[test]
    fn test_drive_break_stops_pulling() {
        let pulled = Rc::new(RefCell::new(Vec::new()));
        let counting = {
            let pulled = Rc::clone(&pulled);
            Suspended::new(
                move |n: u32| {
                    pulled.borrow_mut().push(n);
                    Step::Yielded((n, n + 1))
                },
                0,
            )
        };

        let sum = drive(counting, 0, |acc, n| {
            if n == 3 {
                ControlFlow::Break(acc)
            } else {
                ControlFlow::Continue(acc + n)
            }
        });

        assert_eq!(sum, 3);
        assert_eq!(&*pulled.borrow(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_drive_empty_returns_initial() {
        let empty = Suspended::new(|(): ()| Step::<(i32, ())>::Complete(()), ());
        assert_eq!(drive(empty, 7, |acc, x| ControlFlow::Continue(acc + x)), 7);
    }

    #[test]
    fn test_drive_each_visits_in_order() {
        let mut seen = Vec::new();
        drive_each(letters(), |c| seen.push(c));
        assert_eq!(seen, vec!['a', 'b', 'c', 'd']);
    }
}
