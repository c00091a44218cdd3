//! Run detection.
//!
//! [`RunBuilder`] consumes elements one at a time and cuts them into
//! monotonic runs. The direction of every run is fixed by the first two
//! elements of the input: `ascending = before(first, second)`. An ascending
//! sort stores runs front to back; otherwise runs are stored back to front
//! and only strictly descending stretches are accepted, which keeps equal
//! elements in input order once the run is read backwards.
//!
//! A run is tracked by its two newest endpoints (`top` and `below`) plus the
//! settled elements underneath (`rest`). An element that fits neither
//! endpoint is parked in a one-slot pivot: if the next element still extends
//! the run the pivot keeps waiting, otherwise the run is closed and the pivot
//! seeds the next one.

use log::trace;

use super::merge::Orientation;

enum Phase<T> {
    Empty,
    Single(T),
    Split {
        top: T,
        below: T,
        rest: Vec<T>,
    },
    Pivot {
        top: T,
        below: T,
        rest: Vec<T>,
        pivot: T,
    },
    Poisoned,
}

impl<T> Phase<T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, Phase::Poisoned)
    }
}

/// Closed runs and how they are stored.
pub(crate) struct Runs<T> {
    pub(crate) runs: Vec<Vec<T>>,
    pub(crate) orientation: Orientation,
}

/// State machine cutting a stream of elements into sorted runs.
pub(crate) struct RunBuilder<T> {
    phase: Phase<T>,
    runs: Vec<Vec<T>>,
    ascending: bool,
}

impl<T> RunBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            phase: Phase::Empty,
            runs: Vec::new(),
            ascending: true,
        }
    }

    /// Feed the next element.
    pub(crate) fn push<F>(&mut self, item: T, before: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ascending = self.ascending;
        let mut follows = |a: &T, b: &T| before(a, b) == ascending;

        self.phase = match self.phase.take() {
            Phase::Empty => Phase::Single(item),
            Phase::Single(first) => {
                self.ascending = before(&first, &item);
                Phase::Split {
                    top: item,
                    below: first,
                    rest: Vec::new(),
                }
            }
            Phase::Split {
                top,
                below,
                mut rest,
            } => {
                if follows(&top, &item) {
                    rest.push(below);
                    Phase::Split {
                        top: item,
                        below: top,
                        rest,
                    }
                } else if follows(&below, &item) {
                    rest.push(below);
                    Phase::Split {
                        top,
                        below: item,
                        rest,
                    }
                } else if rest.is_empty() {
                    rest.push(item);
                    Phase::Split { top, below, rest }
                } else {
                    Phase::Pivot {
                        top,
                        below,
                        rest,
                        pivot: item,
                    }
                }
            }
            Phase::Pivot {
                top,
                below,
                mut rest,
                pivot,
            } => {
                if follows(&top, &item) {
                    rest.push(below);
                    Phase::Pivot {
                        top: item,
                        below: top,
                        rest,
                        pivot,
                    }
                } else if follows(&below, &item) {
                    rest.push(below);
                    Phase::Pivot {
                        top,
                        below: item,
                        rest,
                        pivot,
                    }
                } else {
                    let next = if follows(&pivot, &item) {
                        Phase::Split {
                            top: item,
                            below: pivot,
                            rest: Vec::new(),
                        }
                    } else {
                        Phase::Split {
                            top: pivot,
                            below: item,
                            rest: Vec::new(),
                        }
                    };
                    self.close(rest, below, top);
                    next
                }
            }
            Phase::Poisoned => Phase::Poisoned,
        };
    }

    fn close(&mut self, mut rest: Vec<T>, below: T, top: T) {
        rest.push(below);
        rest.push(top);
        trace!("closed run #{} of {} elements", self.runs.len(), rest.len());
        self.runs.push(rest);
    }

    /// Close whatever is in flight and hand back the runs in input order.
    pub(crate) fn finish(mut self) -> Runs<T> {
        match self.phase.take() {
            Phase::Empty | Phase::Poisoned => {}
            Phase::Single(only) => self.runs.push(vec![only]),
            Phase::Split { top, below, rest } => self.close(rest, below, top),
            Phase::Pivot {
                top,
                below,
                rest,
                pivot,
            } => {
                self.close(rest, below, top);
                self.runs.push(vec![pivot]);
            }
        }
        let orientation = if self.ascending {
            Orientation::Forward
        } else {
            Orientation::Backward
        };
        Runs {
            runs: self.runs,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cut(input: &[i32]) -> Runs<i32> {
        let mut before = |a: &i32, b: &i32| a <= b;
        let mut builder = RunBuilder::new();
        for &x in input {
            builder.push(x, &mut before);
        }
        builder.finish()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(cut(&[]).runs.is_empty());
        assert_eq!(cut(&[7]).runs, vec![vec![7]]);
    }

    #[test]
    fn test_ascending_input_is_one_forward_run() {
        let runs = cut(&[1, 2, 2, 3, 9]);
        assert_eq!(runs.runs, vec![vec![1, 2, 2, 3, 9]]);
        assert_eq!(runs.orientation, Orientation::Forward);
    }

    #[test]
    fn test_descending_input_is_one_backward_run() {
        let runs = cut(&[9, 5, 3, 1]);
        assert_eq!(runs.runs, vec![vec![9, 5, 3, 1]]);
        assert_eq!(runs.orientation, Orientation::Backward);
    }

    #[test]
    fn test_element_slides_between_endpoints() {
        // 3 lands between 2 and 4 without closing the run.
        assert_eq!(cut(&[1, 2, 4, 3]).runs, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_element_goes_under_a_two_element_run() {
        assert_eq!(cut(&[5, 6, 1]).runs, vec![vec![1, 5, 6]]);
    }

    #[test]
    fn test_pivot_waits_while_run_grows() {
        // 0 is parked; 8 and 9 still extend the run; 0 ends up alone.
        assert_eq!(cut(&[1, 2, 3, 0, 8, 9]).runs, vec![vec![1, 2, 3, 8, 9], vec![0]]);
    }

    #[test]
    fn test_pivot_seeds_next_run() {
        // 1 is parked, 0 breaks the run and pairs with the pivot.
        assert_eq!(cut(&[4, 5, 6, 1, 0, 2]).runs, vec![vec![4, 5, 6], vec![0, 1, 2]]);
    }
}
