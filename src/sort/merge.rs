//! Bottom-up merging of runs.

use log::{debug, trace};

/// How the elements of a stored run relate to the requested order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    /// Stored front to back.
    Forward,
    /// Stored back to front.
    Backward,
}

impl Orientation {
    fn flipped(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Backward,
            Orientation::Backward => Orientation::Forward,
        }
    }
}

/// Merge adjacent runs pairwise until one is left.
///
/// Every pass pops elements off the tails of both runs, so its output comes
/// out in the opposite orientation; an odd trailing run is reversed to match.
/// The final run is flipped to front-to-back if needed.
pub(crate) fn merge_runs<T, F>(mut runs: Vec<Vec<T>>, mut orientation: Orientation, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pass = 0usize;
    while runs.len() > 1 {
        pass += 1;
        trace!("merge pass {pass}: {} runs stored {orientation:?}", runs.len());

        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge_pair(left, right, orientation, before)),
                None => {
                    let mut odd = left;
                    odd.reverse();
                    merged.push(odd);
                }
            }
        }
        runs = merged;
        orientation = orientation.flipped();
    }

    debug!("merged in {pass} passes");
    let mut sorted = runs.pop().unwrap_or_default();
    if orientation == Orientation::Backward {
        sorted.reverse();
    }
    sorted
}

/// Merge two neighbouring runs, `left` coming first in the input.
fn merge_pair<T, F>(mut left: Vec<T>, mut right: Vec<T>, orientation: Orientation, before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    while let (Some(l), Some(r)) = (left.last(), right.last()) {
        // Forward tails hold the largest elements, backward tails the smallest.
        let from_left = match orientation {
            Orientation::Forward => !before(l, r),
            Orientation::Backward => before(l, r),
        };
        out.extend(if from_left { left.pop() } else { right.pop() });
    }
    out.extend(left.into_iter().rev());
    out.extend(right.into_iter().rev());
    out
}
