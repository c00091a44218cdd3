use std::ops::Range;

use crate::enumerable::{Enumerable, Witness};
use crate::step::Step;
use crate::suspended::Suspended;

macro_rules! range_enumerable {
    ($($t:ty),*) => {$(
        impl Enumerable for Range<$t> {
            type Item = $t;
            type State = $t;

            fn iterate(&self) -> Witness<'_, $t, $t> {
                let end = self.end;
                Witness::Suspended(Suspended::new(
                    move |n: $t| if n < end { Step::Yielded((n, n + 1)) } else { Step::Complete(()) },
                    self.start,
                ))
            }

            fn contains(&self, value: &$t) -> bool {
                Range::contains(self, value)
            }

            fn size(&self) -> usize {
                let span = (self.end as i128 - self.start as i128).max(0);
                usize::try_from(span).unwrap_or(usize::MAX)
            }
        }
    )*};
}

range_enumerable!(i32, i64, u32, u64, usize);
