use std::fmt::{Display, Write};
use std::ops::ControlFlow;

use crate::drive::drive;
use crate::enumerable::{Enumerable, Witness};
use crate::error::Result;

/// Render every element and interleave `separator`.
///
/// Fails with [`Error::Render`](crate::Error::Render) as soon as an element
/// refuses to render; nothing rendered so far is returned.
///
/// ```rust
/// use enumerable::join;
///
/// assert_eq!(join(&vec![1, 2, 3], " = ").unwrap(), "1 = 2 = 3");
/// assert_eq!(join(&Vec::<u8>::new(), ", ").unwrap(), "");
/// ```
pub fn join<C>(collection: &C, separator: &str) -> Result<String>
where
    C: Enumerable + ?Sized,
    C::Item: Display,
{
    render(collection, separator, |out, x| write!(out, "{x}"))
}

/// Render `f` of every element and interleave `separator`.
///
/// ```rust
/// use enumerable::map_join;
///
/// assert_eq!(map_join(&(1u32..4), "-", |x| x * 2).unwrap(), "2-4-6");
/// ```
pub fn map_join<C, F, D>(collection: &C, separator: &str, mut f: F) -> Result<String>
where
    C: Enumerable + ?Sized,
    F: FnMut(&C::Item) -> D,
    D: Display,
{
    render(collection, separator, |out, x| write!(out, "{}", f(x)))
}

fn render<C, W>(collection: &C, separator: &str, mut write_one: W) -> Result<String>
where
    C: Enumerable + ?Sized,
    W: FnMut(&mut String, &C::Item) -> std::fmt::Result,
{
    match collection.iterate() {
        Witness::Native(items) => {
            let mut out = String::new();
            for (i, x) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                write_one(&mut out, x)?;
            }
            Ok(out)
        }
        Witness::Suspended(iter) => {
            let mut first = true;
            drive(iter, Ok(String::new()), |out: Result<String>, x| {
                let mut out = match out {
                    Ok(out) => out,
                    Err(e) => return ControlFlow::Break(Err(e)),
                };
                if !first {
                    out.push_str(separator);
                }
                first = false;
                match write_one(&mut out, &x) {
                    Ok(()) => ControlFlow::Continue(Ok(out)),
                    Err(e) => ControlFlow::Break(Err(e.into())),
                }
            })
        }
    }
}
