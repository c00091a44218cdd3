//! # Enumerable: uniform operations over native and suspended sequences
//!
//! One catalog of higher-order operations (map, filter, reduce, sort, zip,
//! min/max, join, partition, search, slicing) that works the same way across
//! every collection implementing a small capability contract.
//!
//! ## Core Traits
//!
//! - **[`Enumerable`]**: answers [`iterate`](Enumerable::iterate) with a
//!   [`Witness`], either a borrowed slice or a [`Suspended`] traversal
//! - **[`Truthy`]**: truthiness for the predicate-less [`all`] and [`any`]
//!
//! ## Key Features
//!
//! - **Fast path**: operations walk native slices directly
//! - **Suspended traversals**: anything else is driven by a pure step
//!   function, one [`Step`] at a time, through [`drive`]
//! - **Lazy and infinite sources**: short-circuiting operations stop pulling
//!   as soon as the answer is known
//! - **Natural merge sort**: stable, run-detecting, linear on presorted input
//!
//! ## Example
//!
//! ```
//! use enumerable::*;
//!
//! // The same pipeline over a vector and over a lazy generator.
//! let numbers = vec![4, 1, 3, 2];
//! let lazy = unfold(0usize, |i| [4, 1, 3, 2].get(*i).map(|x| (*x, i + 1)));
//!
//! assert_eq!(sort(&numbers), sort(&lazy));
//! assert_eq!(join(&filter(&lazy, |x| x % 2 == 0), ", "), Ok("4, 2".to_string()));
//! assert_eq!(max(&numbers), Ok(4));
//! ```
//!
//! ## Common Functions
//!
//! **Building collections:**
//! - [`generator(factory)`] - Fresh step function and first state per traversal
//! - [`unfold(seed, f)`] - Produce elements until `f` answers `None`
//! - [`iterate_fn(seed, f)`] - Infinite `seed, f(seed), f(f(seed)), ...`
//!
//! **Driving traversals:**
//! - [`drive(suspended, acc, folder)`] - Fold with early exit via `ControlFlow`
//! - [`cursor(collection)`] - Pull owned elements as an `Iterator`
//!
//! [`generator(factory)`]: generator
//! [`unfold(seed, f)`]: unfold
//! [`iterate_fn(seed, f)`]: iterate_fn
//! [`drive(suspended, acc, folder)`]: drive
//! [`cursor(collection)`]: cursor

pub mod build;
mod collections;
mod drive;
mod enumerable;
mod error;
mod iter;
pub mod ops;
pub mod prelude;
mod sort;
mod step;
mod suspended;
mod truthy;

pub use build::{generator, iterate_fn, unfold, Generator};
pub use drive::{drive, drive_each};
pub use enumerable::{Enumerable, Witness};
pub use error::{Error, Result};
pub use iter::{cursor, Cursor, Pull};
pub use ops::*;
pub use sort::{sort, sort_by, sort_by_key};
pub use step::Step;
pub use suspended::{StepFn, Suspended};
pub use truthy::Truthy;
