//! Building suspended collections from scratch.
//!
//! This module provides [`Generator`], the collection whose capability
//! witness is always a fresh [`Suspended`](crate::Suspended) traversal, and
//! convenience constructors over it.

mod generator;

pub use generator::{generator, iterate_fn, unfold, Generator};
