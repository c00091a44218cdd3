//! Commonly used imports
//!
//! Use `use enumerable::prelude::*;` for the contract and the constructors.
//! Operations stay at the crate root: `drop`, `max` and `min` would shadow
//! their std namesakes under a glob import.

// Core types
pub use crate::{Enumerable, Step, StepFn, Suspended, Witness};

// Constructors
pub use crate::build::{generator, iterate_fn, unfold, Generator};

// Driving
pub use crate::{cursor, drive, drive_each, Cursor, Pull};

pub use crate::{Error, Result, Truthy};
