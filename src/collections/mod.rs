//! Capability implementations for standard collection types.
//!
//! Contiguous sequences answer with the native witness; everything else hands
//! out a suspended traversal over some cursor state.

mod native;
mod range;
mod sum;
mod vec_deque;
