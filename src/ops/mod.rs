//! The operation catalog.
//!
//! Every operation matches once on [`Enumerable::iterate`](crate::Enumerable::iterate):
//! the native arm works directly on the borrowed slice, the suspended arm
//! drives the step function through [`drive`](crate::drive). Both arms must
//! agree on order and result for logically equal content.
//!
//! Callbacks receive elements by reference. Operations that hand elements
//! back require `Clone`: the native arm clones out of the slice while the
//! suspended arm moves the elements it was given.

mod access;
mod extrema;
mod fold;
mod membership;
mod pairing;
mod quantifier;
mod render;
mod search;
mod slicing;
mod structural;
mod traversal;

pub use access::{at, fetch, fetch_strict};
pub use extrema::{max, max_by_key, min, min_by_key};
pub use fold::{map_reduce, reduce};
pub use membership::{contains, count_by, is_empty, size};
pub use pairing::zip;
pub use quantifier::{all, all_by, any, any_by};
pub use render::{join, map_join};
pub use search::{find, find_index, find_value};
pub use slicing::{drop, drop_while, split, split_while, take, take_while};
pub use structural::{partition, reverse, to_vec, uniq, uniq_by};
pub use traversal::{each, each_with_index, filter, filter_map, map, map_with_index, reject};
