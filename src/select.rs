//! Selection algorithm implementations.
//!
//! This module provides implementations of algorithms that locate the k-th
//! smallest element of an unsorted slice in linear expected time, without
//! fully sorting it:
//! - Randomized quickselect (random pivot, Lomuto partition)
//! - Floyd-Rivest SELECT (statistical sub-sampling, Hoare-style partition)
//!
//! # Selection Algorithms
//!
//! Both algorithms share the same contract: the slice is partially
//! rearranged so that the element at index `k` is the one that would occupy
//! that index in sorted order, everything before it compares less than or
//! equal, and everything after it compares greater than or equal. Each
//! algorithm is offered as a copy-producing variant (the caller's slice is
//! left untouched) and an in-place variant (the caller's slice is
//! rearranged).
//!
//! # Examples
//!
//! ```rust
//! use kselect::select::{floyd_rivest, quickselect};
//!
//! let data = [5, 2, 9, 1, 7, 3];
//! assert_eq!(quickselect(&data, 2).unwrap(), 3);
//! assert_eq!(floyd_rivest(&data, 2).unwrap(), 3);
//! ```

use crate::error::Error;

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod floyd_rivest;
pub mod quickselect;

pub use floyd_rivest::{floyd_rivest, floyd_rivest_in_place};
pub use quickselect::{quickselect, quickselect_in_place, quickselect_in_place_with_rng};

pub(crate) fn check_rank<T>(arr: &[T], k: usize) -> Result<()> {
    if k >= arr.len() {
        return Err(Error::RankOutOfBounds {
            rank: k,
            len: arr.len(),
        });
    }
    Ok(())
}
