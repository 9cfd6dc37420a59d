//! Randomized quickselect implementation.
//!
//! Quickselect (Hoare's FIND) locates the k-th smallest element of a slice
//! by repeatedly partitioning a shrinking sub-range around a uniformly
//! random pivot, recursing only into the side that contains rank `k`.
//! The random pivot bounds the expected cost to O(n) comparisons and
//! defeats adversarial input orderings; the worst case remains O(n^2).
//!
//! The partition scheme is Lomuto's: a single forward scan that grows a
//! "store" region of elements strictly less than the pivot, then drops the
//! pivot just past it.

use rand::Rng;

use crate::select::{check_rank, Result};

/// Returns the k-th smallest element of `arr` (0-based rank) without
/// modifying it.
///
/// The input is duplicated into private storage first; expected O(n) time
/// plus one O(n) allocation.
///
/// # Examples
///
/// ```
/// use kselect::select::quickselect;
///
/// let data = [5, 2, 9, 1, 7, 3];
/// assert_eq!(quickselect(&data, 2).unwrap(), 3);
/// assert_eq!(data, [5, 2, 9, 1, 7, 3]);
/// ```
///
/// # Errors
///
/// Returns [`Error::RankOutOfBounds`](crate::Error::RankOutOfBounds) if
/// `k >= arr.len()`.
pub fn quickselect<T: Ord + Clone>(arr: &[T], k: usize) -> Result<T> {
    check_rank(arr, k)?;
    let mut scratch = arr.to_vec();
    quickselect_in_place(&mut scratch, k)
}

/// Returns the k-th smallest element of `arr` (0-based rank), rearranging
/// `arr` in place.
///
/// After the call, `arr[k]` holds the k-th smallest value, every element
/// before index `k` is `<=` it and every element after is `>=` it.
///
/// # Errors
///
/// Returns [`Error::RankOutOfBounds`](crate::Error::RankOutOfBounds) if
/// `k >= arr.len()`.
pub fn quickselect_in_place<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    quickselect_in_place_with_rng(arr, k, &mut rand::thread_rng())
}

/// Like [`quickselect_in_place`], but drawing pivot indices from a
/// caller-supplied random source.
///
/// Seeding is entirely the caller's concern; pass a seeded generator for
/// deterministic pivot sequences.
pub fn quickselect_in_place_with_rng<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng,
{
    check_rank(arr, k)?;
    let mut left = 0;
    let mut right = arr.len() - 1;
    // Tail recursion expressed as a loop; rank k stays inside [left, right].
    loop {
        if left == right {
            return Ok(arr[left].clone());
        }
        let pivot_index = rng.gen_range(left..=right);
        let pivot_index = partition(arr, left, right, pivot_index);
        if k == pivot_index {
            return Ok(arr[k].clone());
        } else if k < pivot_index {
            right = pivot_index - 1;
        } else {
            left = pivot_index + 1;
        }
    }
}

/// Lomuto partition of `arr[left..=right]` around the value at
/// `pivot_index`. Returns the pivot's final resting index.
fn partition<T: Ord + Clone>(arr: &mut [T], left: usize, right: usize, pivot_index: usize) -> usize {
    arr.swap(pivot_index, right);
    let pivot = arr[right].clone();
    let mut store = left;
    for i in left..right {
        if arr[i] < pivot {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(store, right);
    store
}
