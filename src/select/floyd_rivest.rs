//! Floyd-Rivest selection implementation.
//!
//! The Floyd-Rivest algorithm (SELECT, CACM Algorithm 489) shares
//! quickselect's contract but cuts the expected number of comparisons
//! roughly in half by estimating a high-quality pivot before each
//! partition pass. On ranges wider than a fixed threshold it computes,
//! from order-statistics bounds over a virtual n^(2/3)-sized sample, a
//! narrow sub-range that almost certainly still contains rank `k`, and
//! recursively pre-partitions that sub-range first. The real partition is
//! a Hoare-style dual-pointer scan that leaves the pivot in its final
//! slot.
//!
//! The sampling step is a performance optimization only; the partition
//! pass re-establishes the bracketing invariant regardless of how good
//! the estimate was.

use log::trace;

use crate::select::{check_rank, Result};

/// Ranges wider than this are narrowed by the sampling step before the
/// partition pass. 600 is the cutoff from Floyd and Rivest's published
/// algorithm.
const SAMPLING_THRESHOLD: usize = 600;

/// Returns the k-th smallest element of `arr` (0-based rank) without
/// modifying it.
///
/// The input is duplicated into private storage first; expected O(n) time
/// plus one O(n) allocation.
///
/// # Examples
///
/// ```
/// use kselect::select::floyd_rivest;
///
/// let data = [5, 2, 9, 1, 7, 3];
/// assert_eq!(floyd_rivest(&data, 2).unwrap(), 3);
/// assert_eq!(data, [5, 2, 9, 1, 7, 3]);
/// ```
///
/// # Errors
///
/// Returns [`Error::RankOutOfBounds`](crate::Error::RankOutOfBounds) if
/// `k >= arr.len()`.
pub fn floyd_rivest<T: Ord + Clone>(arr: &[T], k: usize) -> Result<T> {
    check_rank(arr, k)?;
    let mut scratch = arr.to_vec();
    floyd_rivest_in_place(&mut scratch, k)
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
pub fn floyd_rivest_in_place<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    check_rank(arr, k)?;
    select(arr, k, 0, arr.len() - 1);
    Ok(arr[k].clone())
}

/// Core shrink loop over the inclusive range `[left, right]`.
///
/// Invariant on entry and after every pass: `left <= k <= right` and the
/// true rank-k element lies inside the range.
fn select<T: Ord + Clone>(arr: &mut [T], k: usize, mut left: usize, mut right: usize) {
    while right > left {
        if right - left > SAMPLING_THRESHOLD {
            let (sub_left, sub_right) = sample_bounds(k, left, right);
            trace!(
                "sampling narrowed [{}, {}] to [{}, {}] for rank {}",
                left,
                right,
                sub_left,
                sub_right,
                k
            );
            // Pre-partition the estimated sub-range so arr[k] below is a
            // near-optimal pivot. Always a strictly smaller range.
            select(arr, k, sub_left, sub_right);
        }

        // Hoare-style partition around t = arr[k]. Parking t at `left`
        // (and, if arr[right] > t, moving that element there instead)
        // keeps both inward scans inside the range without explicit
        // bounds checks.
        let t = arr[k].clone();
        let mut i = left;
        let mut j = right;
        arr.swap(left, k);
        if arr[right] > t {
            arr.swap(right, left);
        }
        while i < j {
            arr.swap(i, j);
            i += 1;
            j -= 1;
            while arr[i] < t {
                i += 1;
            }
            while arr[j] > t {
                j -= 1;
            }
        }

        // Put the pivot into its final slot.
        if arr[left] == t {
            arr.swap(left, j);
        } else {
            j += 1;
            arr.swap(j, right);
        }

        // Shrink toward k. j == 0 forces k == 0, so the saturation only
        // short-circuits the final loop exit.
        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j.saturating_sub(1);
        }
    }
}

/// Closed-form estimate of a sub-range of `[left, right]` that contains
/// rank `k` with high probability, from the Floyd-Rivest order-statistics
/// bound over a virtual sample of about n^(2/3) elements.
///
/// Float results are truncated toward zero and clamped into the current
/// range, so the returned bounds are always a valid bracket of `k`.
fn sample_bounds(k: usize, left: usize, right: usize) -> (usize, usize) {
    let n = (right - left + 1) as f64;
    let i = (k - left + 1) as f64;
    let z = n.ln();
    let s = 0.5 * (2.0 * z / 3.0).exp();
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * if i < n / 2.0 { -1.0 } else { 1.0 };
    let kf = k as f64;
    let lo = (kf - i * s / n + sd).floor();
    let hi = (kf + (n - i) * s / n + sd).floor();
    let sub_left = if lo > left as f64 { lo as usize } else { left };
    let sub_right = if hi < right as f64 { hi as usize } else { right };
    (sub_left, sub_right)
}
