//! Pure functions for splitting sequences into groups
//!
//! `partition` divides work into a fixed number of near-equal groups, which
//! is the right shape when fanning out to a known worker count. `batch`
//! divides work into groups of a bounded size, which is the right shape when
//! an external resource caps how many items can go in one call.

use crate::error::{Error, Result};

/// Default group count for `partition`
pub const DEFAULT_GROUP_COUNT: usize = 8;

/// Default maximum group size for `batch`
pub const DEFAULT_BATCH_SIZE: usize = 8;

/// Split items into exactly `groups` groups of near-equal size
///
/// Group sizes differ by at most one, with the larger groups first: the
/// remainder of `items.len() / groups` is spread one element at a time over
/// the earliest groups. When there are fewer items than groups, the trailing
/// groups are empty. Concatenating the returned groups in order reproduces
/// the input exactly.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `groups` is zero.
///
/// # Examples
///
/// ```
/// use kitbag::split::partition;
///
/// let groups = partition(vec![1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
pub fn partition<T>(items: Vec<T>, groups: usize) -> Result<Vec<Vec<T>>> {
    if groups == 0 {
        return Err(Error::invalid_argument("group count must be at least 1"));
    }

    let base_size = items.len() / groups;
    let remainder = items.len() % groups;

    let mut result = Vec::with_capacity(groups);
    let mut remaining = items.into_iter();
    for index in 0..groups {
        let size = base_size + usize::from(index < remainder);
        result.push(remaining.by_ref().take(size).collect());
    }

    Ok(result)
}

/// Split items into groups of at most `size` elements
///
/// Every group holds exactly `size` elements except possibly the last, which
/// holds the remainder. Empty input yields no groups at all. Concatenating
/// the returned groups in order reproduces the input exactly.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `size` is zero.
///
/// # Examples
///
/// ```
/// use kitbag::split::batch;
///
/// let groups = batch(vec![1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn batch<T>(items: Vec<T>, size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_argument("batch size must be at least 1"));
    }

    let mut result = Vec::with_capacity(items.len().div_ceil(size));
    let mut remaining = items.into_iter().peekable();
    while remaining.peek().is_some() {
        result.push(remaining.by_ref().take(size).collect());
    }

    Ok(result)
}
