//! Batch-wise execution over sequences of work
//!
//! `run_in_batches` bounds how many items reach a batch-accepting operation
//! at once, one batch strictly after the other. `try_join_in_batches` bounds
//! how many in-flight futures are awaited at once, one group strictly after
//! the other. Both exist for the same reason: keeping a lid on what an
//! external resource (a rate-limited API, a connection pool) sees in flight.

use crate::split::batch;
use anyhow::Result;
use futures::future::try_join_all;
use std::future::Future;
use tracing::debug;

/// Default batch size for `run_in_batches`
pub const DEFAULT_RUN_BATCH_SIZE: usize = 10;

/// Default group size for `try_join_in_batches`
pub const DEFAULT_JOIN_BATCH_SIZE: usize = 8;

/// Apply a batch-accepting operation to successive slices of `items`
///
/// Batches are formed with [`batch`] semantics: every batch has exactly
/// `batch_size` items except possibly the last. The operation is invoked
/// strictly sequentially; batch N+1 is not started until batch N has
/// returned, so side effects of the operation happen batch by batch, never
/// interleaved. Results are concatenated in input order.
///
/// The operation must return one result per input item, in the same order.
/// That is the caller's contract and is not verified here.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` (via `anyhow`) if `batch_size` is zero.
/// An error from the operation propagates immediately; later batches are not
/// run and no partial results are returned.
pub fn run_in_batches<A, R, F>(items: Vec<A>, batch_size: usize, mut op: F) -> Result<Vec<R>>
where
    F: FnMut(Vec<A>) -> Result<Vec<R>>,
{
    let total = items.len();
    let batches = batch(items, batch_size)?;
    debug!(
        "Running {} items in {} batches of at most {}",
        total,
        batches.len(),
        batch_size
    );

    let mut results = Vec::with_capacity(total);
    for (index, group) in batches.into_iter().enumerate() {
        debug!("Running batch {} ({} items)", index, group.len());
        results.extend(op(group)?);
    }

    Ok(results)
}

/// Await already-started futures in bounded groups, preserving input order
///
/// Futures are grouped with [`batch`] semantics and each group is awaited to
/// completion (`try_join_all`) before the next group is polled at all. The
/// futures themselves were started by the caller; this function only
/// sequences the waiting.
///
/// Fail-fast: the first error in a group fails the whole call with that
/// error. The remaining futures of that group are dropped, not cancelled —
/// a wrapped `tokio::task::JoinHandle` keeps running detached — and later
/// groups are never polled.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` (via `anyhow`) if `batch_size` is zero,
/// or the first error produced by any future in the earliest failing group.
pub async fn try_join_in_batches<Fut, T>(futures: Vec<Fut>, batch_size: usize) -> Result<Vec<T>>
where
    Fut: Future<Output = Result<T>>,
{
    let total = futures.len();
    let groups = batch(futures, batch_size)?;
    debug!(
        "Awaiting {} futures in {} groups of at most {}",
        total,
        groups.len(),
        batch_size
    );

    let mut results = Vec::with_capacity(total);
    for (index, group) in groups.into_iter().enumerate() {
        debug!("Awaiting group {} ({} futures)", index, group.len());
        results.extend(try_join_all(group).await?);
    }

    Ok(results)
}
