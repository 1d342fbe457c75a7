//! Bounded parallel mapper.
//!
//! Applies an async operation to every element of a sequence with a capped
//! concurrency degree. Used to fetch per-secret values after listing vault
//! metadata without hammering the upstream API.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::trace;

use crate::error::Error;

/// One failed operation, identified by the item's position in the input.
#[derive(Debug)]
pub struct ItemFailure {
    pub index: usize,
    pub error: Error,
}

/// Apply `op` to every item with at most `max_concurrency` operations in
/// flight at once.
///
/// A `max_concurrency` of zero means one worker per available CPU. Workers
/// drain a shared queue and yield to the scheduler before each operation, so
/// an operation that happens to complete synchronously cannot monopolize a
/// thread. After the first failure no new items are claimed; operations
/// already in flight finish (or fail) on their own terms, and every failure
/// encountered is reported. Cancellation and timeouts belong to `op` itself.
///
/// Successful results are collected **unordered**; callers that need an
/// ordering must sort the output themselves.
///
/// # Errors
///
/// Returns the list of failures, each carrying the input index of the item
/// that failed, so the caller can report exactly which items are missing.
pub async fn map_parallel<T, R, F, Fut>(
    items: Vec<T>,
    max_concurrency: usize,
    op: F,
) -> std::result::Result<Vec<R>, Vec<ItemFailure>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = crate::error::Result<R>>,
{
    let total = items.len();
    let workers = normalize_concurrency(max_concurrency).min(total.max(1));
    trace!(total, workers, "mapping items in parallel");

    let queue: Mutex<VecDeque<(usize, T)>> = Mutex::new(items.into_iter().enumerate().collect());
    let results: Mutex<Vec<R>> = Mutex::new(Vec::with_capacity(total));
    let failures: Mutex<Vec<ItemFailure>> = Mutex::new(Vec::new());
    let stop = AtomicBool::new(false);

    futures::future::join_all((0..workers).map(|worker| {
        let (queue, results, failures, stop, op) = (&queue, &results, &failures, &stop, &op);
        async move {
            loop {
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                let next = queue.lock().expect("mapper queue poisoned").pop_front();
                let Some((index, item)) = next else {
                    break;
                };

                // Give other workers a chance even when op completes synchronously.
                tokio::task::yield_now().await;

                match op(item).await {
                    Ok(result) => results.lock().expect("mapper results poisoned").push(result),
                    Err(error) => {
                        trace!(worker, index, %error, "item operation failed");
                        failures
                            .lock()
                            .expect("mapper failures poisoned")
                            .push(ItemFailure { index, error });
                        stop.store(true, Ordering::Relaxed);
                    }
                }
            }
        }
    }))
    .await;

    let failures = failures.into_inner().expect("mapper failures poisoned");
    if failures.is_empty() {
        Ok(results.into_inner().expect("mapper results poisoned"))
    } else {
        Err(failures)
    }
}

/// Zero (or anything pathological) becomes the host parallelism hint.
fn normalize_concurrency(max_concurrency: usize) -> usize {
    if max_concurrency == 0 {
        std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1)
    } else {
        max_concurrency
    }
}
