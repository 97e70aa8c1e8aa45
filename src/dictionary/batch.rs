//! Batch strategies for bulk lookups.
//!
//! Two policies coexist on purpose:
//! - best-effort aggregate: a failing item is logged and contributes nothing
//! - all-or-nothing: the first failing item (in input order) fails the batch
//!
//! Both keep input order regardless of which fetch finishes first.

use std::fmt::Debug;
use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::warn;

use crate::error::Result;

/// Resolve every item, flattening successes and skipping failures.
pub async fn best_effort_aggregate<T, U, F, Fut>(
    items: Vec<T>,
    concurrency: usize,
    resolve: F,
) -> Vec<U>
where
    T: Debug + Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<Vec<U>>>,
{
    let outcomes: Vec<(T, Result<Vec<U>>)> = stream::iter(items)
        .map(|item| {
            let pending = resolve(item.clone());
            async move { (item, pending.await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut results = Vec::new();
    for (item, outcome) in outcomes {
        match outcome {
            Ok(found) => results.extend(found),
            Err(e) => warn!(item = ?item, error = %e, "Skipping failed batch item"),
        }
    }
    results
}

/// Resolve every item, or fail with the first error in input order.
pub async fn all_or_nothing_batch<T, U, F, Fut>(
    items: Vec<T>,
    concurrency: usize,
    resolve: F,
) -> Result<Vec<U>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<U>>,
{
    stream::iter(items)
        .map(resolve)
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}
