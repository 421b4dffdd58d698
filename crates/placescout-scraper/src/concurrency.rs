//! Bounded, order-preserving concurrent map.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Runs `f` over `items` with at most `limit` futures in flight, returning
/// results in input order.
///
/// Futures are started in input order; a new one starts as soon as any
/// in-flight one finishes. Completion order is irrelevant: `out[i]` is always
/// the output of `f(items[i])`. Every future runs to completion, so one slow
/// item delays the tail of the batch but never cancels its siblings.
///
/// A `limit` of `0` is treated as `1`.
pub async fn map_bounded<I, T, F, Fut, R>(items: I, limit: usize, f: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}
