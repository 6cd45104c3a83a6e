//! Sequential chunk executor.

use crate::Result;
use std::future::Future;
use std::time::Instant;
use tracing::debug;

/// Folds the response of a later chunk into the running aggregate.
pub trait Merge {
    fn merge(&mut self, next: Self);
}

/// Number of chunks `len` items split into. `chunk_size` must be positive.
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    (len + chunk_size - 1) / chunk_size
}

/// Runs `send` once per contiguous chunk of `items`, strictly in order, and
/// merges the results.
///
/// `send` receives the chunk index and the chunk. The first error stops the
/// loop and is returned unchanged.
pub async fn run_chunked<'a, T, R, F, Fut>(items: &'a [T], chunk_size: usize, mut send: F) -> Result<R>
where
    R: Merge + Default,
    F: FnMut(usize, &'a [T]) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let chunk_size = chunk_size.max(1);
    let total = chunk_count(items.len(), chunk_size);
    let start = Instant::now();
    let mut aggregate: Option<R> = None;

    for (idx, chunk) in items.chunks(chunk_size).enumerate() {
        debug!(
            chunk = idx + 1,
            chunks = total,
            items = chunk.len(),
            "submitting upload chunk"
        );
        let response = send(idx, chunk).await?;
        match aggregate.as_mut() {
            Some(acc) => acc.merge(response),
            None => aggregate = Some(response),
        }
    }

    debug!(
        chunks = total,
        duration_ms = start.elapsed().as_millis() as u64,
        "chunked upload finished"
    );
    Ok(aggregate.unwrap_or_default())
}
