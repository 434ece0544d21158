//! Fixed-width group scheduling.
//!
//! Tasks are split into consecutive groups of `width`. All futures of a group
//! are created up front and joined, so at most `width` are in flight; the next
//! group is not started until every future of the current one has resolved.
//! Results are appended only between groups, in task order, which keeps the
//! output order deterministic without any locking.

use std::future::Future;

use futures::future::join_all;

/// Runs `worker` over `tasks` in sequential groups of `width` concurrent calls.
///
/// Returns every item produced, ordered by task and then by the order the
/// worker returned them. A `width` of zero is treated as one.
pub async fn run_in_batches<'a, T, R, F, Fut>(tasks: &'a [T], width: usize, mut worker: F) -> Vec<R>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Vec<R>>,
{
    let width = width.max(1);
    let total = tasks.len();
    let groups = total.div_ceil(width);
    let mut results = Vec::new();
    let mut completed = 0usize;

    for (index, group) in tasks.chunks(width).enumerate() {
        let in_flight: Vec<Fut> = group.iter().map(&mut worker).collect();
        let outputs = join_all(in_flight).await;

        for output in outputs {
            results.extend(output);
        }

        completed += group.len();
        tracing::info!(
            group = index + 1,
            groups,
            completed,
            total,
            collected = results.len(),
            "Progress: {completed}/{total} tasks completed"
        );
    }

    results
}
