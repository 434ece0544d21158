//! Per-task fetch: paced retries around one listing call, then extraction.

use blinkit_core::{ProductRecord, Task};

use crate::client::BlinkitClient;
use crate::extract::extract_records;
use crate::retry::{retry_with_backoff, RetryPolicy};

/// Fetches and extracts the products for one task.
///
/// Failures are absorbed: once `policy.attempts` attempts have failed the
/// task contributes no records. Records are stamped with the local date at
/// the moment the successful response is extracted.
pub async fn fetch_task_records(
    client: &BlinkitClient,
    policy: &RetryPolicy,
    task: &Task,
) -> Vec<ProductRecord> {
    let context = task_label(task);

    let Some(payload) = retry_with_backoff(policy, &context, || client.fetch_listing(task)).await
    else {
        return Vec::new();
    };

    let records = extract_records(
        &payload,
        &task.category,
        chrono::Local::now().date_naive(),
    );
    tracing::debug!(task = %context, records = records.len(), "extracted products");
    records
}

/// Human-readable task label for log events.
#[must_use]
pub fn task_label(task: &Task) -> String {
    format!(
        "{} / {} @ {},{}",
        task.category.l1_category,
        task.category.l2_category,
        task.location.latitude,
        task.location.longitude
    )
}
