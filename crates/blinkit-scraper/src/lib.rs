pub mod batch;
pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod retry;
pub mod tasks;
pub mod types;

pub use batch::run_in_batches;
pub use client::BlinkitClient;
pub use error::ScraperError;
pub use extract::extract_records;
pub use fetch::fetch_task_records;
pub use retry::{retry_with_backoff, RetryPolicy};
pub use tasks::generate_tasks;
