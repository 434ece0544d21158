use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub locations_path: PathBuf,
    pub categories_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub user_agent: String,
    /// `None` leaves the HTTP client without a request timeout.
    pub request_timeout_secs: Option<u64>,
    /// Number of tasks fetched concurrently per group.
    pub concurrent_batch_size: usize,
    /// Pacing delay applied before every attempt, including the first.
    pub request_delay_ms: u64,
    /// Total attempts per task, not additional retries.
    pub retry_attempts: u32,
    /// Backoff base in seconds: the wait after failed attempt `n` is
    /// `retry_backoff_factor * 2^(n-1)`.
    pub retry_backoff_factor: f64,
}

impl AppConfig {
    #[must_use]
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}
