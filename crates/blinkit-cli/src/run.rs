//! Run coordinator for the `scrape` command.
//!
//! Setup failures (input files, client construction) are fatal and returned
//! as errors before any network activity. Everything after that is reported
//! through [`RunOutcome`]: failed tasks only shrink the result, and a failed
//! save does not undo a completed scrape.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use blinkit_core::AppConfig;
use blinkit_scraper::{
    fetch_task_records, generate_tasks, run_in_batches, BlinkitClient, RetryPolicy,
};

use crate::output::write_records;

/// How a run ended once setup succeeded.
#[derive(Debug)]
pub(crate) enum RunOutcome {
    /// `--dry-run`: inputs loaded and tasks generated, nothing fetched.
    DryRun { tasks: usize },
    /// The inputs produced no tasks.
    NoTasks,
    /// Every task came back empty; no file was written.
    NoRecords { tasks: usize },
    Saved { path: PathBuf, records: usize },
    SaveFailed { records: usize, error: io::Error },
}

/// Loads inputs, scrapes every location × category task, and writes the
/// output file.
///
/// # Errors
///
/// Returns an error if either input file cannot be read or parsed, or if the
/// HTTP client cannot be built.
pub(crate) async fn run_scrape(config: &AppConfig, dry_run: bool) -> anyhow::Result<RunOutcome> {
    let locations = blinkit_core::load_locations(&config.locations_path)
        .context("failed to load locations")?;
    let categories = blinkit_core::load_categories(&config.categories_path)
        .context("failed to load categories")?;

    let tasks = generate_tasks(&locations, &categories);
    if tasks.is_empty() {
        tracing::error!(
            locations = locations.len(),
            categories = categories.len(),
            "no tasks generated; check input files"
        );
        return Ok(RunOutcome::NoTasks);
    }
    tracing::info!(
        tasks = tasks.len(),
        locations = locations.len(),
        categories = categories.len(),
        "generated tasks"
    );

    if dry_run {
        return Ok(RunOutcome::DryRun { tasks: tasks.len() });
    }

    let client = BlinkitClient::new(
        &config.base_url,
        &config.user_agent,
        config.request_timeout_secs,
    )
    .context("failed to build Blinkit client")?;
    let policy = RetryPolicy::from_config(config);

    let records = {
        let client = &client;
        let policy = &policy;
        run_in_batches(&tasks, config.concurrent_batch_size, move |task| {
            fetch_task_records(client, policy, task)
        })
        .await
    };

    tracing::info!(
        tasks = tasks.len(),
        products = records.len(),
        "scraping complete"
    );

    if records.is_empty() {
        tracing::error!(tasks = tasks.len(), "no products scraped; nothing to save");
        return Ok(RunOutcome::NoRecords { tasks: tasks.len() });
    }

    let today = chrono::Local::now().date_naive();
    match write_records(&config.output_dir, today, &records) {
        Ok(path) => {
            tracing::info!(path = %path.display(), rows = records.len(), "saved products");
            Ok(RunOutcome::Saved {
                path,
                records: records.len(),
            })
        }
        Err(error) => {
            tracing::error!(
                dir = %config.output_dir.display(),
                rows = records.len(),
                error = %error,
                "failed to save products"
            );
            Ok(RunOutcome::SaveFailed {
                records: records.len(),
                error,
            })
        }
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
