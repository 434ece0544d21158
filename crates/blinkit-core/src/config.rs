use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://blinkit.com/v1/layout/listing_widgets";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or fails validation.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let base_url = or_default("BLINKIT_BASE_URL", DEFAULT_BASE_URL);
    let locations_path = PathBuf::from(or_default("BLINKIT_LOCATIONS_CSV", "blinkit_locations.csv"));
    let categories_path =
        PathBuf::from(or_default("BLINKIT_CATEGORIES_CSV", "blinkit_categories.csv"));
    let output_dir = PathBuf::from(or_default("BLINKIT_OUTPUT_DIR", "."));
    let log_level = or_default("BLINKIT_LOG_LEVEL", "info");
    let user_agent = or_default("BLINKIT_USER_AGENT", "Mozilla/5.0");

    let request_timeout_secs = match lookup("BLINKIT_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("BLINKIT_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let concurrent_batch_size = parse_usize("BLINKIT_CONCURRENT_BATCH_SIZE", "2")?;
    let request_delay_ms = parse_u64("BLINKIT_REQUEST_DELAY_MS", "3000")?;
    let retry_attempts = parse_u32("BLINKIT_RETRY_ATTEMPTS", "3")?;
    let retry_backoff_factor = or_default("BLINKIT_RETRY_BACKOFF_FACTOR", "2")
        .parse::<f64>()
        .map_err(|e| invalid("BLINKIT_RETRY_BACKOFF_FACTOR", e.to_string()))?;

    let config = AppConfig {
        base_url,
        locations_path,
        categories_path,
        output_dir,
        log_level,
        user_agent,
        request_timeout_secs,
        concurrent_batch_size,
        request_delay_ms,
        retry_attempts,
        retry_backoff_factor,
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.concurrent_batch_size == 0 {
        return Err(ConfigError::Validation(
            "BLINKIT_CONCURRENT_BATCH_SIZE must be at least 1".to_string(),
        ));
    }

    if config.retry_attempts == 0 {
        return Err(ConfigError::Validation(
            "BLINKIT_RETRY_ATTEMPTS must be at least 1".to_string(),
        ));
    }

    if !config.retry_backoff_factor.is_finite() || config.retry_backoff_factor < 0.0 {
        return Err(ConfigError::Validation(format!(
            "BLINKIT_RETRY_BACKOFF_FACTOR must be a non-negative number of seconds, got {}",
            config.retry_backoff_factor
        )));
    }

    if config.base_url.trim().is_empty() {
        return Err(ConfigError::Validation(
            "BLINKIT_BASE_URL must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
