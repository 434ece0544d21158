pub mod app_config;
pub mod config;
pub mod delimited;
pub mod inputs;
pub mod records;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use inputs::{load_categories, load_locations};
pub use records::{Category, Location, ProductRecord, Task};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read input file {path}: {source}")]
    InputFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse input file {path} at line {line}: {reason}")]
    InputFileParse {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
