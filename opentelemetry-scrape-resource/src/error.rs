use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the receiver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scrape receiver config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to read scrape receiver config: {0}")]
    Io(#[from] std::io::Error),

    // Validation
    #[error("no Prometheus scrape_configs")]
    NoScrapeConfigs,
    #[error("error checking bearer token file {path:?} of job {job:?}: {source}")]
    BearerTokenFile {
        job: String,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid start_time_metric_regex: {0}")]
    InvalidStartTimeMetricRegex(#[from] regex::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
