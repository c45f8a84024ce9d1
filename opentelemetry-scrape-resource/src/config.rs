//! # Scrape receiver configuration
//!
//! Configuration of the Prometheus scrape receiver that discovers the targets
//! whose resources this crate builds. Only the parts the receiver checks at
//! startup are modelled; the remaining Prometheus scrape settings are
//! accepted and ignored.
//!
//! ```yaml
//! buffer_period: 5s
//! buffer_count: 10
//! use_start_time_metric: true
//! start_time_metric_regex: '^.+_process_start_time_seconds$'
//! config:
//!   scrape_configs:
//!     - job_name: kubelet
//!       bearer_token_file: /var/run/secrets/kubernetes.io/serviceaccount/token
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use opentelemetry::{otel_debug, otel_info, otel_warn};
use regex::Regex;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::labels::DiscoveryLabels;
use crate::resource::ScrapeTarget;

/// Prometheus scrape receiver configuration.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, with = "humantime_serde")]
    buffer_period: Option<Duration>,
    #[serde(default)]
    buffer_count: usize,
    #[serde(default)]
    use_start_time_metric: bool,
    #[serde(default)]
    start_time_metric_regex: Option<String>,
    /// The embedded Prometheus configuration. Absent means the receiver does
    /// nothing.
    #[serde(default, rename = "config")]
    prometheus: Option<PrometheusConfig>,
}

/// The subset of a Prometheus configuration document the receiver reads.
#[derive(Deserialize, Debug, Default)]
pub struct PrometheusConfig {
    #[serde(default)]
    scrape_configs: Vec<ScrapeJobConfig>,
}

/// A single Prometheus `scrape_config` entry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrapeJobConfig {
    job_name: String,
    #[serde(default)]
    bearer_token_file: Option<PathBuf>,
}

impl Config {
    /// Parse a configuration document. The result is not validated.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        otel_debug!(
            name: "ScrapeResource.Config.Parsed",
            scrape_jobs = config.scrape_jobs().count()
        );
        Ok(config)
    }

    /// Read and parse the configuration document at `path`. The result is
    /// not validated.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the configuration can be used to start the receiver.
    pub fn validate(&self) -> ConfigResult<()> {
        let Some(prometheus) = &self.prometheus else {
            otel_info!(
                name: "ScrapeResource.Config.Noop",
                message = "No Prometheus config, the receiver will not scrape anything"
            );
            return Ok(());
        };

        if prometheus.scrape_configs.is_empty() {
            otel_warn!(name: "ScrapeResource.Config.NoScrapeConfigs");
            return Err(ConfigError::NoScrapeConfigs);
        }

        for job in &prometheus.scrape_configs {
            job.check_bearer_token_file().map_err(|error| {
                otel_warn!(
                    name: "ScrapeResource.Config.BearerTokenFileInvalid",
                    job = job.job_name.as_str(),
                    reason = format!("{error}")
                );
                error
            })?;
        }

        if let Some(regex) = self.start_time_metric_regex() {
            Regex::new(regex).map_err(|error| {
                otel_warn!(
                    name: "ScrapeResource.Config.InvalidStartTimeMetricRegex",
                    reason = format!("{error}")
                );
                error
            })?;
        }

        Ok(())
    }

    /// `true` when no Prometheus configuration is embedded.
    pub fn is_noop(&self) -> bool {
        self.prometheus.is_none()
    }

    pub fn buffer_period(&self) -> Option<Duration> {
        self.buffer_period
    }

    pub fn buffer_count(&self) -> usize {
        self.buffer_count
    }

    pub fn use_start_time_metric(&self) -> bool {
        self.use_start_time_metric
    }

    pub fn start_time_metric_regex(&self) -> Option<&str> {
        self.start_time_metric_regex
            .as_deref()
            .filter(|regex| !regex.is_empty())
    }

    pub fn scrape_jobs(&self) -> impl Iterator<Item = &ScrapeJobConfig> {
        self.prometheus
            .iter()
            .flat_map(|prometheus| prometheus.scrape_configs.iter())
    }
}

impl ScrapeJobConfig {
    pub fn new(job_name: impl Into<String>) -> Self {
        ScrapeJobConfig {
            job_name: job_name.into(),
            bearer_token_file: None,
        }
    }

    pub fn with_bearer_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bearer_token_file = Some(path.into());
        self
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// The configured bearer token file. An empty path counts as unset.
    pub fn bearer_token_file(&self) -> Option<&Path> {
        self.bearer_token_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// A target of this job discovered at `instance` with `labels`.
    pub fn target(&self, instance: impl Into<String>, labels: DiscoveryLabels) -> ScrapeTarget {
        ScrapeTarget::new(self.job_name.clone(), instance, labels)
    }

    fn check_bearer_token_file(&self) -> ConfigResult<()> {
        let Some(path) = self.bearer_token_file() else {
            return Ok(());
        };
        fs::metadata(path)
            .map(|_| ())
            .map_err(|source| ConfigError::BearerTokenFile {
                job: self.job_name.clone(),
                path: path.to_path_buf(),
                source,
            })
    }
}
