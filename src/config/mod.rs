//! Declarative sync configuration: sources, sinks, and the jobs that
//! reference them by name.
//!
//! Loaded once per process from `prompt-pidgeon.yml` plus environment
//! variables, and read-only afterwards. Referential integrity between jobs
//! and their sources/sinks is a validation-time concern, checked by
//! [`PidgeonConfig::validate`].

mod env;
mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use env::EnvSettings;
pub use loader::ConfigLoader;

use crate::platforms::{
    CodingAssistantSinkConfig, FilesystemSinkConfig, LangfuseSourceConfig, OpenWebUISinkConfig,
};
use crate::prompt::TagFilter;

pub(crate) fn default_true() -> bool {
    true
}

/// A configured data source, keyed by its `type` discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SourceConfig {
    Langfuse(LangfuseSourceConfig),
}

impl SourceConfig {
    pub fn name(&self) -> &str {
        match self {
            SourceConfig::Langfuse(c) => &c.name,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            SourceConfig::Langfuse(c) => c.enabled,
        }
    }
}

/// A configured data sink, keyed by its `type` discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SinkConfig {
    OpenWebui(OpenWebUISinkConfig),
    Filesystem(FilesystemSinkConfig),
    ClaudeCode(CodingAssistantSinkConfig),
    Cursor(CodingAssistantSinkConfig),
}

impl SinkConfig {
    pub fn name(&self) -> &str {
        match self {
            SinkConfig::OpenWebui(c) => &c.name,
            SinkConfig::Filesystem(c) => &c.name,
            SinkConfig::ClaudeCode(c) | SinkConfig::Cursor(c) => &c.name,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            SinkConfig::OpenWebui(c) => c.enabled,
            SinkConfig::Filesystem(c) => c.enabled,
            SinkConfig::ClaudeCode(c) | SinkConfig::Cursor(c) => c.enabled,
        }
    }
}

/// Configuration for a single sync job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJobConfig {
    /// Human-readable name for this job.
    pub name: String,
    /// Name of the source to sync from.
    pub source: String,
    /// Name of the sink to sync to.
    pub sink: String,
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Tag-based filtering applied to fetched prompts.
    #[serde(default)]
    pub filter: Option<TagFilter>,

    /// Cron-like schedule for automatic sync. Unused by the core; carried
    /// for the driver.
    #[serde(default)]
    pub schedule: Option<String>,

    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub force_update: bool,
}

fn default_config_version() -> String {
    "1".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_max_concurrent_jobs() -> u32 {
    5
}

fn default_timeout_seconds() -> u64 {
    300
}

/// Top-level configuration model for `prompt-pidgeon.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidgeonConfig {
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
    #[serde(default)]
    pub sync: Vec<SyncJobConfig>,

    // Global settings
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_max_concurrent_jobs")]
    pub max_concurrent_jobs: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for PidgeonConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            sources: Vec::new(),
            sinks: Vec::new(),
            sync: Vec::new(),
            log_level: default_log_level(),
            max_concurrent_jobs: default_max_concurrent_jobs(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl PidgeonConfig {
    /// First source with the given name, if any. Uniqueness is not enforced
    /// at lookup time.
    pub fn source_by_name(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// First sink with the given name, if any.
    pub fn sink_by_name(&self, name: &str) -> Option<&SinkConfig> {
        self.sinks.iter().find(|s| s.name() == name)
    }

    /// Enabled sync jobs, in configuration order.
    pub fn enabled_sync_jobs(&self) -> Vec<&SyncJobConfig> {
        self.sync.iter().filter(|job| job.enabled).collect()
    }

    /// Check referential integrity and name uniqueness.
    ///
    /// Returns one human-readable diagnostic per problem instead of failing
    /// on the first: a job with both references broken yields two entries,
    /// and duplicate names within the source or sink lists are each flagged
    /// once.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let source_names: HashSet<&str> = self.sources.iter().map(|s| s.name()).collect();
        let sink_names: HashSet<&str> = self.sinks.iter().map(|s| s.name()).collect();

        for job in &self.sync {
            if !source_names.contains(job.source.as_str()) {
                errors.push(format!(
                    "Sync job '{}' references unknown source '{}'",
                    job.name, job.source
                ));
            }

            if !sink_names.contains(job.sink.as_str()) {
                errors.push(format!(
                    "Sync job '{}' references unknown sink '{}'",
                    job.name, job.sink
                ));
            }
        }

        if source_names.len() != self.sources.len() {
            errors.push("Duplicate source names found".to_string());
        }

        if sink_names.len() != self.sinks.len() {
            errors.push("Duplicate sink names found".to_string());
        }

        errors
    }
}
