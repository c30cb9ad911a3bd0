//! Configuration loading: YAML file plus the single environment override.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::{DEFAULT_LOG_LEVEL, EnvSettings};
use super::PidgeonConfig;
use crate::{Error, Result};

/// Loads and validates `prompt-pidgeon.yml`.
///
/// The file is the source of truth; the environment only overrides the log
/// level, and only when the environment-derived level differs from the
/// built-in default. A missing file is a hard error - no partial or
/// defaulted configuration is returned.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    env_settings: EnvSettings,
}

impl ConfigLoader {
    /// Loader for the default path, honoring `PROMPT_PIDGEON_CONFIG_FILE`
    /// and `.env`.
    pub fn new() -> Self {
        let env_settings = EnvSettings::load();
        Self {
            config_path: PathBuf::from(&env_settings.config_file),
            env_settings,
        }
    }

    /// Loader for an explicit path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            env_settings: EnvSettings::load(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn env_settings(&self) -> &EnvSettings {
        &self.env_settings
    }

    /// Read and parse the configuration file, then apply the log-level
    /// override.
    pub fn load(&self) -> Result<PidgeonConfig> {
        if !self.config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: self.config_path.clone(),
            });
        }

        debug!(path = %self.config_path.display(), "loading configuration");

        let raw = std::fs::read_to_string(&self.config_path)?;
        let mut config: PidgeonConfig = serde_yaml_bw::from_str(&raw)?;

        // Only override when the environment level was explicitly set.
        if self.env_settings.log_level != DEFAULT_LOG_LEVEL {
            debug!(
                level = %self.env_settings.log_level,
                "overriding log level from environment"
            );
            config.log_level = self.env_settings.log_level.clone();
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
