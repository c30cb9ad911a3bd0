//! Environment variable settings.
//!
//! Every setting is resolved through an explicit ordered candidate list so
//! precedence stays auditable: `PROMPT_PIDGEON_`-prefixed names are preferred
//! over legacy bare names, and an explicit `URL` variable is preferred over a
//! legacy `HOST` variable for the same endpoint.

/// Candidate lists per setting, highest priority first.
const LANGFUSE_PUBLIC_KEY: &[&str] = &["PROMPT_PIDGEON_LANGFUSE_PUBLIC_KEY", "LANGFUSE_PUBLIC_KEY"];
const LANGFUSE_SECRET_KEY: &[&str] = &["PROMPT_PIDGEON_LANGFUSE_SECRET_KEY", "LANGFUSE_SECRET_KEY"];
const LANGFUSE_HOST: &[&str] = &[
    "PROMPT_PIDGEON_LANGFUSE_URL",
    "PROMPT_PIDGEON_LANGFUSE_HOST",
    "LANGFUSE_URL",
    "LANGFUSE_HOST",
];
const OPEN_WEBUI_API_KEY: &[&str] = &["PROMPT_PIDGEON_OPEN_WEBUI_API_KEY", "OPEN_WEBUI_API_KEY"];
const OPEN_WEBUI_URL: &[&str] = &[
    "PROMPT_PIDGEON_OPEN_WEBUI_URL",
    "PROMPT_PIDGEON_OPEN_WEBUI_HOST",
    "OPEN_WEBUI_URL",
    "OPEN_WEBUI_HOST",
];
const CONFIG_FILE: &[&str] = &["PROMPT_PIDGEON_CONFIG_FILE"];
const LOG_LEVEL: &[&str] = &["PROMPT_PIDGEON_LOG_LEVEL"];
const DRY_RUN: &[&str] = &["PROMPT_PIDGEON_DRY_RUN"];

pub(crate) const DEFAULT_CONFIG_FILE: &str = "prompt-pidgeon.yml";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "INFO";

/// First value found among the candidate variable names.
fn lookup(candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|name| std::env::var(name).ok())
}

/// Environment-derived settings for prompt-pidgeon.
///
/// Credentials stay optional here; whether they are required depends on
/// which sources and sinks the configuration actually uses.
#[derive(Debug, Clone)]
pub struct EnvSettings {
    pub langfuse_public_key: Option<String>,
    pub langfuse_secret_key: Option<String>,
    pub langfuse_host: Option<String>,

    pub open_webui_api_key: Option<String>,
    pub open_webui_url: Option<String>,

    pub config_file: String,
    pub log_level: String,
    pub dry_run: bool,
}

impl EnvSettings {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self {
            langfuse_public_key: lookup(LANGFUSE_PUBLIC_KEY),
            langfuse_secret_key: lookup(LANGFUSE_SECRET_KEY),
            langfuse_host: lookup(LANGFUSE_HOST),
            open_webui_api_key: lookup(OPEN_WEBUI_API_KEY),
            open_webui_url: lookup(OPEN_WEBUI_URL),
            config_file: lookup(CONFIG_FILE)
                .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string()),
            log_level: lookup(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            dry_run: lookup(DRY_RUN)
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Load `.env` into the process environment first, then snapshot.
    /// A missing `.env` file is not an error.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            langfuse_public_key: None,
            langfuse_secret_key: None,
            langfuse_host: None,
            open_webui_api_key: None,
            open_webui_url: None,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            dry_run: false,
        }
    }
}
