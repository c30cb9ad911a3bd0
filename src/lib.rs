//! # prompt-pidgeon
//!
//! Data model and transformation core for syncing LLM prompts between a
//! source-of-truth prompt platform (Langfuse) and destination platforms:
//! Open-WebUI prompt/model APIs, coding-assistant rule files (Claude Code,
//! Cursor), and plain filesystem exports.
//!
//! The crate pivots everything through a canonical [`Prompt`] value. Platform
//! adapters are pure constructors from that value; they derive wire payloads,
//! file paths, and frontmatter blocks but never perform I/O themselves. The
//! driving process fetches records, converts, filters by tag, and hands the
//! adapter output to its own HTTP or filesystem layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use prompt_pidgeon::platforms::open_webui::OpenWebUIUserPrompt;
//! use prompt_pidgeon::{Prompt, TagFilter};
//!
//! let prompt = Prompt::new("user/review code", "You are a code reviewer...")
//!     .with_tags(["technical", "code-review"]);
//!
//! let filter = TagFilter::include(["technical"]);
//! assert!(filter.matches(&prompt));
//!
//! let user_prompt = OpenWebUIUserPrompt::from_canonical(&prompt, "lf");
//! assert_eq!(user_prompt.command, "/lf-user/review-code");
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod logging;
pub mod platforms;
pub mod prompt;

pub use config::{
    ConfigLoader, EnvSettings, PidgeonConfig, SinkConfig, SourceConfig, SyncJobConfig,
};
pub use prompt::{Prompt, SyncScope, TagFilter};

/// Error type for prompt-pidgeon operations.
///
/// Referential problems found during configuration validation are not errors;
/// they are collected as diagnostics by [`PidgeonConfig::validate`] so the
/// caller can report all of them at once.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: std::path::PathBuf },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_bw::Error),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
