//! Platform adapters - pure conversions between the canonical [`Prompt`]
//! model and platform-native record shapes.
//!
//! Each adapter is a value constructor plus path/payload derivation; none of
//! them perform I/O or hold a back-reference to the canonical prompt.
//!
//! [`Prompt`]: crate::prompt::Prompt

pub mod coding_assistants;
pub mod filesystem;
pub mod langfuse;
pub mod open_webui;

use std::path::PathBuf;

pub use coding_assistants::{
    ClaudeCodePrompt, CodingAssistantPlatform, CodingAssistantSinkConfig, CursorPrompt,
};
pub use filesystem::{FilesystemPrompt, FilesystemSinkConfig, GitConfig};
pub use langfuse::{LangfuseCredentials, LangfusePrompt, LangfuseSourceConfig};
pub use open_webui::{
    OpenWebUICredentials, OpenWebUIModel, OpenWebUIPromptType, OpenWebUISinkConfig,
    OpenWebUIUserPrompt,
};

/// Derive a filename/identifier segment from a prompt name.
///
/// Lowercases the name and replaces each space and underscore with a hyphen.
/// Nothing else is altered: slashes in namespaced names like
/// `user/review-code` survive as literal path or command segments. The
/// transformation is idempotent.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '_'], "-")
}

pub(crate) fn home_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|d| d.home_dir().to_path_buf())
}
