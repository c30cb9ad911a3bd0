//! Filesystem sink platform - local prompt exports with full provenance
//! preserved in YAML frontmatter.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::normalize_name;
use crate::prompt::Prompt;

/// Filesystem prompt export with metadata carried in frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemPrompt {
    /// Derived filename, without extension.
    pub filename: String,
    pub content: String,
    /// Flat metadata map rendered into the frontmatter block. Insertion
    /// order is the serialization order.
    #[serde(default)]
    pub metadata: IndexMap<String, Value>,
    #[serde(default = "default_extension")]
    pub file_extension: String,
}

fn default_extension() -> String {
    "md".to_string()
}

impl FilesystemPrompt {
    /// Build a filesystem export from a canonical prompt.
    ///
    /// The metadata map is built fixed-fields-first, then the canonical
    /// prompt's extra metadata is merged in with later keys winning. An extra
    /// metadata entry named e.g. `id` therefore shadows the fixed field.
    /// That precedence is intentional and matched to the existing file
    /// format, even though it lets extras override identity fields.
    pub fn from_canonical(prompt: &Prompt) -> Self {
        let mut metadata = IndexMap::new();
        metadata.insert("id".to_string(), Value::String(prompt.id.clone()));
        metadata.insert("name".to_string(), Value::String(prompt.name.clone()));
        metadata.insert("tags".to_string(), serde_json::json!(prompt.tags));
        metadata.insert(
            "created_at".to_string(),
            Value::String(prompt.created_at.to_rfc3339()),
        );
        metadata.insert(
            "updated_at".to_string(),
            Value::String(prompt.updated_at.to_rfc3339()),
        );
        metadata.insert("version".to_string(), Value::String(prompt.version.clone()));
        metadata.insert(
            "source_platform".to_string(),
            option_value(&prompt.source_platform),
        );
        metadata.insert("source_id".to_string(), option_value(&prompt.source_id));

        for (key, value) in &prompt.metadata {
            metadata.insert(key.clone(), value.clone());
        }

        Self {
            filename: normalize_name(&prompt.name),
            content: prompt.content.clone(),
            metadata,
            file_extension: default_extension(),
        }
    }

    /// YAML frontmatter block for the exported file.
    ///
    /// Value shapes: top-level strings are quoted; lists become one quoted
    /// `- "item"` line per element; nested maps quote string subvalues only;
    /// any other scalar is emitted unquoted. Empty metadata produces an
    /// empty string with no `---` markers at all.
    pub fn frontmatter(&self) -> String {
        if self.metadata.is_empty() {
            return String::new();
        }

        let mut lines = vec!["---".to_string()];

        for (key, value) in &self.metadata {
            match value {
                Value::String(s) => lines.push(format!("{}: \"{}\"", key, s)),
                Value::Array(items) => {
                    lines.push(format!("{}:", key));
                    for item in items {
                        lines.push(format!("  - \"{}\"", scalar_text(item)));
                    }
                }
                Value::Object(map) => {
                    lines.push(format!("{}:", key));
                    for (subkey, subvalue) in map {
                        match subvalue {
                            Value::String(s) => lines.push(format!("  {}: \"{}\"", subkey, s)),
                            other => lines.push(format!("  {}: {}", subkey, other)),
                        }
                    }
                }
                other => lines.push(format!("{}: {}", key, other)),
            }
        }

        lines.push("---".to_string());
        lines.join("\n")
    }

    /// Complete file content: frontmatter, blank line, body - or the body
    /// alone when there is no metadata.
    pub fn full_content(&self) -> String {
        let frontmatter = self.frontmatter();
        if frontmatter.is_empty() {
            self.content.clone()
        } else {
            format!("{}\n\n{}", frontmatter, self.content)
        }
    }

    pub fn file_path(&self, base_path: &Path) -> PathBuf {
        base_path.join(format!("{}.{}", self.filename, self.file_extension))
    }
}

fn option_value(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

/// Bare text of a scalar rendered inside an already-quoted position.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Configuration for the filesystem as a sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemSinkConfig {
    pub name: String,
    #[serde(default = "crate::config::default_true")]
    pub enabled: bool,
    /// Base directory for exported prompt files.
    pub path: PathBuf,

    // File organization
    #[serde(default)]
    pub create_subdirectories: bool,
    /// Specific tag that routes prompts into a subdirectory of its name.
    #[serde(default)]
    pub subdirectory_tag: Option<String>,
    #[serde(default = "default_extension")]
    pub file_extension: String,

    // Metadata handling
    #[serde(default = "crate::config::default_true")]
    pub include_frontmatter: bool,
    #[serde(default = "crate::config::default_true")]
    pub preserve_timestamps: bool,

    // File management
    #[serde(default = "crate::config::default_true")]
    pub overwrite_existing: bool,
    #[serde(default)]
    pub backup_existing: bool,

    // Git integration (performed by the driver, not this crate)
    #[serde(default)]
    pub git: Option<GitConfig>,
}

impl FilesystemSinkConfig {
    /// Full path for storing a prompt, honoring the subdirectory rules:
    /// the configured tag when the prompt carries it, otherwise the first
    /// tag, otherwise `untagged`.
    pub fn prompt_path(&self, prompt: &Prompt, fs_prompt: &FilesystemPrompt) -> PathBuf {
        let mut base_path = self.path.clone();

        if self.create_subdirectories {
            let subdir = match &self.subdirectory_tag {
                Some(tag) if prompt.has_tag(tag) => tag.clone(),
                _ => prompt
                    .tags
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "untagged".to_string()),
            };
            base_path = base_path.join(subdir);
        }

        fs_prompt.file_path(&base_path)
    }
}

/// Git options for the export directory, consumed by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "crate::config::default_true")]
    pub auto_add: bool,
    #[serde(default)]
    pub auto_commit: bool,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
}

fn default_commit_message() -> String {
    "Update prompts via prompt-pidgeon".to_string()
}
