//! Canonical prompt model - the universal representation all platform shapes
//! convert to and from.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn generated_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_version() -> String {
    "1".to_string()
}

/// Universal prompt model that serves as the canonical representation.
///
/// Canonical prompts are created per sync run from fetched source records and
/// discarded after being projected into sink records. The `id` is unique
/// within a run but is not preserved across platform round-trips: converting
/// a foreign record to canonical always mints a fresh id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier, generated when absent.
    #[serde(default = "generated_id")]
    pub id: String,
    /// Human-readable name. May embed a namespace prefix like `user/` or
    /// `system/` that downstream routing keeps as a literal path segment.
    pub name: String,
    /// Raw prompt text, may contain `{{variable}}` placeholders.
    pub content: String,
    /// Tags for filtering and categorization. Set semantics, but order is
    /// preserved.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,

    /// Platform this prompt originally came from, if any.
    #[serde(default)]
    pub source_platform: Option<String>,
    /// Platform-specific ID of the original record.
    #[serde(default)]
    pub source_id: Option<String>,
    /// Additional platform-specific metadata. Insertion order is preserved so
    /// frontmatter serialization stays deterministic.
    #[serde(default)]
    pub metadata: IndexMap<String, serde_json::Value>,
}

impl Prompt {
    /// Create a prompt with the required fields; everything else defaults.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generated_id(),
            name: name.into(),
            content: content.into(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            version: default_version(),
            source_platform: None,
            source_id: None,
            metadata: IndexMap::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the prompt carries a specific tag. Exact, case-sensitive.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if the prompt carries any of the given tags. False for an empty
    /// input.
    pub fn has_any_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.has_tag(t.as_ref()))
    }

    /// Check if the prompt carries all of the given tags. Vacuously true for
    /// an empty input.
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.has_tag(t.as_ref()))
    }
}

/// Tag-based filtering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagFilter {
    /// Tags that must be present.
    #[serde(default)]
    pub include_tags: Vec<String>,
    /// Tags that must not be present. Exclusion always wins.
    #[serde(default)]
    pub exclude_tags: Vec<String>,
    /// Whether all `include_tags` must be present rather than any.
    #[serde(default)]
    pub require_all: bool,
}

impl TagFilter {
    /// Filter that matches prompts carrying any of the given tags.
    pub fn include<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include_tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn exclude<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a prompt matches this filter.
    ///
    /// Exclusion is evaluated first and is absolute: a prompt carrying any
    /// excluded tag never matches, regardless of the include configuration.
    /// An empty include set matches everything not excluded.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if prompt.has_any_tags(&self.exclude_tags) {
            return false;
        }

        if self.include_tags.is_empty() {
            return true;
        }

        if self.require_all {
            prompt.has_all_tags(&self.include_tags)
        } else {
            prompt.has_any_tags(&self.include_tags)
        }
    }
}

/// Sync scope: global (per-user home directory) or project-local.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope_type", rename_all = "lowercase")]
pub enum SyncScope {
    #[default]
    Global,
    Project {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

impl SyncScope {
    pub fn project(path: impl Into<PathBuf>) -> Self {
        SyncScope::Project {
            path: Some(path.into()),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, SyncScope::Global)
    }

    pub fn is_project(&self) -> bool {
        matches!(self, SyncScope::Project { .. })
    }
}
