//! Langfuse source platform - wire-shaped records and conversion into the
//! canonical model.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prompt::Prompt;

/// Langfuse prompt record matching their API structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangfusePrompt {
    pub id: String,
    pub name: String,
    /// Prompt content/template.
    pub prompt: String,
    /// Numeric version assigned by Langfuse.
    pub version: u32,
    #[serde(default = "default_prompt_type", rename = "type")]
    pub prompt_type: String,
    /// Langfuse labels (e.g. `production`, `latest`).
    #[serde(default)]
    pub labels: Vec<String>,
    /// Additional tags.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Prompt configuration blob (model parameters etc).
    #[serde(default)]
    pub config: serde_json::Value,
}

fn default_prompt_type() -> String {
    "text".to_string()
}

impl LangfusePrompt {
    /// Convert into the canonical [`Prompt`] model.
    ///
    /// Labels and tags are unioned with duplicates removed. A fresh canonical
    /// id is always minted; the Langfuse id survives only in `source_id`.
    /// Source-specific fields are kept under `langfuse_`-prefixed metadata
    /// keys so sinks that preserve provenance can round-trip them.
    pub fn to_canonical(&self) -> Prompt {
        let mut all_tags: Vec<String> = Vec::new();
        for tag in self.labels.iter().chain(self.tags.iter()) {
            if !all_tags.iter().any(|t| t == tag) {
                all_tags.push(tag.clone());
            }
        }

        let mut metadata = IndexMap::new();
        metadata.insert("langfuse_version".to_string(), serde_json::json!(self.version));
        metadata.insert("langfuse_type".to_string(), serde_json::json!(self.prompt_type));
        metadata.insert("langfuse_config".to_string(), self.config.clone());
        metadata.insert("langfuse_labels".to_string(), serde_json::json!(self.labels));

        Prompt {
            id: Uuid::new_v4().to_string(),
            name: self.name.clone(),
            content: self.prompt.clone(),
            tags: all_tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version.to_string(),
            source_platform: Some("langfuse".to_string()),
            source_id: Some(self.id.clone()),
            metadata,
        }
    }
}

/// Langfuse authentication credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangfuseCredentials {
    pub public_key: String,
    pub secret_key: String,
    /// Host URL; the cloud endpoint is assumed when unset.
    #[serde(default)]
    pub host: Option<String>,
}

/// Configuration for Langfuse as a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangfuseSourceConfig {
    pub name: String,
    #[serde(default = "crate::config::default_true")]
    pub enabled: bool,
    /// Credentials may come from the environment instead.
    #[serde(default)]
    pub credentials: Option<LangfuseCredentials>,
    /// Restrict fetching to prompts carrying these tags/labels.
    #[serde(default)]
    pub tag_filter: Option<Vec<String>>,
    #[serde(default)]
    pub include_archived: bool,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

fn default_batch_size() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> LangfusePrompt {
        LangfusePrompt {
            id: "lf-123".to_string(),
            name: "user/review-code".to_string(),
            prompt: "You are a code reviewer for {{language}}.".to_string(),
            version: 3,
            prompt_type: "text".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
            tags: vec!["b".to_string(), "c".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 11, 0, 0).unwrap(),
            config: serde_json::json!({ "temperature": 0.3 }),
        }
    }

    #[test]
    fn test_to_canonical_unions_labels_and_tags() {
        let canonical = sample().to_canonical();
        assert_eq!(canonical.tags.len(), 3);
        for tag in ["a", "b", "c"] {
            assert!(canonical.has_tag(tag), "missing {tag}");
        }
    }

    #[test]
    fn test_to_canonical_mints_fresh_id() {
        let record = sample();
        let canonical = record.to_canonical();
        assert_ne!(canonical.id, record.id);
        assert_eq!(canonical.source_id.as_deref(), Some("lf-123"));
        assert_eq!(canonical.source_platform.as_deref(), Some("langfuse"));
    }

    #[test]
    fn test_to_canonical_stringifies_version() {
        let canonical = sample().to_canonical();
        assert_eq!(canonical.version, "3");
    }

    #[test]
    fn test_to_canonical_preserves_source_fields_in_metadata() {
        let canonical = sample().to_canonical();
        assert_eq!(canonical.metadata["langfuse_version"], serde_json::json!(3));
        assert_eq!(canonical.metadata["langfuse_type"], serde_json::json!("text"));
        assert_eq!(
            canonical.metadata["langfuse_config"],
            serde_json::json!({ "temperature": 0.3 })
        );
        assert_eq!(
            canonical.metadata["langfuse_labels"],
            serde_json::json!(["a", "b"])
        );
    }

    #[test]
    fn test_source_config_defaults() {
        let config: LangfuseSourceConfig =
            serde_yaml_bw::from_str("name: langfuse-prod").unwrap();
        assert!(config.enabled);
        assert!(config.credentials.is_none());
        assert!(config.tag_filter.is_none());
        assert!(!config.include_archived);
        assert_eq!(config.batch_size, 100);
    }
}
