//! Open-WebUI sink platform - user prompts for the prompts API and system
//! models for the models API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::normalize_name;
use crate::prompt::Prompt;

/// Tag applied to every model this tool creates, so managed models can be
/// told apart from hand-made ones.
pub const MANAGED_TAG: &str = "prompt-pidgeon-managed";

/// Default prefix for user prompt commands.
pub const DEFAULT_COMMAND_PREFIX: &str = "lf";

/// Default prefix for system model IDs.
pub const DEFAULT_MODEL_PREFIX: &str = "sme";

/// Default short name appended to system model IDs.
pub const DEFAULT_BASE_MODEL_SHORT: &str = "default";

/// Open-WebUI user prompt for the prompts API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWebUIUserPrompt {
    /// Command with `/` prefix, e.g. `/lf-review-code`.
    pub command: String,
    /// Human-readable title (the original, non-normalized prompt name).
    pub title: String,
    /// Prompt content with variable placeholders, copied verbatim.
    pub content: String,
    #[serde(default)]
    pub access_control: Map<String, Value>,
}

impl OpenWebUIUserPrompt {
    /// Build a user prompt from a canonical prompt.
    pub fn from_canonical(prompt: &Prompt, command_prefix: &str) -> Self {
        let command = format!("/{}-{}", command_prefix, normalize_name(&prompt.name));

        Self {
            command,
            title: prompt.name.clone(),
            content: prompt.content.clone(),
            access_control: Map::new(),
        }
    }
}

/// Open-WebUI model record; system prompts are delivered through the models
/// API as `params.system` on a derived model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWebUIModel {
    pub id: String,
    /// Model name, same as the id.
    pub name: String,
    pub base_model_id: String,
    /// Model parameters including the system prompt.
    pub params: Map<String, Value>,
    pub is_active: bool,
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl OpenWebUIModel {
    /// Build a system model from a canonical prompt.
    ///
    /// The derived id is `<model_prefix>-<normalized-name>-<base_model_short>`
    /// and the tag list puts [`MANAGED_TAG`] first, followed by the canonical
    /// tags. Duplicates are not removed at this layer.
    pub fn from_canonical(
        prompt: &Prompt,
        base_model_id: &str,
        model_prefix: &str,
        base_model_short: &str,
    ) -> Self {
        let model_id = format!(
            "{}-{}-{}",
            model_prefix,
            normalize_name(&prompt.name),
            base_model_short
        );

        let mut params = Map::new();
        params.insert("system".to_string(), Value::String(prompt.content.clone()));

        let mut tags = vec![MANAGED_TAG.to_string()];
        tags.extend(prompt.tags.iter().cloned());

        Self {
            id: model_id.clone(),
            name: model_id,
            base_model_id: base_model_id.to_string(),
            params,
            is_active: true,
            meta: Map::new(),
            tags,
        }
    }
}

/// Open-WebUI authentication credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWebUICredentials {
    pub api_key: String,
    pub base_url: String,
}

/// Which Open-WebUI API a sink targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenWebUIPromptType {
    /// Prompts API (slash commands).
    #[default]
    User,
    /// Models API (system prompt baked into a derived model).
    System,
}

/// Configuration for Open-WebUI as a sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWebUISinkConfig {
    pub name: String,
    #[serde(default = "crate::config::default_true")]
    pub enabled: bool,
    /// Credentials may come from the environment instead.
    #[serde(default)]
    pub credentials: Option<OpenWebUICredentials>,
    #[serde(default)]
    pub prompt_type: OpenWebUIPromptType,

    // User prompts
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    // System models
    #[serde(default)]
    pub base_models: Vec<String>,
    #[serde(default = "default_model_prefix")]
    pub model_prefix: String,
    #[serde(default = "default_model_tags")]
    pub default_tags: Vec<String>,
}

fn default_command_prefix() -> String {
    DEFAULT_COMMAND_PREFIX.to_string()
}

fn default_model_prefix() -> String {
    DEFAULT_MODEL_PREFIX.to_string()
}

fn default_model_tags() -> Vec<String> {
    vec![MANAGED_TAG.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_from_canonical() {
        let prompt = Prompt::new("Review Code", "Please review: {{code}}");
        let user = OpenWebUIUserPrompt::from_canonical(&prompt, DEFAULT_COMMAND_PREFIX);

        assert_eq!(user.command, "/lf-review-code");
        assert_eq!(user.title, "Review Code");
        assert_eq!(user.content, "Please review: {{code}}");
        assert!(user.access_control.is_empty());
    }

    #[test]
    fn test_user_prompt_custom_prefix() {
        let prompt = Prompt::new("My_Prompt Name", "content");
        let user = OpenWebUIUserPrompt::from_canonical(&prompt, "team");
        assert_eq!(user.command, "/team-my-prompt-name");
    }

    #[test]
    fn test_model_from_canonical() {
        let prompt = Prompt::new("SME Architect", "You are a software architect.")
            .with_tags(["technical", "architecture"]);
        let model = OpenWebUIModel::from_canonical(
            &prompt,
            "anthropic/claude-sonnet",
            DEFAULT_MODEL_PREFIX,
            DEFAULT_BASE_MODEL_SHORT,
        );

        assert_eq!(model.id, "sme-sme-architect-default");
        assert_eq!(model.name, model.id);
        assert_eq!(model.base_model_id, "anthropic/claude-sonnet");
        assert_eq!(
            model.params["system"],
            Value::String("You are a software architect.".to_string())
        );
        assert!(model.is_active);
        assert!(model.meta.is_empty());
    }

    #[test]
    fn test_model_tags_managed_first() {
        let prompt = Prompt::new("x", "y").with_tags(["technical", "architecture"]);
        let model = OpenWebUIModel::from_canonical(&prompt, "base", "sme", "default");
        assert_eq!(
            model.tags,
            vec!["prompt-pidgeon-managed", "technical", "architecture"]
        );
    }

    #[test]
    fn test_model_tags_not_deduplicated() {
        let prompt = Prompt::new("x", "y").with_tags([MANAGED_TAG]);
        let model = OpenWebUIModel::from_canonical(&prompt, "base", "sme", "default");
        assert_eq!(model.tags, vec![MANAGED_TAG, MANAGED_TAG]);
    }

    #[test]
    fn test_sink_config_defaults() {
        let config: OpenWebUISinkConfig = serde_yaml_bw::from_str("name: webui").unwrap();
        assert!(config.enabled);
        assert_eq!(config.prompt_type, OpenWebUIPromptType::User);
        assert_eq!(config.command_prefix, "lf");
        assert_eq!(config.model_prefix, "sme");
        assert_eq!(config.default_tags, vec![MANAGED_TAG]);
        assert!(config.base_models.is_empty());
    }
}
