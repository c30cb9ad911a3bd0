//! Coding assistant sink platforms - Claude Code command files and Cursor
//! rule files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{home_dir, normalize_name};
use crate::prompt::{Prompt, SyncScope};

/// Claude Code slash command, written as a `.md` file under
/// `.claude/commands/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeCodePrompt {
    /// Derived filename, without extension.
    pub filename: String,
    /// Markdown body of the command.
    pub content: String,
    pub scope: SyncScope,
}

impl ClaudeCodePrompt {
    pub fn from_canonical(prompt: &Prompt, scope: SyncScope) -> Self {
        Self {
            filename: normalize_name(&prompt.name),
            content: prompt.content.clone(),
            scope,
        }
    }

    /// Full target path: `<home>/.claude/commands/<filename>.md` for global
    /// scope, `<project>/.claude/commands/<filename>.md` otherwise. The
    /// project path falls back to the current working directory.
    pub fn file_path(&self) -> PathBuf {
        let base = match &self.scope {
            SyncScope::Global => home_dir().unwrap_or_else(|| PathBuf::from(".")),
            SyncScope::Project { path } => match path {
                Some(p) => p.clone(),
                None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            },
        };

        base.join(".claude")
            .join("commands")
            .join(format!("{}.md", self.filename))
    }
}

/// Cursor rule, written as a `.mdc` file with a structured YAML header under
/// `.cursor/rules/`. Project scope only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPrompt {
    /// Derived filename, without extension.
    pub filename: String,
    /// Markdown body of the rule.
    pub content: String,
    /// Rule description shown in Cursor; defaults to the original prompt
    /// name.
    #[serde(default)]
    pub description: Option<String>,
    /// File glob patterns the rule attaches to.
    #[serde(default)]
    pub globs: Vec<String>,
    #[serde(default)]
    pub always_apply: bool,
}

impl CursorPrompt {
    pub fn from_canonical(prompt: &Prompt, always_apply: bool) -> Self {
        Self {
            filename: normalize_name(&prompt.name),
            content: prompt.content.clone(),
            description: Some(prompt.name.clone()),
            globs: Vec::new(),
            always_apply,
        }
    }

    /// Full target path: `<project>/.cursor/rules/<filename>.mdc`, with the
    /// current working directory as the default project path.
    pub fn file_path(&self, project_path: Option<&Path>) -> PathBuf {
        let base = match project_path {
            Some(p) => p.to_path_buf(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        base.join(".cursor")
            .join("rules")
            .join(format!("{}.mdc", self.filename))
    }

    /// YAML header block for the `.mdc` file.
    ///
    /// With no description and no globs this reduces to the `---` markers
    /// around a single `alwaysApply` line.
    pub fn frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(description) = &self.description {
            lines.push(format!("description: \"{}\"", description));
        }

        if !self.globs.is_empty() {
            lines.push("globs:".to_string());
            for glob in &self.globs {
                lines.push(format!("  - \"{}\"", glob));
            }
        }

        lines.push(format!("alwaysApply: {}", self.always_apply));
        lines.push("---".to_string());

        lines.join("\n")
    }

    /// Complete `.mdc` file content: header block, blank line, body.
    pub fn full_content(&self) -> String {
        format!("{}\n\n{}", self.frontmatter(), self.content)
    }
}

/// The coding assistant platforms this tool can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodingAssistantPlatform {
    ClaudeCode,
    Cursor,
}

/// Configuration for coding assistant sinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingAssistantSinkConfig {
    pub name: String,
    #[serde(default = "crate::config::default_true")]
    pub enabled: bool,
    pub platform: CodingAssistantPlatform,
    #[serde(flatten)]
    pub scope: SyncScope,

    // Claude Code
    /// Override for the global commands directory.
    #[serde(default)]
    pub global_commands_path: Option<PathBuf>,

    // Cursor
    #[serde(default)]
    pub always_apply: bool,
    #[serde(default)]
    pub default_globs: Vec<String>,

    // Common
    #[serde(default)]
    pub filename_prefix: Option<String>,
    #[serde(default = "crate::config::default_true")]
    pub overwrite_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_code_from_canonical() {
        let prompt = Prompt::new("Review Code", "Review the following changes.");
        let cmd = ClaudeCodePrompt::from_canonical(&prompt, SyncScope::Global);

        assert_eq!(cmd.filename, "review-code");
        assert_eq!(cmd.content, "Review the following changes.");
        assert!(cmd.scope.is_global());
    }

    #[test]
    fn test_claude_code_normalizes_filename() {
        let prompt = Prompt::new("My Complex_Prompt Name", "content");
        let cmd = ClaudeCodePrompt::from_canonical(&prompt, SyncScope::Global);
        assert_eq!(cmd.filename, "my-complex-prompt-name");
    }

    #[test]
    fn test_claude_code_global_path() {
        let prompt = Prompt::new("deploy", "Deploy checklist");
        let cmd = ClaudeCodePrompt::from_canonical(&prompt, SyncScope::Global);
        let path = cmd.file_path();

        assert!(path.ends_with(".claude/commands/deploy.md"));
        if let Some(home) = home_dir() {
            assert!(path.starts_with(home));
        }
    }

    #[test]
    fn test_claude_code_project_path() {
        let prompt = Prompt::new("deploy", "Deploy checklist");
        let cmd = ClaudeCodePrompt::from_canonical(&prompt, SyncScope::project("/workspace/app"));
        assert_eq!(
            cmd.file_path(),
            PathBuf::from("/workspace/app/.claude/commands/deploy.md")
        );
    }

    #[test]
    fn test_claude_code_project_path_defaults_to_cwd() {
        let prompt = Prompt::new("deploy", "Deploy checklist");
        let cmd = ClaudeCodePrompt::from_canonical(&prompt, SyncScope::Project { path: None });
        let path = cmd.file_path();

        assert!(path.ends_with(".claude/commands/deploy.md"));
        if let Ok(cwd) = std::env::current_dir() {
            assert!(path.starts_with(cwd));
        }
    }

    #[test]
    fn test_cursor_from_canonical() {
        let prompt = Prompt::new("Rust Style_Guide", "Prefer iterators over loops.");
        let rule = CursorPrompt::from_canonical(&prompt, false);

        assert_eq!(rule.filename, "rust-style-guide");
        assert_eq!(rule.description.as_deref(), Some("Rust Style_Guide"));
        assert!(rule.globs.is_empty());
        assert!(!rule.always_apply);
    }

    #[test]
    fn test_cursor_file_path() {
        let prompt = Prompt::new("style", "rules");
        let rule = CursorPrompt::from_canonical(&prompt, true);
        assert_eq!(
            rule.file_path(Some(Path::new("/workspace/app"))),
            PathBuf::from("/workspace/app/.cursor/rules/style.mdc")
        );
    }

    #[test]
    fn test_cursor_frontmatter_minimal() {
        let rule = CursorPrompt {
            filename: "style".to_string(),
            content: "body".to_string(),
            description: None,
            globs: vec![],
            always_apply: false,
        };
        assert_eq!(rule.frontmatter(), "---\nalwaysApply: false\n---");
    }

    #[test]
    fn test_cursor_frontmatter_all_fields() {
        let rule = CursorPrompt {
            filename: "style".to_string(),
            content: "body".to_string(),
            description: Some("Rust style rules".to_string()),
            globs: vec!["**/*.rs".to_string(), "src/**".to_string()],
            always_apply: true,
        };
        let expected = [
            "---",
            "description: \"Rust style rules\"",
            "globs:",
            "  - \"**/*.rs\"",
            "  - \"src/**\"",
            "alwaysApply: true",
            "---",
        ]
        .join("\n");
        assert_eq!(rule.frontmatter(), expected);
    }

    #[test]
    fn test_cursor_full_content() {
        let prompt = Prompt::new("style", "Prefer iterators.");
        let rule = CursorPrompt::from_canonical(&prompt, false);
        let content = rule.full_content();

        assert!(content.starts_with("---\n"));
        assert!(content.ends_with("\n\nPrefer iterators."));
    }

    #[test]
    fn test_sink_config_defaults() {
        let yaml = "name: cursor-rules\nplatform: cursor\nscope_type: global";
        let config: CodingAssistantSinkConfig = serde_yaml_bw::from_str(yaml).unwrap();

        assert!(config.enabled);
        assert_eq!(config.platform, CodingAssistantPlatform::Cursor);
        assert!(config.scope.is_global());
        assert!(!config.always_apply);
        assert!(config.default_globs.is_empty());
        assert!(config.filename_prefix.is_none());
        assert!(config.overwrite_existing);
    }
}
