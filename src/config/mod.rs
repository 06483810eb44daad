//! Configuration management for docgrade.
//!
//! Configuration lives in the YAML frontmatter of a markdown file. Both the
//! global file (`~/.config/docgrade/config.md`) and the project file
//! (`.docgrade/config.md`) are optional; project values override global ones
//! field by field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub lab: LabConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/docgrade/config.md)
    /// 2. Project config (.docgrade/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Some(Path::new(crate::paths::PROJECT_CONFIG)),
        )
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped; a file that exists but fails to parse is an error.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let global_config = load_partial_if_exists(global_path)?;
        let project_config = load_partial_if_exists(project_path)?;

        let config = global_config.merge_with(project_config);
        config.validate()?;

        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/docgrade/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(crate::paths::GLOBAL_CONFIG))
}

/// Split a markdown document into its YAML frontmatter and body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

fn load_partial_if_exists(path: Option<&Path>) -> Result<PartialConfig> {
    match path.filter(|p| p.exists()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            PartialConfig::load_from(path)
        }
        None => Ok(PartialConfig::default()),
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub check: Option<PartialCheckConfig>,
    pub lab: Option<PartialLabConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialCheckConfig {
    pub min_score: Option<u32>,
    pub strip_fences: Option<bool>,
    pub split: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialLabConfig {
    pub passing_score: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_check = self.check.unwrap_or_default();
        let project_check = project.check.unwrap_or_default();
        let global_lab = self.lab.unwrap_or_default();
        let project_lab = project.lab.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            check: CheckConfig {
                // Project value > global value > default
                min_score: project_check
                    .min_score
                    .or(global_check.min_score)
                    .unwrap_or_else(defaults::default_min_score),
                strip_fences: project_check
                    .strip_fences
                    .or(global_check.strip_fences)
                    .unwrap_or(true),
                split: project_check.split.or(global_check.split).unwrap_or(false),
            },
            lab: LabConfig {
                passing_score: project_lab
                    .passing_score
                    .or(global_lab.passing_score)
                    .unwrap_or_else(defaults::default_passing_score),
            },
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
            },
        }
    }
}
