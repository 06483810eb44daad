//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_min_score, u32, 0);
default_fn!(default_passing_score, u32, crate::lab::PASSING_SCORE);
default_fn!(default_true, bool, true);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Settings for `docgrade check`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Lowest passing score for a valid unit (default: 0)
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    /// Strip markdown fences before grading (default: true)
    #[serde(default = "default_true")]
    pub strip_fences: bool,
    /// Grade each function separately (default: false)
    #[serde(default)]
    pub split: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            strip_fences: true,
            split: false,
        }
    }
}

/// Settings for `docgrade lab`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabConfig {
    /// Total needed to pass verification (default: 70)
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            passing_score: default_passing_score(),
        }
    }
}

/// Output settings shared by all commands
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
