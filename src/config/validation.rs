//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::{CheckConfig, LabConfig};
use super::Config;
use crate::quality::MAX_SCORE;

impl CheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_score > MAX_SCORE {
            anyhow::bail!(
                "check.min_score must be at most {}, got {}",
                MAX_SCORE,
                self.min_score
            );
        }
        Ok(())
    }
}

impl LabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.passing_score > MAX_SCORE {
            anyhow::bail!(
                "lab.passing_score must be at most {}, got {}",
                MAX_SCORE,
                self.passing_score
            );
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.check.validate()?;
        self.lab.validate()
    }
}
