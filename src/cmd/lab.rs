//! `docgrade lab`: verify a documentation generator submission.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use docgrade::config::{Config, OutputFormat};
use docgrade::formatters::{format_lab_outcome, to_json};
use docgrade::lab::{run_verification, DocGenerator, LabOutcome, RecordedGenerator};
use docgrade::quality::RubricValidator;

/// Run the verification and print the outcome. Returns whether it passed.
pub fn cmd_lab(
    config: &Config,
    outputs: Option<&Path>,
    passing_score: Option<u32>,
    format: Option<OutputFormat>,
) -> Result<bool> {
    let passing_score = passing_score.unwrap_or(config.lab.passing_score);
    let format = format.unwrap_or(config.output.format);

    let outcome = verify(outputs, passing_score)?;

    match format {
        OutputFormat::Text => println!("{}", format_lab_outcome(&outcome)),
        OutputFormat::Json => println!("{}", to_json(&outcome)?),
    }

    Ok(outcome.passed)
}

/// Grade recorded outputs in `outputs` together with the built-in rubric.
pub fn verify(outputs: Option<&Path>, passing_score: u32) -> Result<LabOutcome> {
    let generator = match outputs {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Outputs directory not found: {}", dir.display());
            }
            info!(dir = %dir.display(), "using recorded generator outputs");
            Some(RecordedGenerator::new(dir))
        }
        None => None,
    };

    Ok(run_verification(
        generator.as_ref().map(|g| g as &dyn DocGenerator),
        Some(&RubricValidator),
        passing_score,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgrade::lab::PASSING_SCORE;
    use std::fs;
    use tempfile::TempDir;

    const DOCUMENTED: &str = "def f(a: int) -> int:\n    \"\"\"Args:\n        a: x\n    \"\"\"";

    #[test]
    fn test_verify_full_outputs() {
        let tmp = TempDir::new().unwrap();
        for id in ["add", "greet", "process"] {
            fs::write(tmp.path().join(format!("{}.py", id)), DOCUMENTED).unwrap();
        }
        let outcome = verify(Some(tmp.path()), PASSING_SCORE).unwrap();
        assert_eq!(outcome.score, 100);
        assert!(outcome.passed);
    }

    #[test]
    fn test_verify_missing_recording_counts_as_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("add.py"), DOCUMENTED).unwrap();
        let outcome = verify(Some(tmp.path()), PASSING_SCORE).unwrap();
        // 10 presence + 20 add + 30 self-check
        assert_eq!(outcome.score, 60);
        assert!(!outcome.passed);
    }

    #[test]
    fn test_verify_without_outputs() {
        let outcome = verify(None, PASSING_SCORE).unwrap();
        assert_eq!(outcome.score, 35);
    }

    #[test]
    fn test_verify_missing_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(verify(Some(&tmp.path().join("nope")), PASSING_SCORE).is_err());
    }
}
