//! `docgrade check`: grade files or stdin against the rubric.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use docgrade::config::{Config, OutputFormat};
use docgrade::formatters::{format_summary, format_unit, to_json};
use docgrade::grade::{grade_text, GradeOptions, GradedUnit};
use docgrade::quality::RubricValidator;

/// Label used for text read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

pub struct CheckArgs {
    pub paths: Vec<String>,
    pub format: Option<OutputFormat>,
    pub split: bool,
    pub raw: bool,
    pub min_score: Option<u32>,
}

/// Where one piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Stdin => STDIN_LABEL.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read from stdin")?;
                Ok(text)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Grade every input and print the results. Returns whether all units passed.
pub fn cmd_check(config: &Config, args: CheckArgs, quiet: bool) -> Result<bool> {
    let options = GradeOptions {
        strip_fences: config.check.strip_fences && !args.raw,
        split: config.check.split || args.split,
    };
    let min_score = args.min_score.unwrap_or(config.check.min_score);
    let format = args.format.unwrap_or(config.output.format);

    let inputs = resolve_inputs(&args.paths)?;
    let units = grade_inputs(&inputs, options)?;
    let passed = all_passed(&units, min_score);

    match format {
        OutputFormat::Json => println!("{}", to_json(&units)?),
        OutputFormat::Text => {
            for unit in &units {
                println!("{}", format_unit(unit, min_score));
            }
            if !quiet {
                println!("{}", format_summary(&units, min_score));
            }
        }
    }

    Ok(passed)
}

/// Turn CLI path arguments into inputs. Glob patterns are expanded and must
/// match at least one file.
pub fn resolve_inputs(paths: &[String]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![Input::Stdin]);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path == "-" {
            inputs.push(Input::Stdin);
        } else if is_glob_pattern(path) {
            let matches = expand_glob(path)?;
            if matches.is_empty() {
                anyhow::bail!("No files match pattern: {}", path);
            }
            inputs.extend(matches.into_iter().map(Input::File));
        } else {
            inputs.push(Input::File(PathBuf::from(path)));
        }
    }

    if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
        anyhow::bail!("stdin ('-') can only be given once");
    }

    Ok(inputs)
}

fn is_glob_pattern(path: &str) -> bool {
    path.contains(['*', '?', '['])
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries =
        glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!(path = %path.display(), "skipping non-file match"),
            Err(e) => warn!("Skipping unreadable path: {}", e),
        }
    }
    Ok(files)
}

/// Read and grade every input, in order.
pub fn grade_inputs(inputs: &[Input], options: GradeOptions) -> Result<Vec<GradedUnit>> {
    let mut units = Vec::new();
    for input in inputs {
        let text = input.read()?;
        units.extend(grade_text(&input.label(), &text, options, &RubricValidator));
    }
    Ok(units)
}

pub fn all_passed(units: &[GradedUnit], min_score: u32) -> bool {
    units.iter().all(|unit| unit.report.meets(min_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GOOD: &str = "def f(x: int) -> int:\n    '''Args: x. Returns: x. Example: f(1)'''\n    return x";

    #[test]
    fn test_no_paths_means_stdin() {
        assert_eq!(resolve_inputs(&[]).unwrap(), vec![Input::Stdin]);
        assert_eq!(resolve_inputs(&["-".to_string()]).unwrap(), vec![Input::Stdin]);
    }

    #[test]
    fn test_stdin_only_once() {
        assert!(resolve_inputs(&["-".to_string(), "-".to_string()]).is_err());
    }

    #[test]
    fn test_glob_expansion() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.py"), GOOD).unwrap();
        fs::write(tmp.path().join("b.py"), "").unwrap();
        fs::write(tmp.path().join("c.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("d.py")).unwrap();

        let pattern = format!("{}/*.py", tmp.path().display());
        let inputs = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::File(tmp.path().join("a.py")),
                Input::File(tmp.path().join("b.py")),
            ]
        );
    }

    #[test]
    fn test_glob_without_matches_fails() {
        let tmp = TempDir::new().unwrap();
        let pattern = format!("{}/*.py", tmp.path().display());
        let err = resolve_inputs(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No files match pattern"));
    }

    #[test]
    fn test_plain_paths_kept_in_order() {
        let inputs = resolve_inputs(&["z.py".to_string(), "a.py".to_string()]).unwrap();
        assert_eq!(
            inputs,
            vec![Input::File("z.py".into()), Input::File("a.py".into())]
        );
    }

    #[test]
    fn test_grade_inputs_and_pass_status() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.py");
        let bad = tmp.path().join("bad.py");
        fs::write(&good, GOOD).unwrap();
        fs::write(&bad, "def f(x): return x").unwrap();

        let units = grade_inputs(&[Input::File(good.clone())], GradeOptions::default()).unwrap();
        assert_eq!(units[0].report.score, 100);
        assert!(all_passed(&units, 100));

        let units = grade_inputs(
            &[Input::File(good), Input::File(bad)],
            GradeOptions::default(),
        )
        .unwrap();
        assert_eq!(units.len(), 2);
        assert!(!all_passed(&units, 0));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.py");
        let err = grade_inputs(&[Input::File(missing)], GradeOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
