//! Lab verification for documentation generator submissions.
//!
//! A submission consists of a documentation generator and a validator. The
//! generator is exercised against a fixed set of undocumented functions and its
//! output checked for basic quality indicators; the validator must accept a
//! known-good sample and reject a known-bad one. No model is ever called here:
//! generators are supplied by the caller, typically as recorded outputs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::quality::Validator;

/// Minimum total needed to pass verification.
pub const PASSING_SCORE: u32 = 70;

/// Points awarded for each component that is present.
const PRESENCE_POINTS: u32 = 5;
/// Points for a generated output carrying every indicator.
const FULL_CASE_POINTS: u32 = 20;
/// Points for a generated output carrying two of three indicators.
const PARTIAL_CASE_POINTS: u32 = 10;
/// Points for each validator self-check.
const SELF_CHECK_POINTS: u32 = 15;

/// An undocumented function the generator has to document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabCase {
    /// File stem of the recorded output
    pub id: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub const LAB_CASES: [LabCase; 3] = [
    LabCase {
        id: "add",
        description: "Simple function",
        code: "def add(a, b): return a + b",
    },
    LabCase {
        id: "greet",
        description: "Function with default",
        code: "def greet(name, title='Mr'): return f'Hello, {title} {name}'",
    },
    LabCase {
        id: "process",
        description: "Complex signature",
        code: "def process(data, callback, **kwargs): return callback(data, **kwargs)",
    },
];

/// Sample a correct validator must accept.
pub const GOOD_SAMPLE: &str = r#"def add(a: int, b: int) -> int:
    """Add two numbers together.

    Args:
        a: First number.
        b: Second number.

    Returns:
        Sum of a and b.
    """
    return a + b"#;

/// Sample a correct validator must reject.
pub const BAD_SAMPLE: &str = "def add(a, b): return a + b";

/// Produces documented code from undocumented code.
pub trait DocGenerator {
    fn generate(&self, code: &str) -> Result<String>;
}

/// Serves generator outputs recorded ahead of time, one file per lab case.
#[derive(Debug, Clone)]
pub struct RecordedGenerator {
    dir: PathBuf,
}

impl RecordedGenerator {
    /// Extensions tried, in order, for `<case id>.<ext>`.
    pub const EXTENSIONS: [&'static str; 3] = ["py", "txt", "md"];

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn recording_path(&self, case: &LabCase) -> Option<PathBuf> {
        Self::EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", case.id, ext)))
            .find(|path| path.is_file())
    }
}

impl DocGenerator for RecordedGenerator {
    fn generate(&self, code: &str) -> Result<String> {
        if code.trim().is_empty() {
            anyhow::bail!("Code cannot be empty");
        }

        let case = LAB_CASES
            .iter()
            .find(|case| case.code == code)
            .with_context(|| format!("No lab case matches input: {}", code))?;

        let path = self.recording_path(case).with_context(|| {
            format!(
                "No recorded output for '{}' in {}",
                case.id,
                self.dir.display()
            )
        })?;

        debug!(case = case.id, path = %path.display(), "reading recorded output");
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read recorded output {}", path.display()))
    }
}

/// Basic quality indicators looked for in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickCheck {
    pub has_docstring: bool,
    pub has_type_hints: bool,
    pub has_args: bool,
}

impl QuickCheck {
    pub fn passed(&self) -> usize {
        [self.has_docstring, self.has_type_hints, self.has_args]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

pub fn quick_check(text: &str) -> QuickCheck {
    QuickCheck {
        has_docstring: text.contains("\"\"\"") || text.contains("'''"),
        has_type_hints: text.contains("->"),
        has_args: text.contains("Args:") || text.to_lowercase().contains("args:"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    Pass,
    Partial,
    Fail,
}

/// One line of the verification report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub status: FindingStatus,
    pub message: String,
}

impl Finding {
    fn new(status: FindingStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Result of a full verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabOutcome {
    pub passed: bool,
    pub score: u32,
    pub passing_score: u32,
    pub findings: Vec<Finding>,
}

/// Verify a submission. A missing component scores nothing for every step
/// that needs it.
pub fn run_verification(
    generator: Option<&dyn DocGenerator>,
    validator: Option<&dyn Validator>,
    passing_score: u32,
) -> LabOutcome {
    let mut score = 0;
    let mut findings = Vec::new();

    for (present, name) in [
        (generator.is_some(), "generator"),
        (validator.is_some(), "validator"),
    ] {
        if present {
            score += PRESENCE_POINTS;
            findings.push(Finding::new(
                FindingStatus::Pass,
                format!("Documentation {} found", name),
            ));
        } else {
            findings.push(Finding::new(
                FindingStatus::Fail,
                format!("Documentation {} not found", name),
            ));
        }
    }

    match generator {
        Some(generator) => {
            let (points, case_findings) = grade_generator(generator);
            score += points;
            findings.extend(case_findings);
        }
        None => findings.push(Finding::new(
            FindingStatus::Fail,
            "Generation skipped: no generator",
        )),
    }

    match validator {
        Some(validator) => {
            let (points, check_findings) = grade_validator(validator);
            score += points;
            findings.extend(check_findings);
        }
        None => findings.push(Finding::new(
            FindingStatus::Fail,
            "Validation skipped: no validator",
        )),
    }

    let passed = score >= passing_score;
    info!(score, passing_score, passed, "lab verification finished");

    LabOutcome {
        passed,
        score,
        passing_score,
        findings,
    }
}

fn grade_generator(generator: &dyn DocGenerator) -> (u32, Vec<Finding>) {
    let mut score = 0;
    let mut findings = Vec::new();

    for case in &LAB_CASES {
        let output = match generator.generate(case.code) {
            Ok(output) => output,
            Err(e) => {
                findings.push(Finding::new(
                    FindingStatus::Fail,
                    format!("{}: Error - {:#}", case.description, e),
                ));
                continue;
            }
        };

        let passed = quick_check(&output).passed();
        debug!(case = case.id, passed, "graded generated output");

        let finding = match passed {
            3 => {
                score += FULL_CASE_POINTS;
                Finding::new(
                    FindingStatus::Pass,
                    format!("{}: All checks passed", case.description),
                )
            }
            2 => {
                score += PARTIAL_CASE_POINTS;
                Finding::new(
                    FindingStatus::Partial,
                    format!("{}: Partial pass ({}/3 checks)", case.description, passed),
                )
            }
            _ => Finding::new(
                FindingStatus::Fail,
                format!("{}: Failed ({}/3 checks)", case.description, passed),
            ),
        };
        findings.push(finding);
    }

    (score, findings)
}

fn grade_validator(validator: &dyn Validator) -> (u32, Vec<Finding>) {
    let mut score = 0;
    let mut findings = Vec::new();

    if validator.validate(GOOD_SAMPLE).valid {
        score += SELF_CHECK_POINTS;
        findings.push(Finding::new(
            FindingStatus::Pass,
            "Correctly validated good documentation",
        ));
    } else {
        findings.push(Finding::new(
            FindingStatus::Fail,
            "Failed to validate correct documentation",
        ));
    }

    if validator.validate(BAD_SAMPLE).valid {
        findings.push(Finding::new(
            FindingStatus::Fail,
            "Failed to reject bad documentation",
        ));
    } else {
        score += SELF_CHECK_POINTS;
        findings.push(Finding::new(
            FindingStatus::Pass,
            "Correctly rejected bad documentation",
        ));
    }

    (score, findings)
}
