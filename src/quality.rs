//! Documentation quality rubric.
//!
//! Pure functions for grading a block of documented code. Checks are lexical
//! presence tests over the full text; no parse is attempted, so the input may
//! be malformed or partial.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score a report starts from before penalties are applied.
pub const MAX_SCORE: u32 = 100;

/// Matches a `name: type` token inside a function's parameter list.
const PARAM_TYPE_PATTERN: &str = r"def \w+\([^)]*\w+:\s*\w+";

fn param_type_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PARAM_TYPE_PATTERN).expect("parameter type pattern is valid"))
}

/// Whether an issue counts against validity or only against the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Fails validation
    Required,
    /// Lowers the score, never fails validation
    Advisory,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}

/// A single rubric check, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// A triple-quoted docstring delimiter appears somewhere
    Docstring,
    /// `Args:` appears somewhere
    ArgsSection,
    /// `Returns:` appears somewhere
    ReturnsSection,
    /// `->` appears somewhere
    ReturnType,
    /// A `def name(... param: type` shape appears somewhere
    ParamTypes,
    /// `Example` appears somewhere
    ExampleSection,
}

impl Check {
    /// All checks in the order they are evaluated and reported.
    pub const ALL: [Check; 6] = [
        Check::Docstring,
        Check::ArgsSection,
        Check::ReturnsSection,
        Check::ReturnType,
        Check::ParamTypes,
        Check::ExampleSection,
    ];

    /// Points subtracted from the score when the check fires.
    pub fn penalty(self) -> u32 {
        match self {
            Check::Docstring => 30,
            Check::ArgsSection | Check::ReturnsSection => 15,
            Check::ReturnType | Check::ParamTypes => 10,
            Check::ExampleSection => 5,
        }
    }

    /// Whether a firing check invalidates the unit.
    pub fn requirement(self) -> Requirement {
        match self {
            Check::ExampleSection => Requirement::Advisory,
            _ => Requirement::Required,
        }
    }

    /// Stable identifier used in machine-readable output.
    pub fn name(self) -> &'static str {
        match self {
            Check::Docstring => "docstring",
            Check::ArgsSection => "args_section",
            Check::ReturnsSection => "returns_section",
            Check::ReturnType => "return_type",
            Check::ParamTypes => "param_types",
            Check::ExampleSection => "example_section",
        }
    }

    /// Human-readable issue text reported when the check fires.
    pub fn message(self) -> &'static str {
        match self {
            Check::Docstring => "No docstring found",
            Check::ArgsSection => "Missing Args section in docstring",
            Check::ReturnsSection => "Missing Returns section in docstring",
            Check::ReturnType => "Missing return type hint",
            Check::ParamTypes => "Missing parameter type hints",
            Check::ExampleSection => "Consider adding Example section",
        }
    }

    /// Returns true when `text` exhibits the defect this check looks for.
    pub fn fires(self, text: &str) -> bool {
        match self {
            Check::Docstring => !text.contains("\"\"\"") && !text.contains("'''"),
            Check::ArgsSection => !text.contains("Args:"),
            Check::ReturnsSection => !text.contains("Returns:"),
            Check::ReturnType => !text.contains("->"),
            Check::ParamTypes => !param_type_regex().is_match(text),
            Check::ExampleSection => !text.contains("Example"),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A detected documentation defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub check: Check,
    pub message: String,
    pub requirement: Requirement,
}

impl Issue {
    /// Issue reported when `check` fires.
    pub fn from_check(check: Check) -> Self {
        Self {
            check,
            message: check.message().to_string(),
            requirement: check.requirement(),
        }
    }

    /// True when this issue makes the report invalid.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

/// Result of grading one block of documented code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// True iff no required issue fired
    pub valid: bool,
    /// Issues in check order
    pub issues: Vec<Issue>,
    /// Score in `0..=100`
    pub score: u32,
}

impl QualityReport {
    /// Issues that invalidate the report.
    pub fn required_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_required())
    }

    /// Issues that only lower the score.
    pub fn advisory_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_required())
    }

    /// Valid and scoring at least `min_score`.
    pub fn meets(&self, min_score: u32) -> bool {
        self.valid && self.score >= min_score
    }
}

/// Grade `text` against the rubric.
///
/// Total over all inputs: the empty string yields every issue and a score of 15.
///
/// # Examples
///
/// ```
/// use docgrade::quality::validate;
///
/// let report = validate(
///     "def f(x: int) -> int:\n    \"\"\"Double.\n\n    Args:\n        x: Value.\n\n    Returns:\n        Twice x.\n\n    Example:\n        >>> f(2)\n    \"\"\"\n    return x * 2",
/// );
/// assert!(report.valid);
/// assert_eq!(report.score, 100);
/// assert!(report.issues.is_empty());
/// ```
pub fn validate(text: &str) -> QualityReport {
    let mut issues = Vec::new();
    let mut score = MAX_SCORE;

    for check in Check::ALL {
        if check.fires(text) {
            debug!(check = check.name(), penalty = check.penalty(), "check fired");
            score = score.saturating_sub(check.penalty());
            issues.push(Issue::from_check(check));
        }
    }

    let valid = !issues.iter().any(Issue::is_required);

    QualityReport {
        valid,
        issues,
        score,
    }
}

/// Something that can grade documented code.
pub trait Validator {
    fn validate(&self, text: &str) -> QualityReport;
}

/// The fixed heuristic rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubricValidator;

impl Validator for RubricValidator {
    fn validate(&self, text: &str) -> QualityReport {
        validate(text)
    }
}
