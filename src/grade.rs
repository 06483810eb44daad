//! Grading pipeline: cleanup, optional splitting, then the rubric.

use serde::Serialize;
use tracing::info;

use crate::cleanup::clean_code_output;
use crate::quality::{QualityReport, Validator};
use crate::segment::split_functions;

/// How a text is turned into graded units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOptions {
    /// Remove an outer markdown fence first
    pub strip_fences: bool,
    /// Grade each function definition on its own
    pub split: bool,
}

impl Default for GradeOptions {
    fn default() -> Self {
        Self {
            strip_fences: true,
            split: false,
        }
    }
}

/// A report together with where its text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedUnit {
    /// File path, or `<stdin>`
    pub source: String,
    /// Function name when the source was split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    /// 1-based line of the function when the source was split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(flatten)]
    pub report: QualityReport,
}

impl GradedUnit {
    /// `source` or `source:line (function)`
    pub fn label(&self) -> String {
        match (&self.function, self.line) {
            (Some(function), Some(line)) => format!("{}:{} ({})", self.source, line, function),
            _ => self.source.clone(),
        }
    }
}

/// Grade `text` read from `source`.
///
/// With `split` set, a text containing no function definitions is graded as
/// a single unit.
pub fn grade_text(
    source: &str,
    text: &str,
    options: GradeOptions,
    validator: &dyn Validator,
) -> Vec<GradedUnit> {
    let text = if options.strip_fences {
        clean_code_output(text)
    } else {
        text.to_string()
    };

    let segments = if options.split {
        split_functions(&text)
    } else {
        Vec::new()
    };

    let units: Vec<GradedUnit> = if segments.is_empty() {
        vec![GradedUnit {
            source: source.to_string(),
            function: None,
            line: None,
            report: validator.validate(&text),
        }]
    } else {
        segments
            .into_iter()
            .map(|segment| GradedUnit {
                source: source.to_string(),
                report: validator.validate(&segment.text),
                function: Some(segment.name),
                line: Some(segment.line),
            })
            .collect()
    };

    for unit in &units {
        info!(
            unit = %unit.label(),
            score = unit.report.score,
            valid = unit.report.valid,
            "graded"
        );
    }

    units
}
