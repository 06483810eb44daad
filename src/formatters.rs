//! Output formatters for grading results
//!
//! Provides formatters that turn graded units, lab outcomes and the rubric
//! into text or JSON output.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::grade::GradedUnit;
use crate::lab::LabOutcome;
use crate::quality::{Check, Requirement};
use crate::ui;

/// Format one graded unit as a text block.
pub fn format_unit(unit: &GradedUnit, min_score: u32) -> String {
    let report = &unit.report;
    let mut output = vec![format!(
        "{} {} {}",
        ui::grade_icon(report.valid, report.meets(min_score)),
        ui::colors::identifier(&unit.label()),
        ui::score_text(report.score)
    )];

    for issue in &report.issues {
        output.push(format!(
            "    {} {}",
            ui::issue_icon(issue.requirement),
            issue.message
        ));
    }

    if report.valid && report.score < min_score {
        output.push(format!(
            "    {} score below minimum of {}",
            "→".cyan(),
            min_score
        ));
    }

    output.join("\n")
}

/// Summary line across every graded unit.
pub fn format_summary(units: &[GradedUnit], min_score: u32) -> String {
    let total = units.len();
    let passed = units.iter().filter(|u| u.report.meets(min_score)).count();
    let failed = total - passed;

    let mut line = format!("{} graded", total);
    if passed > 0 {
        line.push_str(&format!(", {} {}", passed, "passed".green()));
    }
    if failed > 0 {
        line.push_str(&format!(", {} {}", failed, "failed".red()));
    }

    format!(
        "{}\n{}\n{}",
        "━".repeat(60).cyan(),
        line,
        "━".repeat(60).cyan()
    )
}

/// Format a lab verification outcome as a text report.
pub fn format_lab_outcome(outcome: &LabOutcome) -> String {
    let rule = "=".repeat(60);
    let mut output = vec![
        rule.clone(),
        "DOCUMENTATION LAB VERIFICATION".bold().to_string(),
        rule.clone(),
    ];

    for finding in &outcome.findings {
        output.push(format!(
            "  {} {}",
            ui::finding_icon(finding.status),
            finding.message
        ));
    }

    let status = if outcome.passed {
        ui::colors::success("PASSED")
    } else {
        ui::colors::error("NEEDS WORK")
    };

    output.push(rule.clone());
    output.push(format!(
        "FINAL SCORE: {}/100 (passing: {})",
        outcome.score, outcome.passing_score
    ));
    output.push(format!("STATUS: {}", status));
    output.push(rule);

    output.join("\n")
}

/// Format the rubric as an aligned table.
pub fn format_rubric() -> String {
    let mut output = vec![format!(
        "{:<3} {:<16} {:>7}  {:<9} {}",
        "#", "CHECK", "PENALTY", "KIND", "MESSAGE"
    )];

    for (idx, check) in Check::ALL.iter().enumerate() {
        let kind = match check.requirement() {
            Requirement::Required => "required".to_string(),
            Requirement::Advisory => ui::colors::warning("advisory").to_string(),
        };
        output.push(format!(
            "{:<3} {:<16} {:>7}  {:<9} {}",
            idx + 1,
            check.name(),
            format!("-{}", check.penalty()),
            kind,
            check.message()
        ));
    }

    output.join("\n")
}

#[derive(Serialize)]
struct RubricEntry {
    check: Check,
    penalty: u32,
    requirement: Requirement,
    message: &'static str,
}

/// The rubric as JSON.
pub fn rubric_json() -> Result<String> {
    let entries: Vec<RubricEntry> = Check::ALL
        .iter()
        .map(|&check| RubricEntry {
            check,
            penalty: check.penalty(),
            requirement: check.requirement(),
            message: check.message(),
        })
        .collect();

    to_json(&entries)
}

/// Pretty-print any serializable value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
