//! Centralized UI formatting and color utilities
//!
//! This module provides the icons and colors used for grades and issues
//! throughout the docgrade CLI.

use colored::{ColoredString, Colorize};

use crate::lab::FindingStatus;
use crate::quality::Requirement;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("DOCGRADE_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a graded unit.
///
/// - Passing: ✓ (green)
/// - Valid but below the minimum score: ◐ (yellow)
/// - Invalid: ✗ (red)
pub fn grade_icon(valid: bool, meets_minimum: bool) -> ColoredString {
    match (valid, meets_minimum) {
        (true, true) => "✓".green(),
        (true, false) => "◐".yellow(),
        (false, _) => "✗".red(),
    }
}

/// Returns a colored icon for an issue.
pub fn issue_icon(requirement: Requirement) -> ColoredString {
    match requirement {
        Requirement::Required => "✗".red(),
        Requirement::Advisory => "⚠".yellow(),
    }
}

pub fn finding_icon(status: FindingStatus) -> ColoredString {
    match status {
        FindingStatus::Pass => "✓".green(),
        FindingStatus::Partial => "◐".yellow(),
        FindingStatus::Fail => "✗".red(),
    }
}

/// Color a score by band: 90+ green, 70+ yellow, below red.
pub fn score_text(score: u32) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        90.. => text.green(),
        70..=89 => text.yellow(),
        _ => text.red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (paths, function names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }
}
