//! # docgrade - Documentation quality grading
//!
//! docgrade triages documented source code, typically the output of a
//! documentation generator, against a fixed heuristic rubric. Every check is a
//! lexical presence test so free-form or malformed text is still graded.
//!
//! ## Modules
//!
//! - [`quality`] - The rubric, issues and [`quality::QualityReport`]
//! - [`cleanup`] - Stripping markdown fences from generated output
//! - [`segment`] - Lexical splitting of a file into function segments
//! - [`grade`] - Cleanup, splitting and grading of a whole input
//! - [`lab`] - Lab verification of a generator/validator submission
//! - [`config`] - Configuration loading and merging
//!
//! ## Example
//!
//! ```
//! use docgrade::quality::validate;
//!
//! let report = validate("def add(a, b): return a + b");
//! assert!(!report.valid);
//! assert_eq!(report.score, 15);
//! ```

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod formatters;
pub mod grade;
pub mod lab;
pub mod quality;
pub mod segment;
pub mod ui;

/// Default path constants for the docgrade directory structure.
pub mod paths {
    /// Project configuration file: `.docgrade/config.md`
    pub const PROJECT_CONFIG: &str = ".docgrade/config.md";
    /// Global configuration file, relative to `$HOME`
    pub const GLOBAL_CONFIG: &str = ".config/docgrade/config.md";
}
