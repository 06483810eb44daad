//! CLI argument definitions for docgrade.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "docgrade")]
#[command(version)]
#[command(about = "Heuristic quality grading for generated code documentation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    docgrade check documented.py      Grade a file\n    docgrade check --split src/*.py   Grade every function separately\n    docgrade rubric                   Show the checks and their penalties"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Grade documented code against the rubric
    ///
    /// Reads each PATH (glob patterns are expanded); `-` or no path reads stdin.
    /// Exits with status 1 when any graded unit is invalid or below --min-score.
    Check {
        /// Files or glob patterns to grade
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
        /// Output format (defaults to config output.format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Grade each function definition separately
        #[arg(long)]
        split: bool,
        /// Do not strip markdown code fences before grading
        #[arg(long)]
        raw: bool,
        /// Lowest passing score for a valid unit (0-100)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=100))]
        min_score: Option<u32>,
    },
    /// Verify a documentation generator submission
    ///
    /// Recorded generator outputs are read from DIR as add.py, greet.py and
    /// process.py (.txt and .md are also accepted).
    Lab {
        /// Directory of recorded generator outputs
        #[arg(long, value_name = "DIR")]
        outputs: Option<PathBuf>,
        /// Total needed to pass (0-100)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=100))]
        passing_score: Option<u32>,
        /// Output format (defaults to config output.format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show the rubric checks, penalties and kinds
    Rubric {
        /// Output format (defaults to config output.format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate a man page
    Man {
        /// Directory to write docgrade.1 into (default: current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "docgrade",
            "check",
            "a.py",
            "b/*.py",
            "--split",
            "--format",
            "json",
            "--min-score",
            "80",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                paths,
                format,
                split,
                raw,
                min_score,
            } => {
                assert_eq!(paths, ["a.py", "b/*.py"]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(split);
                assert!(!raw);
                assert_eq!(min_score, Some(80));
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_min_score_range() {
        assert!(Cli::try_parse_from(["docgrade", "check", "--min-score", "101"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["docgrade", "rubric", "-vv", "--quiet"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
