//! CLI entry point and command handlers for docgrade.

mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docgrade::cli::{Cli, Commands};
use docgrade::config::Config;
use docgrade::ui;

/// Environment variable holding a tracing filter directive, e.g. `docgrade=debug`.
const LOG_ENV: &str = "DOCGRADE_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let quiet = cli.quiet || ui::is_quiet();

    let passed = match cli.command {
        Commands::Check {
            paths,
            format,
            split,
            raw,
            min_score,
        } => {
            let config = Config::load()?;
            cmd::check::cmd_check(
                &config,
                cmd::check::CheckArgs {
                    paths,
                    format,
                    split,
                    raw,
                    min_score,
                },
                quiet,
            )?
        }
        Commands::Lab {
            outputs,
            passing_score,
            format,
        } => {
            let config = Config::load()?;
            cmd::lab::cmd_lab(&config, outputs.as_deref(), passing_score, format)?
        }
        Commands::Rubric { format } => {
            let config = Config::load()?;
            cmd::rubric::cmd_rubric(format.unwrap_or(config.output.format))?;
            true
        }
        Commands::Completion { shell } => {
            cmd::util::cmd_completion(shell)?;
            true
        }
        Commands::Man { out_dir } => {
            cmd::util::cmd_man(out_dir.as_ref(), quiet)?;
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `DOCGRADE_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("docgrade={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
