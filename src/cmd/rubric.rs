//! `docgrade rubric`: print the checks.

use anyhow::Result;

use docgrade::config::OutputFormat;
use docgrade::formatters::{format_rubric, rubric_json};

pub fn cmd_rubric(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_rubric()),
        OutputFormat::Json => println!("{}", rubric_json()?),
    }
    Ok(())
}
