//! Utility commands (man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use docgrade::cli::Cli;

/// Generate man page
pub fn cmd_man(out_dir: Option<&PathBuf>, quiet: bool) -> Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir
        .map(|p| p.to_owned())
        .unwrap_or_else(|| PathBuf::from("."));

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let man_path = output_dir.join("docgrade.1");
    std::fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    if !quiet {
        println!("Man page written to: {}", man_path.display());
    }
    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "docgrade", &mut io::stdout());
    Ok(())
}
