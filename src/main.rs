//! vault-fusion CLI - merge two vault export files into one.
//!
//! Usage:
//!   vault-fusion base.json incoming.json
//!
//! Writes the merged vault to `merged-vault.json` in the current directory
//! and prints a colored classification report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use vault_fusion::{merge_vaults, report, VaultDocument};

/// Fixed name of the merged output artifact.
const OUTPUT_FILE: &str = "merged-vault.json";

/// Merge two exported vault files, skipping exact duplicates and flagging
/// name conflicts
#[derive(Parser)]
#[command(name = "vault-fusion")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base export file; fully retained and used for output metadata
    base: PathBuf,

    /// Incoming export file; merged into the base
    incoming: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("vault_fusion={log_level}"))
            }),
        )
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    report::print_start(
        &cli.base.display().to_string(),
        &cli.incoming.display().to_string(),
    );

    let base = VaultDocument::load(&cli.base)
        .with_context(|| format!("failed to read {}", cli.base.display()))?;
    let incoming = VaultDocument::load(&cli.incoming)
        .with_context(|| format!("failed to read {}", cli.incoming.display()))?;

    debug!(
        base_items = base.item_count(),
        incoming_items = incoming.item_count(),
        "loaded export files"
    );

    let output = merge_vaults(&base, &incoming);

    report::print_skipped(&output.skipped);
    report::print_added(&output.added, &output.conflicts);

    output
        .document
        .save(OUTPUT_FILE)
        .with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

    report::print_summary(&output, OUTPUT_FILE);
    Ok(())
}
