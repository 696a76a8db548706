//! Terminal report for merge runs.
//!
//! All console styling lives here so the merge engine stays headless; tests
//! and library callers never trigger console output. Styling uses the
//! `colored` crate and is process-wide stateless.

use colored::Colorize;

use crate::vault_merge::{Conflict, MergeOutput};

/// Skipped duplicates listed individually before truncating the list.
const SKIPPED_DISPLAY_LIMIT: usize = 10;

/// Print a banner header.
pub fn print_header(text: &str) {
    let rule = "=".repeat(60);
    println!("\n{}", rule.magenta().bold());
    println!("{}", format!(" {text}").magenta().bold());
    println!("{}", rule.magenta().bold());
}

/// Print the opening banner with both input file names.
pub fn print_start(base: &str, incoming: &str) {
    print_header("STARTING VAULT MERGE");
    println!("{}", format!("Base file:     {base}").cyan());
    println!("{}", format!("Incoming file: {incoming}").cyan());
}

/// Print the skipped-duplicate list, truncated to the first
/// [`SKIPPED_DISPLAY_LIMIT`] entries.
pub fn print_skipped(skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("Duplicates skipped (100% identical): {}", skipped.len())
            .yellow()
            .bold()
    );
    for name in skipped.iter().take(SKIPPED_DISPLAY_LIMIT) {
        println!("   - {name}");
    }
    if skipped.len() > SKIPPED_DISPLAY_LIMIT {
        println!("   ... and {} more.", skipped.len() - SKIPPED_DISPLAY_LIMIT);
    }
}

/// Print the added-record list, annotating entries that conflict with a
/// base record.
pub fn print_added(added: &[String], conflicts: &[Conflict]) {
    if added.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("New entries added: {}", added.len()).green().bold()
    );
    for name in added {
        if conflicts.iter().any(|c| c.name == *name) {
            println!(
                "   ! {} {}",
                name,
                "[potential conflict: same name, different content]".red()
            );
        } else {
            println!("   + {name}");
        }
    }
}

/// Print the final summary: totals, conflict warning, output file name.
pub fn print_summary(output: &MergeOutput, output_file: &str) {
    print_header("FINAL RESULT");
    println!(
        "Base entries:       {}",
        output.stats.base_count.to_string().bold()
    );
    println!(
        "Incoming entries:   {}",
        output.incoming_count().to_string().bold()
    );
    println!("-----------------------------------");
    println!(
        "{}",
        format!("Duplicates removed: {}", output.stats.skipped_count).yellow()
    );
    println!(
        "{}",
        format!("Real additions:     {}", output.stats.added_count).green()
    );
    println!("-----------------------------------");
    println!(
        "{}",
        format!("TOTAL:              {} entries", output.total_count()).cyan()
    );

    if !output.conflicts.is_empty() {
        println!(
            "\n{}",
            format!(
                "WARNING: {} entries share a name with a base entry but differ in content.",
                output.conflicts.len()
            )
            .red()
            .bold()
        );
        println!("They were ADDED, so those sites now have two entries in the vault.");
        println!("Review them manually after import:");
        for conflict in &output.conflicts {
            println!("   - {} (user: {})", conflict.name, conflict.username);
        }
    }

    println!("\nOutput written to: {}", output_file.bold());
}
