//! `leadsync reconcile` — extract rows missing from a reference CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{builder::Builder, settings::Style};

use leadsync_core::{reconcile, Table};

/// Rows shown in the console preview of the output table.
const PREVIEW_ROWS: usize = 25;

/// Arguments for `leadsync reconcile`.
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// CSV holding the keys that already exist.
    pub reference: PathBuf,

    /// CSV to filter — rows with unknown keys are extracted.
    pub candidate: PathBuf,

    /// Key column name; must exist in both files.
    #[arg(long)]
    pub key: String,

    /// Output CSV path (default: missing-<candidate filename>).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ReconcileArgs {
    pub fn run(self) -> Result<()> {
        let reference = Table::read(&self.reference)
            .with_context(|| format!("reading reference {}", self.reference.display()))?;
        let candidate = Table::read(&self.candidate)
            .with_context(|| format!("reading candidate {}", self.candidate.display()))?;

        let existing = reconcile::key_set(&reference, &self.key)?;
        println!(
            "Loaded {} unique '{}' keys from {}",
            existing.len(),
            self.key,
            self.reference.display()
        );

        let missing = reconcile::missing_rows(&reference, &candidate, &self.key)?;
        println!(
            "Checked {} candidate rows from {}",
            candidate.len(),
            self.candidate.display()
        );

        if missing.is_empty() {
            // Normal outcome, not an error; nothing is written.
            println!("{} no missing rows — every key already present", "✓".green());
            return Ok(());
        }

        let output = self.output.unwrap_or_else(|| default_output(&self.candidate));
        missing
            .write(&output)
            .with_context(|| format!("writing {}", output.display()))?;

        println!(
            "{} {} missing rows written to {}",
            "✓".green(),
            missing.len(),
            output.display()
        );
        print_preview(&missing);
        Ok(())
    }
}

/// `missing-<candidate filename>` next to the current directory.
fn default_output(candidate: &std::path::Path) -> PathBuf {
    let name = candidate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "candidate.csv".to_string());
    PathBuf::from(format!("missing-{name}"))
}

fn print_preview(table: &Table) {
    let mut builder = Builder::default();
    builder.set_header(table.headers.clone());
    for row in table.rows.iter().take(PREVIEW_ROWS) {
        builder.push_record(row.clone());
    }
    let mut preview = builder.build();
    preview.with(Style::rounded());
    println!("{preview}");

    if table.len() > PREVIEW_ROWS {
        println!("… and {} more rows", table.len() - PREVIEW_ROWS);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
