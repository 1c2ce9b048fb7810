//! Leadsync — CSV reconciliation and lead synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! leadsync reconcile <REFERENCE> <CANDIDATE> --key <COLUMN> [--output <PATH>]
//! leadsync sync <WORKSPACE> [--config <PATH>] [--dry-run]
//! leadsync link <WORKSPACE> [--config <PATH>]
//! leadsync verify <WORKSPACE> [--config <PATH>]
//! ```

mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{link::LinkArgs, reconcile::ReconcileArgs, sync::SyncArgs, verify::VerifyArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "leadsync",
    version,
    about = "Reconcile CSV key lists and sync lead records between remote systems",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract candidate CSV rows whose key is absent from a reference CSV.
    Reconcile(ReconcileArgs),

    /// Replace a workspace's store rows from the remote listing.
    Sync(SyncArgs),

    /// Backfill conversation URLs and remote ids on existing store rows.
    Link(LinkArgs),

    /// Report the store's current row count for a workspace.
    Verify(VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Reconcile(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::Link(args) => args.run(),
        Commands::Verify(args) => args.run(),
    }
}
