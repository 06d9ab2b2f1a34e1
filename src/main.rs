use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recon_tools::config::ReconConfig;
use recon_tools::store::SnapshotStore;
use recon_tools::sync;
use recon_tools::{ReconError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    match cli.command {
        Command::Reconcile(args) => execute_reconcile(args),
    }
}

fn execute_reconcile(args: ReconcileArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ReconError::MissingInput(args.input));
    }
    if !args.store.exists() {
        return Err(ReconError::MissingInput(args.store));
    }

    let store = SnapshotStore::from_path(&args.store)?;
    tracing::info!(records = store.len(), "store snapshot loaded");
    let mut config = ReconConfig::default();
    if let Some(sheet) = args.sheet {
        config.sheet_name = sheet;
    }

    let summary = sync::reconcile(&args.input, &store, &config, &args.output_dir)?;
    println!(
        "matched {} rows ({}), unmatched {} rows ({})",
        summary.matched_rows,
        summary.script_path.display(),
        summary.unmatched_rows,
        summary.unmatched_path.display()
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ReconError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reconcile a prospect spreadsheet against the authoritative company table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match spreadsheet rows against the store snapshot and emit the
    /// update script and unmatched-rows workbook.
    Reconcile(ReconcileArgs),
}

#[derive(clap::Args)]
struct ReconcileArgs {
    /// Source workbook with the prospect export.
    #[arg(long)]
    input: PathBuf,

    /// JSON snapshot of the authoritative table.
    #[arg(long)]
    store: PathBuf,

    /// Directory receiving both artifacts.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Override of the configured sheet name.
    #[arg(long)]
    sheet: Option<String>,
}
