use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rankbook")]
#[command(about = "Imports player files and serves ranking snapshots")]
#[command(version)]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Error log for rejected rows (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a delimited player file and import it as a new snapshot
    Import(ImportArgs),

    /// List available ranking snapshots, newest first
    Snapshots(SnapshotsArgs),

    /// Show the ranking for one snapshot, ordered by score
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Input file: comma-separated, header line plus name,level,score rows
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SnapshotsArgs {
    /// Output as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Import timestamp of the snapshot (defaults to the most recent)
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
