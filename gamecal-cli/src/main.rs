mod commands;
mod config;
mod igdb;
mod render;
mod tui;
mod window;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamecal")]
#[command(about = "Keep an .ics calendar of upcoming game releases from IGDB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch releases and rewrite the calendar file
    Sync {
        /// Write the calendar to this path instead of the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List every change instead of compact counts
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show what would change without writing anything
    Status {
        /// Diff against the calendar at this path instead of the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List every change instead of compact counts
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { output, verbose } => commands::sync::run(output, verbose).await,
        Commands::Status { output, verbose } => commands::status::run(output, verbose).await,
    }
}
