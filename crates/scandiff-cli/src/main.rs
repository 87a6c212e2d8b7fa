//! scandiff CLI
//!
//! Command-line interface for comparing scan reports

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "scandiff")]
#[command(about = "scandiff - Side-by-side comparison of app scan reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the scan records in one or more JSON files
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
