mod commands;
mod harness;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::RunCommand;

/// Hangarboard CLI - hangar booking grid scenario runner
#[derive(Debug, Parser)]
#[command(
    name = "hangarboard",
    version,
    about = "Hangar booking grid scenario runner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute booking scenarios
    Run(RunCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
