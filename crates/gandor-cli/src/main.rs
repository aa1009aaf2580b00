//! CLI frontend for the Gandor world engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "gandor",
    about = "Gandor — an interactive fiction world engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively on stdin/stdout
    Play,

    /// Print the room map as a table, or as JSON
    Map {
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Build the world and validate graph integrity
    Check,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play => commands::play::run(),
        Commands::Map { format } => commands::map::run(&format),
        Commands::Check => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
