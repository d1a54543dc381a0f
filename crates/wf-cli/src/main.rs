//! CLI frontend for the Wayfarer text-adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer — a small engine for text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively
    Play {
        /// World file to load
        file: PathBuf,
    },

    /// Load a world file and report diagnostics
    Check {
        /// World file to load
        file: PathBuf,
    },

    /// List the world files in a directory
    Worlds {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Describe a room, a thing, or the player by name
    Show {
        /// World file to load
        file: PathBuf,

        /// Name to look up
        name: String,
    },

    /// Export a world to a different format
    Export {
        /// World file to load
        file: PathBuf,

        /// Output format: json
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a starter world file
    New {
        /// Path of the file to create
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { file } => commands::play::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Worlds { dir } => commands::worlds::run(&dir),
        Commands::Show { file, name } => commands::show::run(&file, &name),
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
        Commands::New { path } => commands::new::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
