//! CLI entry point for the `snet` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use social_network::cli::commands;
use social_network::SocialError;

#[derive(Parser)]
#[command(
    name = "snet",
    about = "Social network CLI — shortest friendship chains between people"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the built-in example network between 1 and 6
    Demo,
    /// Shortest friendship chain between two people (-1 if unreachable)
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// First person
        first: String,
        /// Second person
        second: String,
    },
    /// Summary statistics about the network
    Stats {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Export the network as JSON
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Path {
            file,
            first,
            second,
        } => commands::cmd_path(&file, &first, &second, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            SocialError::Io(_) => 1,
            SocialError::Parse { .. } => 2,
            SocialError::UnknownMember => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
