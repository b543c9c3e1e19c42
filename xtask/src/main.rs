//! xtask - Development tasks for daily-planner

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for daily-planner")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
    }
}

fn generate_cli_docs() {
    let markdown = clap_markdown::help_markdown::<daily_planner::cli::Cli>();

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("planner.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Wrote planner CLI reference to {}", output_path.display());
}
