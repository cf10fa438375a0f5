// ABOUTME: gian CLI entry point for draft document generation
// ABOUTME: Provides subcommands: init, generate, paste

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gian CLI - Vehicle rental draft document (기안서) generator
#[derive(Parser)]
#[command(name = "gian")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a blank draft request file to fill in
    Init {
        /// Date entry mode: single, range, or multi
        #[arg(long, default_value = "single")]
        mode: String,
        /// Where to write the request skeleton
        #[arg(long, default_value = "draft.json")]
        output: PathBuf,
        /// Overwrite an existing request file
        #[arg(long)]
        force: bool,
        /// Preview actions without executing
        #[arg(long)]
        dry_run: bool,
    },
    /// Render the draft document from a request file
    Generate {
        /// Path to the draft request JSON file
        #[arg(default_value = "draft.json")]
        file: PathBuf,
        /// Where to write the finished document
        #[arg(long, default_value = gian_lib::DRAFT_FILE_NAME)]
        output: PathBuf,
        /// Reference date as 8 digits (YYYYMMDD), defaults to the system date
        #[arg(long)]
        today: Option<String>,
        /// Require every field, including cost and budget limit
        #[arg(long)]
        extended: bool,
        /// Preview the document without writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Render the draft document from one pasted tab-separated line
    Paste {
        /// The tab-separated line (reads one line from stdin when omitted)
        line: Option<String>,
        /// Where to write the finished document
        #[arg(long, default_value = gian_lib::DRAFT_FILE_NAME)]
        output: PathBuf,
        /// Reference date as 8 digits (YYYYMMDD), defaults to the system date
        #[arg(long)]
        today: Option<String>,
        /// Preview the document without writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            mode,
            output,
            force,
            dry_run,
        } => commands::init::run(&commands::init::InitConfig {
            mode,
            output,
            force,
            dry_run,
            verbose: cli.verbose,
        }),
        Commands::Generate {
            file,
            output,
            today,
            extended,
            dry_run,
        } => commands::generate::run(&commands::generate::GenerateConfig {
            file,
            output,
            today,
            extended,
            dry_run,
            verbose: cli.verbose,
        }),
        Commands::Paste {
            line,
            output,
            today,
            dry_run,
        } => commands::paste::run(&commands::paste::PasteConfig {
            line,
            output,
            today,
            dry_run,
            verbose: cli.verbose,
        }),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
