use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{add, commit, init, log, show, status};

#[derive(Parser)]
#[command(name = "groot")]
#[command(version, about = "A minimal single-user version-control engine", long_about = None)]
struct Cli {
    /// Work-tree root containing the .groot directory (defaults to current directory)
    #[arg(short, long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty repository (safe to run twice)
    Init,

    /// Stage a file for the next commit
    Add {
        /// File to stage
        file: String,
    },

    /// Commit staged files
    Commit {
        /// Commit message
        message: String,
    },

    /// Show commit history, newest first
    Log {
        /// Number of commits to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the changes a commit made against its parent
    Show {
        /// Commit hash (defaults to HEAD)
        commit_hash: Option<String>,
    },

    /// Show staged files
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = cli.repo;

    match cli.command {
        Commands::Init => {
            init::run(repo)?;
        }
        Commands::Add { file } => {
            add::run(file, repo)?;
        }
        Commands::Commit { message } => {
            commit::run(message, repo)?;
        }
        Commands::Log { limit } => {
            log::run(limit, repo)?;
        }
        Commands::Show { commit_hash } => {
            show::run(commit_hash, repo)?;
        }
        Commands::Status => {
            status::run(repo)?;
        }
    }

    Ok(())
}
