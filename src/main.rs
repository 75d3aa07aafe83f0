//! Roundtable - three-agent AI discussions from the command line
//!
//! Subcommands:
//! - `ask <QUESTION>`: run one discussion and print the transcript
//! - `serve`: start the HTTP server (feature `web`)
//! - `backup`: copy the project into a timestamped backup folder
//! - `config`: print a sample configuration file

use anyhow::Result;
use clap::{Parser, Subcommand};
use roundtable_core::{
    backup::make_backup,
    build_client,
    config::{load_config, load_from_file, sample_config},
    Discussion, RoleRegistry, RoundtableConfig, SamplingParams,
};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "roundtable",
    version,
    about = "Ask a PM, an AI Architect and a Domain Expert"
)]
struct Args {
    /// Config file (defaults to .roundtable.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one discussion and print the transcript
    Ask {
        /// The question for the team
        question: String,
    },

    /// Start the HTTP server
    #[cfg(feature = "web")]
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Back up the project directory
    Backup {
        #[arg(long)]
        project_dir: Option<PathBuf>,

        #[arg(long)]
        backup_root: Option<PathBuf>,
    },

    /// Print a sample configuration file
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Config => {
            print!("{}", sample_config());
            Ok(())
        }
        Command::Ask { question } => {
            init_tracing();
            let config = resolve_config(args.config.as_ref())?;
            ask(&config, &question)
        }
        #[cfg(feature = "web")]
        Command::Serve { host, port } => {
            let mut config = resolve_config(args.config.as_ref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tokio::runtime::Runtime::new()?.block_on(roundtable_server::run_server(config))
        }
        Command::Backup {
            project_dir,
            backup_root,
        } => {
            init_tracing();
            let mut config = resolve_config(args.config.as_ref())?;
            if let Some(dir) = project_dir {
                config.backup.project_dir = dir;
            }
            if let Some(root) = backup_root {
                config.backup.backup_root = root;
            }
            backup(&config)
        }
    }
}

/// Load the explicit config file, or search the usual locations
fn resolve_config(path: Option<&PathBuf>) -> Result<RoundtableConfig> {
    let config = match path {
        Some(path) => load_from_file(path)?,
        None => load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Logs go to stderr so stdout carries only the transcript
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "roundtable=info,roundtable_core=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn ask(config: &RoundtableConfig, question: &str) -> Result<()> {
    let client = build_client(&config.llm)?;
    let roles = RoleRegistry::standard();

    tracing::info!("Running discussion...");
    let transcript = Discussion::new(client.as_ref(), &roles)
        .with_sampling(SamplingParams::from(&config.llm))
        .run(question);

    println!("{}", transcript.render(&roles));
    Ok(())
}

fn backup(config: &RoundtableConfig) -> Result<()> {
    let report = make_backup(&config.backup)?;

    for entry in &report.copied {
        match entry.kind {
            roundtable_core::backup::EntryKind::Directory => {
                println!("  Copied folder: {}/", entry.name)
            }
            roundtable_core::backup::EntryKind::File => println!("  Copied file: {}", entry.name),
        }
    }
    for entry in &report.failed {
        println!("  Warning: Could not copy {}: {}", entry.name, entry.reason);
    }

    println!();
    println!("Backup complete!");
    println!("Location: {}", report.location.display());
    println!("Files/folders backed up: {}", report.copied.len());
    Ok(())
}
