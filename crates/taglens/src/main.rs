//! Taglens CLI - whitelist-constrained image tagging with a hosted
//! multimodal model.
//!
//! Taglens sends an image to a chat-completion deployment and prints the
//! returned tags after filtering them against an editable
//! whitelist/blacklist vocabulary.
//!
//! # Usage
//!
//! ```bash
//! # Generate tags for an image
//! taglens generate photo.jpg --temperature 0.3
//!
//! # Edit the vocabulary
//! taglens tags add whitelist cozy
//! taglens tags remove blacklist watermark
//! taglens tags list --filter kitchen
//!
//! # Inspect configuration
//! taglens config check
//!
//! # Bare invocation opens the interactive menu
//! taglens
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Taglens - generate whitelist-constrained image tags.
#[derive(Parser, Debug)]
#[command(name = "taglens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to the tag configuration document
    #[arg(long, global = true, env = "TAGLENS_TAGS_CONFIG")]
    tags_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate tags for an image
    Generate(cli::generate::GenerateArgs),

    /// Edit and inspect the whitelist/blacklist vocabulary
    Tags(cli::tags::TagsArgs),

    /// View configuration and check the environment
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    tracing::debug!("taglens v{}", taglens_core::VERSION);

    let store = cli::resolve_store(cli.tags_config);

    // Dispatch to the appropriate command handler
    match cli.command {
        Some(Commands::Generate(args)) => cli::generate::execute(args, &store).await,
        Some(Commands::Tags(args)) => cli::tags::execute(args, &store),
        Some(Commands::Config(args)) => cli::config::execute(args, &store),
        None => cli::interactive::run(&store).await,
    }
}
