//! The `taglens config` command for configuration inspection.

use clap::{Args, Subcommand};
use taglens_core::{ApiConfig, TagStore};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration inspection.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the tag configuration document
    Show,

    /// Verify the required environment variables are set
    Check,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, store: &TagStore) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let tags = store.load()?;
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }

        ConfigCommand::Check => {
            let missing = ApiConfig::missing_env_vars();
            if missing.is_empty() {
                println!("All required environment variables are set.");
            } else {
                anyhow::bail!("Missing required environment variables: {}", missing.join(", "));
            }
        }
    }

    Ok(())
}
