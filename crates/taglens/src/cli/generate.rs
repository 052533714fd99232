//! The `taglens generate` command.
//!
//! Prints the filtered tags comma-joined to stdout. Configuration and
//! generation errors are logged and end the process with a failure status;
//! they never surface as an unhandled panic.

use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use taglens_core::{ApiConfig, ImageTagger, TagStore, DEFAULT_TEMPERATURE};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image file to tag
    pub image: PathBuf,

    /// Sampling temperature (0.0 = more focused, 1.0 = more creative)
    #[arg(short, long, value_parser = parse_temperature)]
    pub temperature: Option<f32>,
}

/// Range enforcement lives at this boundary; the generator passes the value
/// through to the upstream API as-is.
pub fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid temperature"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be in 0.0..=1.0, got {value}"))
    }
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, store: &TagStore) -> anyhow::Result<()> {
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let tagger = match ImageTagger::from_store(config, store, DEFAULT_TEMPERATURE) {
        Ok(tagger) => tagger,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let spinner = create_spinner();
    let result = tagger.generate_tags(&args.image, args.temperature).await;
    spinner.finish_and_clear();

    match result {
        Ok(tags) => {
            println!("{}", tags.join(", "));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error generating tags: {e}");
            std::process::exit(1);
        }
    }
}

/// Spinner shown while the upstream call is in flight. Draws to stderr so
/// stdout stays clean for the tag list.
pub(crate) fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Generating tags...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_in_range() {
        assert_eq!(parse_temperature("0.0").unwrap(), 0.0);
        assert_eq!(parse_temperature("0.7").unwrap(), 0.7);
        assert_eq!(parse_temperature("1.0").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_temperature_out_of_range() {
        assert!(parse_temperature("1.5").is_err());
        assert!(parse_temperature("-0.1").is_err());
    }

    #[test]
    fn test_parse_temperature_not_a_number() {
        assert!(parse_temperature("warm").is_err());
    }
}
