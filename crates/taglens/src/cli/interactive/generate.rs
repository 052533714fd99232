//! Guided tag generation flow.
//!
//! Walks the user through: temperature → image path → upstream call →
//! tag display with count → optional save of the comma-joined tags.
//! Generation errors are rendered and the flow continues; they never end
//! the session.

use std::path::PathBuf;

use console::Style;
use dialoguer::{Confirm, Input};
use taglens_core::{ApiConfig, ImageTagger, TagStore, DEFAULT_TEMPERATURE};

use super::theme::taglens_theme;
use crate::cli::generate::{create_spinner, parse_temperature};

/// Walk the user through the full generation flow.
pub async fn guided_generate(store: &TagStore) -> anyhow::Result<()> {
    let theme = taglens_theme();
    let err_style = Style::new().for_stderr().red();
    let dim = Style::new().for_stderr().dim();
    let warn = Style::new().for_stderr().yellow();

    // ── Step 1: Construction; config errors return to the menu ─────────────

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {}", err_style.apply_to(format!("Configuration error: {e}")));
            return Ok(());
        }
    };

    // ── Step 2: Temperature (range enforced at this boundary) ──────────────

    let Some(raw_temperature) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Temperature (0.0 = more focused, 1.0 = more creative)")
            .default(format!("{DEFAULT_TEMPERATURE:.1}"))
            .validate_with(|input: &String| parse_temperature(input).map(|_| ()))
            .interact_text(),
    )?
    else {
        return Ok(());
    };
    // Validated above; a parse failure here would be a dialoguer bug
    let temperature = parse_temperature(&raw_temperature).unwrap_or(DEFAULT_TEMPERATURE);

    let tagger = match ImageTagger::from_store(config, store, temperature) {
        Ok(tagger) => tagger,
        Err(e) => {
            eprintln!("  {}", err_style.apply_to(format!("Configuration error: {e}")));
            return Ok(());
        }
    };

    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "Vocabulary: {} whitelisted, {} blacklisted",
            tagger.tags().whitelist.len(),
            tagger.tags().blacklist.len()
        ))
    );

    // ── Step 3: Generate, one image per pass ────────────────────────────────

    loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(&theme)
                .with_prompt("Path to image")
                .interact_text(),
        )?
        else {
            break;
        };

        let path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());
        if !path.exists() {
            eprintln!(
                "  {}",
                warn.apply_to(format!("Path not found: {}", path.display()))
            );
            continue;
        }

        let spinner = create_spinner();
        let result = tagger.generate_tags(&path, None).await;
        spinner.finish_and_clear();

        match result {
            Ok(tags) => {
                display_tags(&tags);
                if !tags.is_empty() {
                    offer_save(&theme, &tags)?;
                }
            }
            Err(e) => {
                eprintln!(
                    "  {}",
                    err_style.apply_to(format!("Error generating tags: {e}"))
                );
            }
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("Tag another image?")
            .default(true)
            .interact_opt()?;
        if !matches!(again, Some(true)) {
            break;
        }
    }

    Ok(())
}

/// Render the generated tags with a total count.
fn display_tags(tags: &[String]) {
    let green = Style::new().for_stderr().green();
    let dim = Style::new().for_stderr().dim();

    eprintln!();
    if tags.is_empty() {
        eprintln!("  {}", dim.apply_to("No tags passed the filter."));
    } else {
        eprintln!("  {}", green.apply_to(tags.join(", ")));
    }
    eprintln!("  {}", dim.apply_to(format!("Total tags generated: {}", tags.len())));
    eprintln!();
}

/// Offer to write the comma-joined tags to a text file.
fn offer_save(theme: &dialoguer::theme::ColorfulTheme, tags: &[String]) -> anyhow::Result<()> {
    let save = Confirm::with_theme(theme)
        .with_prompt("Save tags to a file?")
        .default(false)
        .interact_opt()?;
    if !matches!(save, Some(true)) {
        return Ok(());
    }

    let Some(raw_path) = super::handle_interrupt(
        Input::<String>::with_theme(theme)
            .with_prompt("Output file path")
            .default("./generated_tags.txt".to_string())
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    let path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());
    match std::fs::write(&path, tags.join(", ")) {
        Ok(()) => {
            let dim = Style::new().for_stderr().dim();
            eprintln!("  {}", dim.apply_to(format!("Saved to {}", path.display())));
        }
        Err(e) => {
            let err_style = Style::new().for_stderr().red();
            eprintln!(
                "  {}",
                err_style.apply_to(format!("Could not save tags: {e}"))
            );
        }
    }

    Ok(())
}
