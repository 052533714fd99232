//! Vocabulary management loop for one tag list.
//!
//! Mirrors the flag-based `tags` subcommands: sorted listing with a search
//! filter, add, and remove. State is re-read from the store on every pass
//! so out-of-band edits show up immediately.

use console::Style;
use dialoguer::{Input, Select};
use taglens_core::{StoreError, TagList, TagStore};

use super::theme::taglens_theme;

const ACTIONS: &[&str] = &["Add a tag", "Remove a tag", "Search", "Clear search", "Back"];

/// Interactive editing loop for the selected list.
pub fn manage_list(store: &TagStore, list: TagList) -> anyhow::Result<()> {
    let theme = taglens_theme();
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();

    let mut search = String::new();

    loop {
        // Load fresh each pass; the file is the source of truth
        let tags = store.load_or_default();
        let mut entries: Vec<String> = tags
            .list(list)
            .iter()
            .filter(|tag| search.is_empty() || tag.contains(&search))
            .cloned()
            .collect();
        entries.sort();

        eprintln!();
        if search.is_empty() {
            eprintln!(
                "  {}",
                cyan.apply_to(format!("{list} ({} tags)", entries.len()))
            );
        } else {
            eprintln!(
                "  {}",
                cyan.apply_to(format!(
                    "{list} ({} tags matching '{search}')",
                    entries.len()
                ))
            );
        }
        if entries.is_empty() {
            eprintln!("    {}", dim.apply_to("(empty)"));
        }
        for tag in &entries {
            eprintln!("    {tag}");
        }
        eprintln!();

        let selection = Select::with_theme(&theme)
            .with_prompt(format!("Edit {list}"))
            .items(ACTIONS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => {
                let Some(tag) = super::handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("New tag")
                        .allow_empty(true)
                        .interact_text(),
                )?
                else {
                    continue;
                };
                if tag.trim().is_empty() {
                    continue;
                }
                match store.add(list, &tag) {
                    Ok(true) => {}
                    Ok(false) => {
                        eprintln!("  {}", dim.apply_to("Already present."));
                    }
                    Err(e) => render_store_error(&e),
                }
            }
            Some(1) => {
                if entries.is_empty() {
                    eprintln!("  {}", dim.apply_to("Nothing to remove."));
                    continue;
                }
                let Some(index) = Select::with_theme(&theme)
                    .with_prompt("Remove which tag?")
                    .items(&entries)
                    .default(0)
                    .interact_opt()?
                else {
                    continue;
                };
                if let Err(e) = store.remove(list, &entries[index]) {
                    render_store_error(&e);
                }
            }
            Some(2) => {
                let Some(term) = super::handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("Search for")
                        .allow_empty(true)
                        .interact_text(),
                )?
                else {
                    continue;
                };
                search = term.trim().to_lowercase();
            }
            Some(3) => search.clear(),
            Some(4) | None => break, // Back, Esc, or Ctrl+C
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Render a store failure visibly; the editing loop continues.
fn render_store_error(error: &StoreError) {
    let err_style = Style::new().for_stderr().red();
    eprintln!("  {}", err_style.apply_to(format!("{error}")));
}
