//! Interactive mode, the menu-driven interface for bare `taglens` invocation.
//!
//! Delegates to the same core operations as the flag-based CLI. Every error
//! is rendered as a visible message and the menu loop continues; a single
//! failed generation or save never ends the session.

pub mod generate;
pub mod tags;
pub mod theme;

use console::Style;
use dialoguer::Select;
use taglens_core::{ApiConfig, TagList, TagStore};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Generate tags for an image",
    "Manage whitelist",
    "Manage blacklist",
    "Show configuration",
    "Exit",
];

/// Entry point for interactive mode. Called when `taglens` is invoked with no subcommand.
pub async fn run(store: &TagStore) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::taglens_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => generate::guided_generate(store).await?,
            Some(1) => tags::manage_list(store, TagList::Whitelist)?,
            Some(2) => tags::manage_list(store, TagList::Blacklist)?,
            Some(3) => show_config(store),
            Some(4) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Config summary: document path, vocabulary sizes, environment status.
fn show_config(store: &TagStore) {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();
    let warn = Style::new().for_stderr().yellow();

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();

    let path_note = if store.path().exists() {
        "(exists)"
    } else {
        "(not created yet)"
    };
    eprintln!(
        "    {:<18} {} {}",
        label.apply_to("Tag config:"),
        store.path().display(),
        dim.apply_to(path_note)
    );

    let tags = store.load_or_default();
    eprintln!(
        "    {:<18} {} tags",
        label.apply_to("Whitelist:"),
        tags.whitelist.len()
    );
    eprintln!(
        "    {:<18} {} tags",
        label.apply_to("Blacklist:"),
        tags.blacklist.len()
    );

    let missing = ApiConfig::missing_env_vars();
    if missing.is_empty() {
        eprintln!(
            "    {:<18} all required variables set",
            label.apply_to("Environment:")
        );
    } else {
        eprintln!(
            "    {:<18} {}",
            label.apply_to("Environment:"),
            warn.apply_to(format!("missing {}", missing.join(", ")))
        );
    }
    eprintln!();
}
