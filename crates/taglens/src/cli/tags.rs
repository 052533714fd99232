//! The `taglens tags` command for vocabulary management.

use clap::{Args, Subcommand};
use taglens_core::{TagList, TagStore};

/// Arguments for the `tags` command.
#[derive(Args, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

/// Subcommands for vocabulary management.
#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// List tags, optionally restricted to one list or a search filter
    List {
        /// Restrict to one list ("whitelist" or "blacklist")
        #[arg(long, value_parser = parse_list)]
        list: Option<TagList>,

        /// Only show tags containing this substring
        #[arg(long)]
        filter: Option<String>,
    },

    /// Add a tag (lowercased; adding an existing tag is a no-op)
    Add {
        #[arg(value_parser = parse_list)]
        list: TagList,
        tag: String,
    },

    /// Remove a tag (removing an absent tag is a no-op)
    Remove {
        #[arg(value_parser = parse_list)]
        list: TagList,
        tag: String,
    },

    /// Show the tag configuration document path
    Path,
}

fn parse_list(s: &str) -> Result<TagList, String> {
    s.parse()
}

/// Execute the tags command.
pub fn execute(args: TagsArgs, store: &TagStore) -> anyhow::Result<()> {
    match args.command {
        TagsCommand::List { list, filter } => {
            let tags = store.load_or_default();
            let needle = filter.map(|f| f.to_lowercase());
            let lists = match list {
                Some(l) => vec![l],
                None => vec![TagList::Whitelist, TagList::Blacklist],
            };
            for l in lists {
                let mut entries: Vec<&String> = tags
                    .list(l)
                    .iter()
                    .filter(|tag| needle.as_deref().map_or(true, |f| tag.contains(f)))
                    .collect();
                entries.sort();
                println!("{} ({}):", l, entries.len());
                for tag in entries {
                    println!("  {tag}");
                }
            }
        }

        TagsCommand::Add { list, tag } => {
            if store.add(list, &tag)? {
                println!("Added '{}' to the {list}.", tag.trim().to_lowercase());
            } else {
                println!("'{}' is already in the {list}.", tag.trim().to_lowercase());
            }
        }

        TagsCommand::Remove { list, tag } => {
            if store.remove(list, &tag)? {
                println!("Removed '{}' from the {list}.", tag.trim().to_lowercase());
            } else {
                println!("'{}' is not in the {list}.", tag.trim().to_lowercase());
            }
        }

        TagsCommand::Path => {
            println!("{}", store.path().display());
        }
    }

    Ok(())
}
