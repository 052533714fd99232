//! Command implementations for the taglens CLI.

pub mod config;
pub mod generate;
pub mod interactive;
pub mod tags;

use std::path::PathBuf;

use taglens_core::TagStore;

/// Resolve the tag store from the `--tags-config` override or the platform
/// default location.
pub fn resolve_store(path: Option<PathBuf>) -> TagStore {
    TagStore::new(path.unwrap_or_else(TagStore::default_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_store_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        let store = resolve_store(Some(path.clone()));
        assert_eq!(store.path(), path);
    }

    #[test]
    fn test_resolve_store_default() {
        let store = resolve_store(None);
        assert_eq!(store.path(), TagStore::default_path());
    }
}
