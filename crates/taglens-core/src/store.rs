//! Tag configuration store.
//!
//! The whitelist and blacklist live in a single JSON document with exactly
//! two keys, `whitelist_tags` and `blacklist_tags`. The file is the source
//! of truth: mutations persist immediately and readers load fresh, so there
//! is no in-memory authority. Concurrent writers are not synchronized; the
//! last writer wins.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The two named tag collections.
///
/// Entries are lowercase by construction: [`TagStore::add`] normalizes
/// before insertion. Whitelist membership is checked by exact match,
/// blacklist membership by substring match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    /// The only tags ever allowed in generation output
    #[serde(rename = "whitelist_tags")]
    pub whitelist: Vec<String>,

    /// Tags that must never appear, matched as substrings
    #[serde(rename = "blacklist_tags")]
    pub blacklist: Vec<String>,
}

impl TagSet {
    /// Borrow the collection selected by `list`.
    pub fn list(&self, list: TagList) -> &[String] {
        match list {
            TagList::Whitelist => &self.whitelist,
            TagList::Blacklist => &self.blacklist,
        }
    }

    fn list_mut(&mut self, list: TagList) -> &mut Vec<String> {
        match list {
            TagList::Whitelist => &mut self.whitelist,
            TagList::Blacklist => &mut self.blacklist,
        }
    }
}

/// Selector for one of the two tag collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagList {
    Whitelist,
    Blacklist,
}

impl TagList {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagList::Whitelist => "whitelist",
            TagList::Blacklist => "blacklist",
        }
    }
}

impl std::fmt::Display for TagList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TagList {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whitelist" | "white" => Ok(TagList::Whitelist),
            "blacklist" | "black" => Ok(TagList::Blacklist),
            other => Err(format!(
                "Unknown tag list '{other}' (expected 'whitelist' or 'blacklist')"
            )),
        }
    }
}

/// Path-bound accessor for the tag configuration document.
#[derive(Debug, Clone)]
pub struct TagStore {
    path: PathBuf,
}

impl TagStore {
    /// Bind a store to a JSON document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default document location.
    ///
    /// Uses the platform config directory (e.g. `~/.config/taglens` on
    /// Linux), falling back to `~/.taglens` if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "taglens", "taglens")
            .map(|dirs| dirs.config_dir().join("tags_config.json"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".taglens").join("tags_config.json")
            })
    }

    /// Read and parse the document.
    ///
    /// A missing file, malformed JSON, or missing expected keys all yield
    /// [`StoreError::Load`]; callers decide whether to surface it or fall
    /// back to an empty set.
    pub fn load(&self) -> std::result::Result<TagSet, StoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Load {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Load {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Read the document, logging a warning and falling back to an empty
    /// tag set on any load failure.
    pub fn load_or_default(&self) -> TagSet {
        match self.load() {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!("{e}; starting from an empty tag set");
                TagSet::default()
            }
        }
    }

    /// Serialize `tags` back to the document, overwriting it.
    ///
    /// Written with stable indentation and the exact two-key shape so other
    /// readers of the file round-trip cleanly.
    pub fn save(&self, tags: &TagSet) -> std::result::Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tags).map_err(|e| StoreError::Save {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Save {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, content).map_err(|e| StoreError::Save {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Add a tag to the selected list and persist immediately.
    ///
    /// The tag is trimmed and lowercased before comparison. Adding an
    /// existing or empty tag is a no-op. Returns whether the set changed.
    pub fn add(&self, list: TagList, tag: &str) -> std::result::Result<bool, StoreError> {
        let tag = normalize(tag);
        if tag.is_empty() {
            return Ok(false);
        }
        let mut tags = self.load_or_default();
        let entries = tags.list_mut(list);
        if entries.iter().any(|t| t == &tag) {
            return Ok(false);
        }
        entries.push(tag);
        self.save(&tags)?;
        Ok(true)
    }

    /// Remove a tag from the selected list and persist immediately.
    ///
    /// Removing an absent tag is a no-op, not an error. Returns whether the
    /// set changed.
    pub fn remove(&self, list: TagList, tag: &str) -> std::result::Result<bool, StoreError> {
        let tag = normalize(tag);
        let mut tags = self.load_or_default();
        let entries = tags.list_mut(list);
        let before = entries.len();
        entries.retain(|t| t != &tag);
        if entries.len() == before {
            return Ok(false);
        }
        self.save(&tags)?;
        Ok(true)
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TagStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TagStore::new(dir.path().join("tags_config.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_load_error() {
        let (_dir, store) = temp_store();
        assert!(matches!(store.load(), Err(StoreError::Load { .. })));
        assert_eq!(store.load_or_default(), TagSet::default());
    }

    #[test]
    fn test_load_malformed_json_is_load_error() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not json {").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Load { .. })));
    }

    #[test]
    fn test_load_missing_keys_is_load_error() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), r#"{"whitelist_tags": ["modern"]}"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Load { .. })));
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let tags = TagSet {
            whitelist: vec!["modern".into(), "cozy".into()],
            blacklist: vec!["spam".into()],
        };
        store.save(&tags).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, tags);
    }

    #[test]
    fn test_save_preserves_two_key_shape() {
        let (_dir, store) = temp_store();
        store.save(&TagSet::default()).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        let obj = raw.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("whitelist_tags"));
        assert!(obj.contains_key("blacklist_tags"));
    }

    #[test]
    fn test_add_normalizes_case_and_whitespace() {
        let (_dir, store) = temp_store();
        assert!(store.add(TagList::Whitelist, "  Modern ").unwrap());
        assert_eq!(store.load().unwrap().whitelist, vec!["modern"]);
    }

    #[test]
    fn test_add_existing_tag_is_noop() {
        let (_dir, store) = temp_store();
        assert!(store.add(TagList::Whitelist, "cozy").unwrap());
        assert!(!store.add(TagList::Whitelist, "COZY").unwrap());
        assert_eq!(store.load().unwrap().whitelist, vec!["cozy"]);
    }

    #[test]
    fn test_add_empty_tag_is_noop() {
        let (_dir, store) = temp_store();
        assert!(!store.add(TagList::Whitelist, "   ").unwrap());
        assert!(matches!(store.load(), Err(StoreError::Load { .. })));
    }

    #[test]
    fn test_remove_absent_tag_is_noop() {
        let (_dir, store) = temp_store();
        store.add(TagList::Blacklist, "spam").unwrap();
        assert!(!store.remove(TagList::Blacklist, "ham").unwrap());
        assert_eq!(store.load().unwrap().blacklist, vec!["spam"]);
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let (_dir, store) = temp_store();
        store.add(TagList::Blacklist, "spam").unwrap();
        assert!(store.remove(TagList::Blacklist, "SPAM").unwrap());
        assert!(store.load().unwrap().blacklist.is_empty());
    }

    #[test]
    fn test_lists_are_independent() {
        let (_dir, store) = temp_store();
        store.add(TagList::Whitelist, "modern").unwrap();
        store.add(TagList::Blacklist, "spam").unwrap();
        let tags = store.load().unwrap();
        assert_eq!(tags.list(TagList::Whitelist), ["modern".to_string()]);
        assert_eq!(tags.list(TagList::Blacklist), ["spam".to_string()]);
    }

    #[test]
    fn test_tag_list_from_str() {
        assert_eq!("whitelist".parse::<TagList>().unwrap(), TagList::Whitelist);
        assert_eq!("Black".parse::<TagList>().unwrap(), TagList::Blacklist);
        assert!("greylist".parse::<TagList>().is_err());
    }
}
