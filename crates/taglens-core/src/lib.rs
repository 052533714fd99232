//! Taglens Core - whitelist-constrained image tagging library.
//!
//! Taglens sends an image to a hosted multimodal completion API and returns
//! descriptive tags filtered against an editable whitelist/blacklist
//! vocabulary. The model's adherence to the prompt is never trusted; the
//! client-side filter is the enforcement point.
//!
//! # Architecture
//!
//! ```text
//! Image → Encode (data URL) → Prompt → Completion API → Parse → Filter → Tags
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use taglens_core::{ApiConfig, ImageTagger, TagStore};
//!
//! #[tokio::main]
//! async fn main() -> taglens_core::Result<()> {
//!     let config = ApiConfig::from_env()?;
//!     let store = TagStore::new(TagStore::default_path());
//!     let tagger = ImageTagger::from_store(config, &store, 0.0)?;
//!
//!     let tags = tagger.generate_tags("./image.jpg".as_ref(), None).await?;
//!     println!("{}", tags.join(", "));
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod store;
pub mod tagger;

// Re-exports for convenient access
pub use config::{ApiConfig, REQUIRED_ENV_VARS};
pub use error::{ConfigError, Result, StoreError, TaggerError, TaglensError};
pub use store::{TagList, TagSet, TagStore};
pub use tagger::{ImageTagger, DEFAULT_TEMPERATURE, MAX_TOKENS};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
