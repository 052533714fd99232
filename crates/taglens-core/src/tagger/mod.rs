//! Tag generation pipeline: encode, prompt, completion call, filter.
//!
//! The upstream model is never trusted to obey the prompt's constraints.
//! The whitelist/blacklist filter at the end of the pipeline is the actual
//! enforcement point and runs on every response.

mod azure;
mod backend;
mod encode;
mod prompt;

pub use azure::AzureOpenAiBackend;
pub use backend::{CompletionBackend, CompletionRequest};
pub use encode::{ImageInput, DEFAULT_MIME_TYPE};
pub use prompt::{user_prompt, SYSTEM_PROMPT};

use std::path::Path;

use crate::config::ApiConfig;
use crate::error::{ConfigError, TaggerError};
use crate::store::{TagSet, TagStore};

/// Fixed output token budget for every completion call.
pub const MAX_TOKENS: u32 = 2000;

/// Instance default when no temperature is supplied (most deterministic).
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Generates whitelist-constrained tags for images.
///
/// Stateless per call: the vocabulary and default temperature are fixed at
/// construction and each `generate_tags` call is one isolated round-trip.
pub struct ImageTagger {
    backend: Box<dyn CompletionBackend>,
    tags: TagSet,
    temperature: f32,
}

impl std::fmt::Debug for ImageTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTagger")
            .field("backend", &self.backend.name())
            .field("tags", &self.tags)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ImageTagger {
    /// Create a tagger against the Azure OpenAI backend.
    pub fn new(config: ApiConfig, tags: TagSet, temperature: f32) -> Self {
        Self::with_backend(Box::new(AzureOpenAiBackend::new(config)), tags, temperature)
    }

    /// Create a tagger with an explicit backend.
    pub fn with_backend(
        backend: Box<dyn CompletionBackend>,
        tags: TagSet,
        temperature: f32,
    ) -> Self {
        Self {
            backend,
            tags,
            temperature,
        }
    }

    /// Create a tagger, eagerly loading the vocabulary from `store`.
    ///
    /// A load failure escalates to [`ConfigError::TagConfig`]:
    /// configuration is incomplete if the vocabulary cannot be read.
    pub fn from_store(
        config: ApiConfig,
        store: &TagStore,
        temperature: f32,
    ) -> std::result::Result<Self, ConfigError> {
        let tags = store.load()?;
        Ok(Self::new(config, tags, temperature))
    }

    /// The vocabulary this tagger was constructed with.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Generate tags for the image at `image_path`.
    ///
    /// `temperature` overrides the instance default for this call only; the
    /// value is passed to the upstream API as-is. Returns the filtered tag
    /// list in the order the model emitted it. Any upstream failure aborts
    /// the call; nothing is retried.
    pub async fn generate_tags(
        &self,
        image_path: &Path,
        temperature: Option<f32>,
    ) -> std::result::Result<Vec<String>, TaggerError> {
        let image = ImageInput::from_path(image_path)?;

        let request = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user_text: user_prompt(&self.tags.whitelist, &self.tags.blacklist),
            image,
            max_tokens: MAX_TOKENS,
            temperature: temperature.unwrap_or(self.temperature),
        };

        tracing::debug!(
            backend = self.backend.name(),
            temperature = request.temperature,
            "Requesting tags for {}",
            image_path.display()
        );

        let content = self.backend.complete(&request).await?;

        let candidates = parse_candidates(&content);
        let tags = filter_candidates(&candidates, &self.tags.whitelist, &self.tags.blacklist);

        tracing::info!(
            "Generated {} tags for {}",
            tags.len(),
            image_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| image_path.display().to_string())
        );
        if tags.len() < candidates.len() {
            tracing::warn!(
                "Filtered out {} inappropriate or invalid tags",
                candidates.len() - tags.len()
            );
        }

        Ok(tags)
    }
}

/// Split a raw completion into candidate tags: comma-separated, trimmed,
/// lowercased, empties dropped.
fn parse_candidates(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Keep a candidate only if it exactly equals a whitelist entry and no
/// blacklist entry occurs as a substring of it. The substring check
/// overrides whitelist membership. Emission order is preserved.
fn filter_candidates(
    candidates: &[String],
    whitelist: &[String],
    blacklist: &[String],
) -> Vec<String> {
    candidates
        .iter()
        .filter(|tag| {
            whitelist.iter().any(|allowed| allowed == *tag)
                && !blacklist.iter().any(|blocked| tag.contains(blocked))
        })
        .cloned()
        .collect()
}
