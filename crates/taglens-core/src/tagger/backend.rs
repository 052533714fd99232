//! Completion backend trait and request type.
//!
//! Defines the seam between the tagging pipeline and the upstream
//! chat-completion API, so tests can drive the pipeline with a mock.

use async_trait::async_trait;

use super::encode::ImageInput;
use crate::error::TaggerError;

/// One chat-completion request carrying a single inline image.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction
    pub system: String,
    /// User message text (the vocabulary listing)
    pub user_text: String,
    /// The encoded image
    pub image: ImageInput,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature, passed through unvalidated
    pub temperature: f32,
}

/// Trait implemented by upstream chat-completion APIs.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the tagger holds a `Box<dyn CompletionBackend>`).
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Send the request and return the raw completion text.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<String, TaggerError>;
}
