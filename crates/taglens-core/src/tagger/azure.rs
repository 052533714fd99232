//! Azure OpenAI chat-completions backend.
//!
//! Sends the image via data URL in the user message content array. Auth is
//! the `api-key` header; the API version rides as a query parameter on the
//! deployment-scoped URL.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::backend::{CompletionBackend, CompletionRequest};
use crate::config::ApiConfig;
use crate::error::TaggerError;

/// Transport-level request timeout. The only timeout in the system.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Backend for an Azure OpenAI deployment.
pub struct AzureOpenAiBackend {
    config: ApiConfig,
    client: reqwest::Client,
}

impl AzureOpenAiBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionBackend for AzureOpenAiBackend {
    fn name(&self) -> &str {
        "azure-openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, TaggerError> {
        let body = ChatRequest {
            model: self.config.deployment.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(request.system.clone()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: request.user_text.clone(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.image.data_url(),
                            },
                        },
                    ]),
                },
            ],
        };

        let resp = self
            .client
            .post(self.config.completions_url())
            .header("api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| TaggerError::Generation {
                message: format!("Upstream request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(TaggerError::Generation {
                message: format!("Upstream HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let chat_resp: ChatResponse = resp.json().await.map_err(|e| TaggerError::Generation {
            message: format!("Failed to parse upstream response: {e}"),
            status_code: None,
        })?;

        chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| TaggerError::Generation {
                message: "Upstream returned no completion content".to_string(),
                status_code: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::encode::ImageInput;

    fn sample_request() -> ChatRequest {
        let image = ImageInput::from_bytes(&[1, 2, 3], "image/jpeg");
        ChatRequest {
            model: "gpt-4o".to_string(),
            max_tokens: 2000,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text("be helpful".to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: "tag this".to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.data_url(),
                            },
                        },
                    ]),
                },
            ],
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let json = serde_json::to_value(sample_request()).unwrap();

        // System content serializes as a plain string, user as a parts array
        assert_eq!(json["messages"][0]["content"], "be helpful");
        assert_eq!(json["messages"][1]["content"][0]["type"], "text");
        assert_eq!(json["messages"][1]["content"][1]["type"], "image_url");
        assert!(json["messages"][1]["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn test_response_missing_content_parses() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }
}
