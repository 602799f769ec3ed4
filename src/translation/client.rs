use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::prompt::TranslationRequest;
use crate::error::TranslateError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Generation parameters sent alongside every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for an OpenAI-compatible chat completion endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
}

impl CompletionClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one completion request and returns the trimmed message content.
    pub async fn complete(
        &self,
        request: &TranslationRequest,
        params: &GenerationParams,
        api_key: &str,
    ) -> Result<String, TranslateError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &params.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.user),
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(%url, model = %params.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| TranslateError::RemoteService {
                status: None,
                message: format!("Failed to connect to API endpoint: {url} ({e})"),
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::RemoteService {
                status: Some(status.as_u16()),
                message: parse_error_message(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::MalformedResponse(format!("unreadable body ({e})")))?;

        parse_completion(&body)
    }
}

/// Extracts `error.message`, falling back to a generic message.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "API request failed".to_string())
}

/// Extracts `choices[0].message.content` from a success body.
fn parse_completion(body: &str) -> Result<String, TranslateError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(format!("invalid JSON ({e})")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            TranslateError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}
