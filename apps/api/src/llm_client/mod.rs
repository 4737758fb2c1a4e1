/// LLM Client — the single point of entry for all Ollama calls in PromptLab.
///
/// ARCHITECTURAL RULE: No other module may call the inference server directly.
/// All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Path of the chat endpoint on the Ollama server.
const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// True when the failure means the inference server could not be reached
    /// or did not answer, as opposed to answering with something unusable.
    pub fn is_upstream(&self) -> bool {
        matches!(self, LlmError::Http(_) | LlmError::Api { .. })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// The single LLM client used by all handlers in PromptLab.
/// Wraps the Ollama chat API with structured output helpers.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    chat_url: String,
    model: String,
}

impl OllamaClient {
    /// Builds a client against `base_url` (trailing slashes are trimmed
    /// before joining the chat path).
    pub fn new(base_url: &str, model: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            chat_url: format!("{}{CHAT_PATH}", base_url.trim_end_matches('/')),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single non-streaming chat call and returns the assistant text.
    /// One attempt only — failures surface to the caller, never retried.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Ollama wraps failures as {"error": "..."}
            let message = serde_json::from_str::<OllamaErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        let text = chat_response.message.content;

        debug!("LLM call succeeded: {} chars of content", text.len());

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }

}

/// Deserializes an LLM text reply as JSON. The prompt must have instructed
/// the model to return valid JSON; code fences and surrounding prose are
/// tolerated.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(extract_json_object(text)).map_err(LlmError::Parse)
}

/// Extracts the JSON object from LLM output. Handles replies where the JSON
/// is wrapped in ```json ... ``` fences or preceded/followed by prose by
/// slicing from the first `{` to the last `}`.
pub fn extract_json_object(text: &str) -> &str {
    let text = strip_json_fences(text);
    if text.starts_with('{') && text.ends_with('}') {
        return text;
    }
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
