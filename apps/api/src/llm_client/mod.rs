/// LLM client — the single point of entry for all Gemini API calls in Stackrank.
///
/// ARCHITECTURAL RULE: no other module may call the Gemini API directly.
/// Everything that needs generated text depends on the `TextModel` trait and
/// receives the client through `AppState`.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls in Stackrank.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyResponse,
}

/// The opaque remote text-generation function: one prompt in, one text out.
///
/// Every call is best-effort, exactly once — no retries, no rate limiting.
/// Section analysis and ranking both count on that: a submission with N
/// resumes performs exactly 3N + 1 invocations.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

impl GenerateReply {
    /// Concatenates the text parts of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Production `TextModel` backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateReply = response.json().await?;

        if let Some(usage) = &reply.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        reply.text().ok_or(ModelError::EmptyResponse)
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted `TextModel` double for unit tests.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    type Script = Box<dyn Fn(usize, &str) -> Result<String, ModelError> + Send + Sync>;

    /// In-memory model whose replies follow a script. Counts every invocation
    /// so tests can assert exact call counts.
    pub struct ScriptedModel {
        calls: AtomicUsize,
        script: Script,
    }

    impl ScriptedModel {
        pub fn from_fn<F>(script: F) -> Self
        where
            F: Fn(usize, &str) -> Result<String, ModelError> + Send + Sync + 'static,
        {
            Self {
                calls: AtomicUsize::new(0),
                script: Box::new(script),
            }
        }

        /// Replies with the same text on every call.
        pub fn always_ok(text: &str) -> Self {
            let text = text.to_string();
            Self::from_fn(move |_, _| Ok(text.clone()))
        }

        /// Fails every call with the same API error message.
        pub fn always_failing(message: &str) -> Self {
            let message = message.to_string();
            Self::from_fn(move |_, _| {
                Err(ModelError::Api {
                    status: 503,
                    message: message.clone(),
                })
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            (self.script)(n, prompt)
        }
    }
}
