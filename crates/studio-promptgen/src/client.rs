//! Language-model client for prompt generation.
//!
//! Wraps an OpenAI-style chat-completions endpoint. The client-scoped
//! entry point degrades to the deterministic composer on any upstream
//! failure; the title-scoped entry point has no brand context to build a
//! template from, so its failures surface to the caller.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use studio_models::Client;

use crate::composer::compose;
use crate::error::{PromptError, PromptResult};

/// Default model used for prompt generation.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for both entry points.
const TEMPERATURE: f32 = 0.7;

/// Output budget for the client-scoped prompt.
const CLIENT_MAX_TOKENS: u32 = 300;

/// Output budget for the title-scoped prompt.
const TITLE_MAX_TOKENS: u32 = 500;

/// Where the generated prompt came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Produced by the language model
    Generated,
    /// Produced by the offline composer template
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Generated => "generated",
            Provenance::Fallback => "fallback",
        }
    }
}

/// Configuration for the language-model endpoint.
#[derive(Debug, Clone)]
pub struct PromptGenConfig {
    /// Bearer credential
    pub api_key: String,
    /// Endpoint base URL (no trailing slash)
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl PromptGenConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// Chat-completions wire types.

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the language-model chat-completions endpoint.
pub struct PromptGenerator {
    config: PromptGenConfig,
    http: HttpClient,
}

impl PromptGenerator {
    /// Create a new generator.
    pub fn new(config: PromptGenConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { config, http }
    }

    /// Generate a prompt from a client's brand profile and a request.
    ///
    /// Upstream failure is not a caller-facing error here, only a quality
    /// degradation: the composer template is returned with provenance
    /// `fallback`.
    pub async fn generate_for_client(
        &self,
        client: &Client,
        request_text: &str,
    ) -> (String, Provenance) {
        let messages = vec![
            ChatMessage {
                role: "system",
                content: client_system_instruction().to_string(),
            },
            ChatMessage {
                role: "user",
                content: client_user_message(client, request_text),
            },
        ];

        match self.complete(messages, CLIENT_MAX_TOKENS).await {
            Ok(prompt) => {
                info!(client_id = %client.id, "Generated prompt via language model");
                (prompt, Provenance::Generated)
            }
            Err(e) => {
                warn!(client_id = %client.id, error = %e, "Language model unavailable, using composer fallback");
                (compose(&client.brand_info, request_text), Provenance::Fallback)
            }
        }
    }

    /// Generate a prompt from a task title and optional description.
    ///
    /// No fallback exists for this entry point; upstream failures propagate.
    pub async fn generate_from_title(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> PromptResult<String> {
        let messages = vec![
            ChatMessage {
                role: "system",
                content: title_system_instruction().to_string(),
            },
            ChatMessage {
                role: "user",
                content: title_user_message(title, description),
            },
        ];

        let prompt = self.complete(messages, TITLE_MAX_TOKENS).await?;
        info!(title = %title, "Generated prompt from title");
        Ok(prompt)
    }

    /// Issue one chat-completion call and extract the trimmed completion.
    async fn complete(&self, messages: Vec<ChatMessage>, max_tokens: u32) -> PromptResult<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: TEMPERATURE,
            max_tokens,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PromptError::Upstream { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| PromptError::InvalidResponse(e.to_string()))?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| PromptError::InvalidResponse("no choices in completion".into()))?;

        Ok(content)
    }
}

fn client_system_instruction() -> &'static str {
    "You are an expert prompt engineer for AI video generation models. \
     Based on the client's brand profile and request, write a detailed, \
     professional English prompt for video generation AI (e.g. Sora, Runway). \
     The prompt must cover visual elements, mood, target audience, and tone \
     of voice."
}

fn client_user_message(client: &Client, request_text: &str) -> String {
    format!(
        "Client profile:\n\
         - Name: {}\n\
         - Type: {}\n\
         - Industry: {}\n\
         - Target audience: {}\n\
         - Style: {}\n\
         - Tone: {}\n\n\
         Request: {}\n\n\
         Write a detailed English prompt for video generation AI based on \
         the above. Output only the prompt, with no extra commentary.",
        client.name,
        client.client_type.as_str(),
        client.brand_info.industry,
        client.brand_info.target_audience,
        client.brand_info.style.join(", "),
        client.brand_info.tone,
        request_text,
    )
}

fn title_system_instruction() -> &'static str {
    "You are a short-form video production expert. From the given title and \
     description, write an English prompt optimized for AI video generation. \
     The prompt must be concrete and visual, covering composition, color \
     grading, and motion."
}

fn title_user_message(title: &str, description: Option<&str>) -> String {
    format!(
        "Title: {}\nDescription: {}\n\n\
         Write an English prompt for a short-form video of 30 seconds or \
         less based on the above.",
        title,
        description.filter(|d| !d.is_empty()).unwrap_or("none"),
    )
}
