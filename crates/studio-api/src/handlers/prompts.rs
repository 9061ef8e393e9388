//! Prompt generation handlers.
//!
//! Two entry points with deliberately asymmetric failure handling:
//! - client-scoped generation degrades to a template fallback and always
//!   reports success (provenance tells the caller which path ran)
//! - title-scoped generation has no brand context to build a template
//!   from, so upstream failures surface to the caller

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use studio_models::ClientId;
use studio_promptgen::Provenance;
use studio_store::ClientStore;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request to generate a prompt from a client's brand profile.
#[derive(Debug, Deserialize)]
pub struct ClientPromptRequest {
    pub client_id: String,
    /// Free-text request describing what the video should show
    #[serde(default)]
    pub request: String,
}

#[derive(Serialize)]
pub struct ClientPromptResponse {
    pub success: bool,
    pub prompt: String,
    pub provenance: Provenance,
    pub message: String,
}

/// Generate a prompt for a client.
///
/// 404 when the client is unknown. Upstream language-model failure is not
/// an error here; the composer fallback runs instead.
pub async fn generate_client_prompt(
    State(state): State<AppState>,
    Json(request): Json<ClientPromptRequest>,
) -> ApiResult<Json<ClientPromptResponse>> {
    if request.client_id.trim().is_empty() {
        return Err(ApiError::bad_request("client_id is required"));
    }

    let client = state
        .clients
        .get(&ClientId::from(request.client_id.as_str()))
        .await?;

    let (prompt, provenance) = state
        .prompts
        .generate_for_client(&client, &request.request)
        .await;

    info!(
        client_id = %client.id,
        provenance = provenance.as_str(),
        "Generated client prompt"
    );

    let message = match provenance {
        Provenance::Generated => "Prompt generated.",
        Provenance::Fallback => "Prompt generated (template mode).",
    };

    Ok(Json(ClientPromptResponse {
        success: true,
        prompt,
        provenance,
        message: message.to_string(),
    }))
}

/// Request to generate a prompt from a task title and description.
#[derive(Debug, Deserialize)]
pub struct TitlePromptRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct TitlePromptResponse {
    pub success: bool,
    pub prompt: String,
}

/// Generate a prompt from a title/description pair.
///
/// 400 when `title` is missing. No fallback: language-model failures pass
/// through with their original status and body.
pub async fn generate_title_prompt(
    State(state): State<AppState>,
    Json(request): Json<TitlePromptRequest>,
) -> ApiResult<Json<TitlePromptResponse>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }

    let prompt = state
        .prompts
        .generate_from_title(&request.title, request.description.as_deref())
        .await?;

    Ok(Json(TitlePromptResponse {
        success: true,
        prompt,
    }))
}
