//! Video generation handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use studio_models::{AspectRatio, ClipDuration, TaskId, VideoGenOptions};
use studio_videogen::{ReconcileReport, SubmitReceipt};

use crate::error::ApiResult;
use crate::state::AppState;

/// Request to submit a generation job. Wire names are camelCase to match
/// the provider-facing dashboard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub auto_prompt: bool,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub duration: ClipDuration,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub reference_image: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoJobData {
    pub task_id: String,
    pub status: String,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateVideoResponse {
    pub success: bool,
    pub data: VideoJobData,
}

impl From<SubmitReceipt> for VideoJobData {
    fn from(receipt: SubmitReceipt) -> Self {
        Self {
            task_id: receipt.remote_job_id,
            status: receipt.status,
            provider: receipt.provider,
            model: receipt.model,
            estimated_time: receipt.estimated_time,
        }
    }
}

/// Submit a video generation job for a task.
///
/// 400 when `taskId`, `model` or `prompt` is missing; provider failures
/// pass through with their original status code and body.
pub async fn generate_video(
    State(state): State<AppState>,
    Json(request): Json<GenerateVideoRequest>,
) -> ApiResult<Json<GenerateVideoResponse>> {
    let options = VideoGenOptions {
        auto_prompt: request.auto_prompt,
        aspect_ratio: request.aspect_ratio,
        duration: request.duration,
        audio_url: request.audio_url,
        reference_image: request.reference_image,
    };

    let receipt = state
        .submitter
        .submit(
            &TaskId::from(request.task_id.as_str()),
            &request.model,
            &request.prompt,
            &options,
        )
        .await?;

    Ok(Json(GenerateVideoResponse {
        success: true,
        data: receipt.into(),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatusData {
    pub task_id: String,
    pub status: String,
    pub video_url: Option<String>,
    pub duration: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub error: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub completed_at: Option<String>,
}

#[derive(Serialize)]
pub struct VideoStatusResponse {
    pub success: bool,
    pub data: VideoStatusData,
}

impl From<ReconcileReport> for VideoStatusData {
    fn from(report: ReconcileReport) -> Self {
        Self {
            task_id: report.remote_job_id,
            status: report.status,
            video_url: report.video_url,
            duration: report.duration,
            provider: report.provider,
            model: report.model,
            error: report.error,
            created_at: report.created_at,
            updated_at: report.updated_at,
            completed_at: report.completed_at,
        }
    }
}

/// Poll provider status for a remote job and reconcile it into the task
/// record. Safe to call at any cadence, including after a terminal state.
pub async fn video_status(
    State(state): State<AppState>,
    Path(remote_job_id): Path<String>,
) -> ApiResult<Json<VideoStatusResponse>> {
    let report = state.reconciler.reconcile(&remote_job_id).await?;

    Ok(Json(VideoStatusResponse {
        success: true,
        data: report.into(),
    }))
}
