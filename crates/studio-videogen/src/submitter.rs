//! Video job submission.
//!
//! Validates a generation request, creates a job at the provider and
//! persists the returned remote job id onto the task.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use studio_models::{TaskId, VideoGenOptions};
use studio_store::{TaskStore, VideoFieldsPatch};

use crate::error::{VideoGenError, VideoGenResult};
use crate::provider::VideoProviderClient;

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    /// Remote job identifier
    pub remote_job_id: String,
    /// Provider-native initial state
    pub status: String,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub estimated_time: Option<String>,
}

/// Submits generation jobs and records the remote id.
pub struct JobSubmitter {
    provider: VideoProviderClient,
    tasks: Arc<dyn TaskStore>,
}

impl JobSubmitter {
    pub fn new(provider: VideoProviderClient, tasks: Arc<dyn TaskStore>) -> Self {
        Self { provider, tasks }
    }

    /// Submit a generation job for a task.
    ///
    /// `task_id`, `model` and `prompt` must be non-empty; otherwise this
    /// fails with a validation error before any network call.
    ///
    /// Submission is not idempotent at the provider: a repeated call
    /// creates a distinct remote job and overwrites `video_task_id`,
    /// abandoning tracking of the prior job. Callers that care must gate
    /// on `video_status == processing` themselves.
    ///
    /// If the job is created remotely but the local write fails, the
    /// receipt is still returned: the job exists and the caller can reach
    /// it through reconciliation. Persistence failure is never reported as
    /// submission failure.
    pub async fn submit(
        &self,
        task_id: &TaskId,
        model: &str,
        prompt: &str,
        options: &VideoGenOptions,
    ) -> VideoGenResult<SubmitReceipt> {
        if task_id.as_str().trim().is_empty() {
            return Err(VideoGenError::validation("task_id is required"));
        }
        if model.trim().is_empty() {
            return Err(VideoGenError::validation("model is required"));
        }
        if prompt.trim().is_empty() {
            return Err(VideoGenError::validation("prompt is required"));
        }

        let created = self.provider.create_job(model, prompt, options).await?;

        info!(
            task_id = %task_id,
            remote_job_id = %created.task_id,
            model = %model,
            "Created video generation job"
        );

        if let Err(e) = self
            .tasks
            .update_video_fields(task_id, VideoFieldsPatch::submitted(&created.task_id))
            .await
        {
            warn!(
                task_id = %task_id,
                remote_job_id = %created.task_id,
                error = %e,
                "Job created remotely but local tracking update failed"
            );
        }

        Ok(SubmitReceipt {
            remote_job_id: created.task_id,
            status: created.status,
            provider: created.provider,
            model: created.model,
            estimated_time: created.estimated_time,
        })
    }
}
