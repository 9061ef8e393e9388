//! Storage ports for the orchestration core.
//!
//! The core reads clients and writes the video-tracking fields of tasks.
//! Implementations provide the actual backing store; the in-memory adapter
//! in this crate backs tests and single-node deployments.

use async_trait::async_trait;

use studio_models::{Client, ClientId, Task, TaskId, VideoGenStatus};

use crate::error::StoreResult;

/// Partial update of a task's video-tracking fields.
///
/// Only fields that are `Some` are written. The reconciler always writes a
/// complete terminal snapshot at once, so concurrent identical writes are
/// last-write-wins on identical data.
#[derive(Debug, Clone, Default)]
pub struct VideoFieldsPatch {
    pub video_task_id: Option<String>,
    pub video_status: Option<VideoGenStatus>,
    pub video_url: Option<String>,
    pub completed_at: Option<chrono::NaiveDate>,
}

impl VideoFieldsPatch {
    /// Patch applied right after a submission: remote id + processing.
    pub fn submitted(remote_job_id: impl Into<String>) -> Self {
        Self {
            video_task_id: Some(remote_job_id.into()),
            video_status: Some(VideoGenStatus::Processing),
            ..Self::default()
        }
    }

    /// Patch for a completed job with its artifact URL.
    pub fn completed(video_url: impl Into<String>, completed_at: chrono::NaiveDate) -> Self {
        Self {
            video_status: Some(VideoGenStatus::Completed),
            video_url: Some(video_url.into()),
            completed_at: Some(completed_at),
            ..Self::default()
        }
    }

    /// Patch for a failed job. Touches nothing but the status.
    pub fn failed() -> Self {
        Self {
            video_status: Some(VideoGenStatus::Failed),
            ..Self::default()
        }
    }

    /// Apply this patch to a task in place.
    pub fn apply(&self, task: &mut Task) {
        if let Some(ref id) = self.video_task_id {
            task.video_task_id = Some(id.clone());
        }
        if let Some(status) = self.video_status {
            task.video_status = Some(status);
        }
        if let Some(ref url) = self.video_url {
            task.video_url = Some(url.clone());
        }
        if let Some(date) = self.completed_at {
            task.completed_at = Some(date);
        }
    }
}

/// Read-only access to clients.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fetch a client by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no client matches.
    async fn get(&self, id: &ClientId) -> StoreResult<Client>;
}

/// Task access for the orchestration core.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch a task by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no task matches.
    async fn get(&self, id: &TaskId) -> StoreResult<Task>;

    /// Apply a video-fields patch to a task, returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no task matches.
    async fn update_video_fields(
        &self,
        id: &TaskId,
        patch: VideoFieldsPatch,
    ) -> StoreResult<Task>;

    /// Apply a video-fields patch keyed by the remote job identifier.
    ///
    /// The reconciler only knows the remote id, not the local task id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no task carries that remote id.
    async fn update_video_fields_by_remote_job(
        &self,
        remote_job_id: &str,
        patch: VideoFieldsPatch,
    ) -> StoreResult<Task>;
}
