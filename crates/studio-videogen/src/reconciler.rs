//! Video status reconciliation.
//!
//! Re-derives local video state from the provider's status endpoint.
//! Designed to be invoked repeatedly by an external scheduler per
//! outstanding job until a terminal state is reached; calling it zero,
//! one or many times after that must not corrupt the stored record.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use studio_models::VideoGenStatus;
use studio_store::{TaskStore, VideoFieldsPatch};

use crate::error::VideoGenResult;
use crate::provider::{RemoteJobStatus, VideoProviderClient};

/// Map a provider-native state onto the local video lifecycle.
///
/// Unrecognized states return `None`: treated as transient, passed through
/// to the caller unmapped, safe to re-poll.
pub fn map_remote_status(status: &str) -> Option<VideoGenStatus> {
    match status {
        "queued" | "pending" | "running" | "processing" | "in_progress" => {
            Some(VideoGenStatus::Processing)
        }
        "completed" | "succeeded" | "success" => Some(VideoGenStatus::Completed),
        "failed" | "error" => Some(VideoGenStatus::Failed),
        _ => None,
    }
}

/// Reconciliation result, provider fields passed through verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub remote_job_id: String,
    /// Provider-native state string
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

impl ReconcileReport {
    fn from_remote(remote_job_id: &str, remote: RemoteJobStatus) -> Self {
        Self {
            remote_job_id: remote_job_id.to_string(),
            status: remote.status,
            video_url: remote.video_url,
            duration: remote.duration,
            provider: remote.provider,
            model: remote.model,
            error: remote.error,
            created_at: remote.created_at,
            updated_at: remote.updated_at,
            completed_at: remote.completed_at,
        }
    }
}

/// Polls provider status and persists terminal transitions.
pub struct StatusReconciler {
    provider: VideoProviderClient,
    tasks: Arc<dyn TaskStore>,
}

impl StatusReconciler {
    pub fn new(provider: VideoProviderClient, tasks: Arc<dyn TaskStore>) -> Self {
        Self { provider, tasks }
    }

    /// Reconcile one remote job.
    ///
    /// Persistence happens only on definitive transitions:
    /// - completed with a non-empty video URL: writes status, URL and
    ///   today's date. A completion claim without a URL is treated as
    ///   not-yet-terminal and leaves the record untouched.
    /// - failed: writes status only.
    ///
    /// Non-terminal and unrecognized states never write. A non-success
    /// provider response propagates verbatim with no local mutation.
    /// Re-applying the same terminal transition rewrites identical values,
    /// so concurrent reconciliations of one job are last-write-wins on
    /// identical data.
    pub async fn reconcile(&self, remote_job_id: &str) -> VideoGenResult<ReconcileReport> {
        let remote = self.provider.job_status(remote_job_id).await?;

        match map_remote_status(&remote.status) {
            Some(VideoGenStatus::Completed) => {
                match remote.video_url.as_deref().filter(|u| !u.is_empty()) {
                    Some(url) => {
                        let today = Utc::now().date_naive();
                        self.tasks
                            .update_video_fields_by_remote_job(
                                remote_job_id,
                                VideoFieldsPatch::completed(url, today),
                            )
                            .await?;
                        info!(remote_job_id, url, "Video generation completed");
                    }
                    None => {
                        // Completion without an artifact reference is not
                        // terminal yet; the caller should re-poll.
                        debug!(remote_job_id, "Completion reported without video URL, skipping write");
                    }
                }
            }
            Some(VideoGenStatus::Failed) => {
                self.tasks
                    .update_video_fields_by_remote_job(remote_job_id, VideoFieldsPatch::failed())
                    .await?;
                info!(
                    remote_job_id,
                    error = remote.error.as_deref().unwrap_or(""),
                    "Video generation failed"
                );
            }
            Some(VideoGenStatus::Processing) => {
                debug!(remote_job_id, status = %remote.status, "Job still processing");
            }
            None => {
                debug!(remote_job_id, status = %remote.status, "Unrecognized provider state, passing through");
            }
        }

        Ok(ReconcileReport::from_remote(remote_job_id, remote))
    }
}
