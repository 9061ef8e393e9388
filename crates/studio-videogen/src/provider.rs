//! Wire client for the external video-generation provider.
//!
//! The provider exposes a job-creation endpoint and a status endpoint,
//! both bearer-authenticated. Field names on the wire are camelCase.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use studio_models::VideoGenOptions;

use crate::error::{VideoGenError, VideoGenResult};

/// Configuration for the provider endpoint.
#[derive(Debug, Clone)]
pub struct VideoProviderConfig {
    /// Bearer credential
    pub api_key: String,
    /// Endpoint base URL (no trailing slash)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl VideoProviderConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateJobRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    auto_prompt: bool,
    aspect_ratio: studio_models::AspectRatio,
    duration: studio_models::ClipDuration,
    audio_url: &'a str,
    reference_image: &'a str,
}

/// Provider response to job creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreated {
    /// Remote job identifier, the key for all later reconciliation
    pub task_id: String,
    /// Provider-native initial state (e.g. "queued")
    pub status: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

/// Provider status record for a remote job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteJobStatus {
    pub task_id: String,
    /// Provider-native state string, passed through unmapped when
    /// unrecognized
    pub status: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// HTTP client for the provider.
pub struct VideoProviderClient {
    config: VideoProviderConfig,
    http: HttpClient,
}

impl VideoProviderClient {
    /// Create a new provider client.
    pub fn new(config: VideoProviderConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { config, http }
    }

    /// Create a generation job. One request, no retry; the caller decides
    /// whether to resubmit.
    ///
    /// `model` is passed through verbatim. The provider currently accepts
    /// "sora-2", "sora-2-pro", "veo-3.1", "veo-3.1-fast", "kling-v2.5-turbo"
    /// and "kling-v2.5-pro", but the set is provider-defined and not
    /// validated here.
    pub async fn create_job(
        &self,
        model: &str,
        prompt: &str,
        options: &VideoGenOptions,
    ) -> VideoGenResult<JobCreated> {
        let url = format!("{}/video/generate", self.config.base_url);
        let request = CreateJobRequest {
            model,
            prompt,
            auto_prompt: options.auto_prompt,
            aspect_ratio: options.aspect_ratio,
            duration: options.duration,
            audio_url: &options.audio_url,
            reference_image: &options.reference_image,
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
            return Err(VideoGenError::Provider { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))
    }

    /// Query status of a remote job.
    pub async fn job_status(&self, remote_job_id: &str) -> VideoGenResult<RemoteJobStatus> {
        let url = format!("{}/video/status/{}", self.config.base_url, remote_job_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VideoGenError::Provider { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| VideoGenError::InvalidResponse(e.to_string()))
    }
}
