//! Video generation option and lifecycle types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Local video generation lifecycle, reconciled from provider-reported
/// job state. Independent of the task's work lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoGenStatus {
    /// A remote job exists and has not reached a terminal state
    Processing,
    /// The remote job produced a playable video
    Completed,
    /// The remote job failed
    Failed,
}

impl VideoGenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoGenStatus::Processing => "processing",
            VideoGenStatus::Completed => "completed",
            VideoGenStatus::Failed => "failed",
        }
    }

    /// Check if this is a terminal state (no more transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoGenStatus::Completed | VideoGenStatus::Failed)
    }
}

impl fmt::Display for VideoGenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output aspect ratio accepted by the generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clip length in seconds. The provider only accepts 5 or 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClipDuration {
    #[default]
    #[serde(rename = "5")]
    FiveSeconds,
    #[serde(rename = "10")]
    TenSeconds,
}

impl ClipDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipDuration::FiveSeconds => "5",
            ClipDuration::TenSeconds => "10",
        }
    }

    pub fn seconds(&self) -> u32 {
        match self {
            ClipDuration::FiveSeconds => 5,
            ClipDuration::TenSeconds => 10,
        }
    }
}

/// Optional knobs for a generation request. All fields have provider
/// defaults; an empty struct is a valid request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoGenOptions {
    /// Let the provider rewrite the prompt before generation
    #[serde(default)]
    pub auto_prompt: bool,

    /// Output aspect ratio
    #[serde(default)]
    pub aspect_ratio: AspectRatio,

    /// Clip length
    #[serde(default)]
    pub duration: ClipDuration,

    /// Optional background audio URL
    #[serde(default)]
    pub audio_url: String,

    /// Optional reference image URL for image-to-video models
    #[serde(default)]
    pub reference_image: String,
}
