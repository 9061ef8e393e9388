//! Task models.
//!
//! A task carries two independent lifecycles: `status` (the work lifecycle,
//! owned by the CRUD subsystem) and `video_status` (the generation
//! lifecycle, owned by the orchestration core). The core never mutates
//! `status`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::client::{ClientId, PackageId};
use crate::generation::VideoGenStatus;

/// Unique identifier for a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Work lifecycle of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: TaskId,

    /// Owning client (never null)
    pub client_id: ClientId,

    /// Denormalized client display name
    pub client_name: String,

    /// Short title
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// AI prompt, set by the prompt generation flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Work lifecycle status
    #[serde(default)]
    pub status: TaskStatus,

    /// Package tier inherited from the client
    pub package_id: PackageId,

    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Set exactly once when the task or its video reaches completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDate>,

    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Remote job identifier from the generation provider. Set iff a
    /// submission has been made; never cleared (resubmission overwrites).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_task_id: Option<String>,

    /// Generation lifecycle status, null until the first submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_status: Option<VideoGenStatus>,

    /// Download URL, set only when `video_status` is completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with all video fields null.
    pub fn new(
        id: TaskId,
        client_id: ClientId,
        client_name: impl Into<String>,
        title: impl Into<String>,
        package_id: PackageId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            client_id,
            client_name: client_name.into(),
            title: title.into(),
            description: String::new(),
            prompt: None,
            status: TaskStatus::Pending,
            package_id,
            due_date: None,
            completed_at: None,
            notes: None,
            video_task_id: None,
            video_status: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if a generation job has been submitted for this task.
    pub fn has_submission(&self) -> bool {
        self.video_task_id.is_some()
    }
}
