//! In-memory store backend.
//!
//! Thread-safe via internal `RwLock`. Backs tests and single-node demo
//! deployments; the store is injected, never a process-wide global.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use studio_models::{Client, ClientId, Task, TaskId};

use crate::error::{StoreError, StoreResult};
use crate::ports::{ClientStore, TaskStore, VideoFieldsPatch};

/// In-memory implementation of [`ClientStore`] and [`TaskStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a client record.
    pub async fn insert_client(&self, client: Client) {
        self.clients.write().await.insert(client.id.clone(), client);
    }

    /// Seed a task record.
    pub async fn insert_task(&self, task: Task) {
        self.tasks.write().await.insert(task.id.clone(), task);
    }

    /// Number of stored tasks.
    pub async fn task_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn get(&self, id: &ClientId) -> StoreResult<Client> {
        self.clients
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("client {id}")))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn get(&self, id: &TaskId) -> StoreResult<Task> {
        self.tasks
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("task {id}")))
    }

    async fn update_video_fields(
        &self,
        id: &TaskId,
        patch: VideoFieldsPatch,
    ) -> StoreResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(format!("task {id}")))?;
        patch.apply(task);
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn update_video_fields_by_remote_job(
        &self,
        remote_job_id: &str,
        patch: VideoFieldsPatch,
    ) -> StoreResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .values_mut()
            .find(|t| t.video_task_id.as_deref() == Some(remote_job_id))
            .ok_or_else(|| {
                StoreError::not_found(format!("task with remote job {remote_job_id}"))
            })?;
        patch.apply(task);
        task.updated_at = Utc::now();
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_models::{PackageId, VideoGenStatus};

    fn sample_task(id: &str) -> Task {
        Task::new(
            TaskId::from(id),
            ClientId::from("c1"),
            "Blue Bottle",
            "Spring teaser",
            PackageId::B,
        )
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let store = MemoryStore::new();
        let err = TaskStore::get(&store, &TaskId::from("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submitted_patch_sets_remote_id_and_processing() {
        let store = MemoryStore::new();
        store.insert_task(sample_task("t1")).await;

        let updated = store
            .update_video_fields(&TaskId::from("t1"), VideoFieldsPatch::submitted("remote-9"))
            .await
            .unwrap();

        assert_eq!(updated.video_task_id.as_deref(), Some("remote-9"));
        assert_eq!(updated.video_status, Some(VideoGenStatus::Processing));
        assert!(updated.video_url.is_none());
    }

    #[tokio::test]
    async fn test_update_by_remote_job_finds_submitted_task() {
        let store = MemoryStore::new();
        store.insert_task(sample_task("t1")).await;
        store
            .update_video_fields(&TaskId::from("t1"), VideoFieldsPatch::submitted("remote-9"))
            .await
            .unwrap();

        let today = Utc::now().date_naive();
        let updated = store
            .update_video_fields_by_remote_job(
                "remote-9",
                VideoFieldsPatch::completed("https://cdn/x.mp4", today),
            )
            .await
            .unwrap();

        assert_eq!(updated.video_status, Some(VideoGenStatus::Completed));
        assert_eq!(updated.video_url.as_deref(), Some("https://cdn/x.mp4"));
        assert_eq!(updated.completed_at, Some(today));
    }

    #[tokio::test]
    async fn test_update_by_unknown_remote_job_is_not_found() {
        let store = MemoryStore::new();
        store.insert_task(sample_task("t1")).await;

        let err = store
            .update_video_fields_by_remote_job("ghost", VideoFieldsPatch::failed())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_failed_patch_leaves_url_untouched() {
        let store = MemoryStore::new();
        store.insert_task(sample_task("t1")).await;
        store
            .update_video_fields(&TaskId::from("t1"), VideoFieldsPatch::submitted("remote-9"))
            .await
            .unwrap();

        let updated = store
            .update_video_fields_by_remote_job("remote-9", VideoFieldsPatch::failed())
            .await
            .unwrap();
        assert_eq!(updated.video_status, Some(VideoGenStatus::Failed));
        assert!(updated.video_url.is_none());
        assert!(updated.completed_at.is_none());
    }
}
