//! Submission and reconciliation tests against a mocked provider and an
//! in-memory task store.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use studio_models::{ClientId, PackageId, Task, TaskId, VideoGenOptions, VideoGenStatus};
use studio_store::{MemoryStore, TaskStore, VideoFieldsPatch};
use studio_videogen::{
    JobSubmitter, StatusReconciler, VideoGenError, VideoProviderClient, VideoProviderConfig,
};

fn sample_task(id: &str) -> Task {
    Task::new(
        TaskId::from(id),
        ClientId::from("c1"),
        "Blue Bottle",
        "Spring teaser",
        PackageId::B,
    )
}

fn provider(server: &MockServer) -> VideoProviderClient {
    VideoProviderClient::new(VideoProviderConfig::new("provider-key", server.uri()))
}

async fn seeded_store(task_id: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert_task(sample_task(task_id)).await;
    store
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn submit_rejects_empty_task_id_without_calling_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = seeded_store("T1").await;
    let submitter = JobSubmitter::new(provider(&server), store);

    let err = submitter
        .submit(&TaskId::from(""), "sora-2", "x", &VideoGenOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VideoGenError::Validation(_)));
}

#[tokio::test]
async fn submit_rejects_empty_model_and_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = seeded_store("T1").await;
    let submitter = JobSubmitter::new(provider(&server), store);

    let err = submitter
        .submit(&TaskId::from("T1"), "", "p", &VideoGenOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VideoGenError::Validation(_)));

    let err = submitter
        .submit(&TaskId::from("T1"), "sora-2", "  ", &VideoGenOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VideoGenError::Validation(_)));
}

#[tokio::test]
async fn submit_persists_remote_id_and_processing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .and(header("authorization", "Bearer provider-key"))
        .and(body_partial_json(json!({
            "model": "veo-3.1",
            "prompt": "p",
            "autoPrompt": false,
            "aspectRatio": "16:9",
            "duration": "5"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "taskId": "R9",
            "status": "queued",
            "provider": "mp4gen",
            "model": "veo-3.1",
            "estimatedTime": "2m"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("T1").await;
    let submitter = JobSubmitter::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let receipt = submitter
        .submit(&TaskId::from("T1"), "veo-3.1", "p", &VideoGenOptions::default())
        .await
        .unwrap();

    assert_eq!(receipt.remote_job_id, "R9");
    assert_eq!(receipt.status, "queued");
    assert_eq!(receipt.estimated_time.as_deref(), Some("2m"));

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_task_id.as_deref(), Some("R9"));
    assert_eq!(task.video_status, Some(VideoGenStatus::Processing));
}

#[tokio::test]
async fn submit_passes_provider_error_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .respond_with(ResponseTemplate::new(402).set_body_string("insufficient credits"))
        .mount(&server)
        .await;

    let store = seeded_store("T1").await;
    let submitter = JobSubmitter::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let err = submitter
        .submit(&TaskId::from("T1"), "sora-2", "p", &VideoGenOptions::default())
        .await
        .unwrap_err();

    match err {
        VideoGenError::Provider { status, body } => {
            assert_eq!(status, 402);
            assert_eq!(body, "insufficient credits");
        }
        other => panic!("expected provider error, got {other:?}"),
    }

    // No local mutation on provider failure.
    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert!(task.video_task_id.is_none());
    assert!(task.video_status.is_none());
}

#[tokio::test]
async fn submit_succeeds_even_when_persistence_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "taskId": "R9",
            "status": "queued"
        })))
        .mount(&server)
        .await;

    // Empty store: the update after job creation hits NotFound.
    let store = Arc::new(MemoryStore::new());
    let submitter = JobSubmitter::new(provider(&server), store);

    let receipt = submitter
        .submit(&TaskId::from("ghost"), "sora-2", "p", &VideoGenOptions::default())
        .await
        .unwrap();
    assert_eq!(receipt.remote_job_id, "R9");
}

// ============================================================================
// Reconciliation
// ============================================================================

async fn store_with_processing_job(task_id: &str, remote_id: &str) -> Arc<MemoryStore> {
    let store = seeded_store(task_id).await;
    store
        .update_video_fields(&TaskId::from(task_id), VideoFieldsPatch::submitted(remote_id))
        .await
        .unwrap();
    store
}

fn status_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn completion_without_url_does_not_mutate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(status_response(json!({
            "taskId": "R9",
            "status": "completed",
            "videoUrl": null
        })))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let report = reconciler.reconcile("R9").await.unwrap();
    assert_eq!(report.status, "completed");
    assert!(report.video_url.is_none());

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_status, Some(VideoGenStatus::Processing));
    assert!(task.video_url.is_none());
    assert!(task.completed_at.is_none());
}

#[tokio::test]
async fn completion_with_url_persists_terminal_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(status_response(json!({
            "taskId": "R9",
            "status": "completed",
            "videoUrl": "https://x/y.mp4",
            "duration": "5",
            "provider": "mp4gen",
            "model": "veo-3.1",
            "createdAt": "2026-08-29T10:00:00Z",
            "updatedAt": "2026-08-29T10:02:00Z",
            "completedAt": "2026-08-29T10:02:00Z"
        })))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let report = reconciler.reconcile("R9").await.unwrap();
    assert_eq!(report.video_url.as_deref(), Some("https://x/y.mp4"));

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_status, Some(VideoGenStatus::Completed));
    assert_eq!(task.video_url.as_deref(), Some("https://x/y.mp4"));
    assert_eq!(task.completed_at, Some(Utc::now().date_naive()));
}

#[tokio::test]
async fn reconcile_is_idempotent_on_terminal_states() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(status_response(json!({
            "taskId": "R9",
            "status": "completed",
            "videoUrl": "https://x/y.mp4"
        })))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    reconciler.reconcile("R9").await.unwrap();
    let first = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();

    reconciler.reconcile("R9").await.unwrap();
    let second = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();

    assert_eq!(first.video_status, second.video_status);
    assert_eq!(first.video_url, second.video_url);
    assert_eq!(first.completed_at, second.completed_at);
    assert_eq!(first.video_task_id, second.video_task_id);
}

#[tokio::test]
async fn failure_persists_status_only_and_surfaces_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(status_response(json!({
            "taskId": "R9",
            "status": "failed",
            "error": "quota exceeded"
        })))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let report = reconciler.reconcile("R9").await.unwrap();
    assert_eq!(report.error.as_deref(), Some("quota exceeded"));

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_status, Some(VideoGenStatus::Failed));
    assert!(task.video_url.is_none());
    assert!(task.completed_at.is_none());
}

#[tokio::test]
async fn unrecognized_state_passes_through_without_write() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(status_response(json!({
            "taskId": "R9",
            "status": "moderating"
        })))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let report = reconciler.reconcile("R9").await.unwrap();
    assert_eq!(report.status, "moderating");

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_status, Some(VideoGenStatus::Processing));
}

#[tokio::test]
async fn provider_error_on_status_propagates_with_no_mutation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/R9"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let store = store_with_processing_job("T1", "R9").await;
    let reconciler = StatusReconciler::new(provider(&server), Arc::clone(&store) as Arc<dyn TaskStore>);

    let err = reconciler.reconcile("R9").await.unwrap_err();
    match err {
        VideoGenError::Provider { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected provider error, got {other:?}"),
    }

    let task = TaskStore::get(store.as_ref(), &TaskId::from("T1")).await.unwrap();
    assert_eq!(task.video_status, Some(VideoGenStatus::Processing));
}

#[tokio::test]
async fn terminal_write_for_unknown_remote_job_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video/status/ghost"))
        .respond_with(status_response(json!({
            "taskId": "ghost",
            "status": "failed"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let reconciler = StatusReconciler::new(provider(&server), store);

    let err = reconciler.reconcile("ghost").await.unwrap_err();
    assert!(matches!(err, VideoGenError::Store(_)));
}
