//! Video generation orchestration.
//!
//! This crate provides:
//! - `VideoProviderClient` — the wire client for the generation provider
//! - `JobSubmitter` — validate, create job, persist the remote job id
//! - `StatusReconciler` — map provider state onto the local lifecycle and
//!   persist terminal transitions idempotently

pub mod error;
pub mod provider;
pub mod reconciler;
pub mod submitter;

pub use error::{VideoGenError, VideoGenResult};
pub use provider::{JobCreated, RemoteJobStatus, VideoProviderClient, VideoProviderConfig};
pub use reconciler::{map_remote_status, ReconcileReport, StatusReconciler};
pub use submitter::{JobSubmitter, SubmitReceipt};
