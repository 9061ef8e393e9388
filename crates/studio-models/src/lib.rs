//! Shared data models for the studio backoffice backend.
//!
//! This crate provides Serde-serializable types for:
//! - Clients and their brand profiles
//! - Tasks and the two lifecycles they carry (work status, video status)
//! - Video generation options (model, aspect ratio, duration)

pub mod client;
pub mod generation;
pub mod task;

// Re-export common types
pub use client::{BrandInfo, Client, ClientId, ClientStatus, ClientType, PackageId};
pub use generation::{AspectRatio, ClipDuration, VideoGenOptions, VideoGenStatus};
pub use task::{Task, TaskId, TaskStatus};
