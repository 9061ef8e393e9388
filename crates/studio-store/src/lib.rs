//! Storage abstraction for the studio backoffice.
//!
//! This crate provides:
//! - `ClientStore` / `TaskStore` ports used by the orchestration core
//! - `VideoFieldsPatch` partial updates for video-tracking fields
//! - An injectable in-memory backend

pub mod error;
pub mod memory;
pub mod ports;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use ports::{ClientStore, TaskStore, VideoFieldsPatch};
