//! Prompt composition and generation.
//!
//! This crate provides:
//! - `compose` — the deterministic prompt template over a brand profile
//! - `PromptGenerator` — the language-model client with composer fallback
//!   for the client-scoped path and verbatim error passthrough for the
//!   title-scoped path

pub mod client;
pub mod composer;
pub mod error;

pub use client::{PromptGenConfig, PromptGenerator, Provenance};
pub use composer::compose;
pub use error::{PromptError, PromptResult};
