//! API handlers.

pub mod health;
pub mod prompts;
pub mod video;

pub use health::health;
