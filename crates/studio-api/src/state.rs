//! Application state.

use std::sync::Arc;

use studio_promptgen::{PromptGenConfig, PromptGenerator};
use studio_store::{ClientStore, MemoryStore, TaskStore};
use studio_videogen::{JobSubmitter, StatusReconciler, VideoProviderClient, VideoProviderConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub clients: Arc<dyn ClientStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub prompts: Arc<PromptGenerator>,
    pub submitter: Arc<JobSubmitter>,
    pub reconciler: Arc<StatusReconciler>,
}

impl AppState {
    /// Create application state over injected stores.
    pub fn new(
        config: ApiConfig,
        clients: Arc<dyn ClientStore>,
        tasks: Arc<dyn TaskStore>,
    ) -> Self {
        let mut prompt_config =
            PromptGenConfig::new(&config.openai_api_key, &config.openai_api_base);
        prompt_config.timeout = config.request_timeout;
        let prompts = Arc::new(PromptGenerator::new(prompt_config));

        let mut provider_config =
            VideoProviderConfig::new(&config.video_api_key, &config.video_api_base);
        provider_config.timeout = config.request_timeout;

        let submitter = Arc::new(JobSubmitter::new(
            VideoProviderClient::new(provider_config.clone()),
            Arc::clone(&tasks),
        ));
        let reconciler = Arc::new(StatusReconciler::new(
            VideoProviderClient::new(provider_config),
            Arc::clone(&tasks),
        ));

        Self {
            config,
            clients,
            tasks,
            prompts,
            submitter,
            reconciler,
        }
    }

    /// Create state backed by a fresh in-memory store, returning the store
    /// for seeding.
    pub fn in_memory(config: ApiConfig) -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = Self::new(
            config,
            Arc::clone(&store) as Arc<dyn ClientStore>,
            Arc::clone(&store) as Arc<dyn TaskStore>,
        );
        (state, store)
    }
}
