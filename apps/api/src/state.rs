use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion client behind a trait object so tests and the pipeline can
    /// substitute a scripted client.
    pub llm: Arc<dyn CompletionClient>,
}
