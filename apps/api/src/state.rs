use std::sync::Arc;

use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider client behind a trait object so tests can script replies.
    /// `None` while OPENAI_API_KEY is unset; the analyze endpoint reports
    /// the missing configuration instead of attempting a call.
    pub llm: Option<Arc<dyn LlmClient>>,
}
