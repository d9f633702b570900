use std::sync::Arc;

use crate::llm_client::TextModel;
use crate::presets::PresetStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The text model behind every analysis and ranking call. Held as a trait
    /// object so tests can swap in a scripted double.
    pub model: Arc<dyn TextModel>,
    pub presets: Arc<PresetStore>,
}
