use std::sync::Arc;

use crate::config::Config;
use crate::gateway::TextGateway;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Text-improvement gateway. `DisabledGateway` when no API key is configured.
    pub gateway: Arc<dyn TextGateway>,
    pub config: Config,
}
