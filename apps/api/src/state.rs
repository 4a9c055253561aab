use std::sync::Arc;

use crate::ats::pipeline::AtsPipeline;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Scoring pipeline bound to the process-wide text-generation client.
    pub pipeline: Arc<AtsPipeline>,
    pub config: Config,
}
