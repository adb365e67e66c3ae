use std::sync::Arc;

use crate::clues::ClueSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable clue source. Default: the Gemini-backed source. Swapped for
    /// the bundled sample data via USE_SAMPLE_CROSSWORD_DATA.
    pub clue_source: Arc<dyn ClueSource>,
    /// Runtime settings, retained for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
