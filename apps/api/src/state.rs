use std::sync::Arc;

use crate::corpus::CorpusStore;
use crate::roadmap::curated::CuratedCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one-time corpus load. Immutable after startup; all request
    /// handling reads it lock-free.
    pub corpus: Arc<CorpusStore>,
    /// Built-in curated roadmaps, keyed by normalized career name.
    pub curated: Arc<CuratedCatalog>,
}
