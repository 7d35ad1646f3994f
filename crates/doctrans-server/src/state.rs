//! Server state management.

use std::sync::Arc;

use doctrans_extractors::ExtractionPipeline;
use doctrans_llm::Translator;

/// Shared application state.
///
/// Both collaborators are immutable after startup; invocations share
/// nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Extraction strategies, registered once.
    pub pipeline: Arc<ExtractionPipeline>,

    /// Translation relay; `None` when no credential was configured.
    pub translator: Option<Arc<dyn Translator>>,
}

impl AppState {
    /// Create application state with the default extraction pipeline.
    pub fn new(translator: Option<Arc<dyn Translator>>) -> Self {
        Self {
            pipeline: Arc::new(ExtractionPipeline::with_defaults()),
            translator,
        }
    }

    /// Borrow the translator, if configured.
    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Whether the translation relay is usable.
    pub fn is_translator_configured(&self) -> bool {
        self.translator.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}
