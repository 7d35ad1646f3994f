//! Route definitions adapting HTTP requests onto the envelope handlers.

mod extract;
mod health;
mod translate;

use axum::{
    routing::{any, get},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
///
/// `/extract` and `/translate` are registered for any method so the
/// envelope guard owns method handling (pre-flight 200, 405 otherwise).
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/extract", any(extract::extract_document))
        .route("/translate", any(translate::translate_text))
        .with_state(state)
}

pub use extract::*;
pub use health::*;
pub use translate::*;
