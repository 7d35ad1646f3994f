//! Extraction route.

use axum::extract::State;
use axum::http::Method;

use crate::event::{ApiResponse, HttpEvent};
use crate::handlers;
use crate::state::AppState;

/// Document text extraction.
/// POST /extract
pub async fn extract_document(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> ApiResponse {
    let event = HttpEvent::new(method.as_str(), body);
    handlers::extract::handle(&event, &state.pipeline).await
}
