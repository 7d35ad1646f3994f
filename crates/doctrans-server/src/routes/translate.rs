//! Translation route.

use axum::extract::State;
use axum::http::Method;

use crate::event::{ApiResponse, HttpEvent};
use crate::handlers;
use crate::state::AppState;

/// Text translation.
/// POST /translate
pub async fn translate_text(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> ApiResponse {
    let event = HttpEvent::new(method.as_str(), body);
    handlers::translate::handle(&event, state.translator()).await
}
