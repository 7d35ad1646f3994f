//! doctrans-server - HTTP service for document text extraction and AI translation.
//!
//! Two independent, stateless endpoints share one envelope contract: the
//! business logic lives in pure functions from [`HttpEvent`] to
//! [`ApiResponse`] (method guard, payload decode, dispatch, response
//! encoding), and the axum layer only adapts real requests onto that
//! contract.
//!
//! # Example
//!
//! ```ignore
//! use doctrans_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new(None);
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod event;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::HandlerError;
pub use event::{ApiResponse, HttpEvent};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
