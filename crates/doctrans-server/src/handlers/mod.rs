//! Envelope handlers: pure functions from [`crate::HttpEvent`] to
//! [`crate::ApiResponse`], independent of the axum layer.

pub mod extract;
pub mod translate;
