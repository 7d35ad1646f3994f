//! Request envelope and response encoding.
//!
//! Both endpoints speak the same function-style envelope: an inbound
//! [`HttpEvent`] with the HTTP method and raw JSON body, and an outbound
//! [`ApiResponse`] with status, headers, and an encoded JSON body. The
//! CORS/method guard and the fixed header sets live here so every handler
//! shares one encoding.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Inbound request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpEvent {
    /// HTTP method of the invocation.
    #[serde(rename = "httpMethod")]
    pub http_method: String,

    /// Raw JSON-encoded request body.
    #[serde(default = "default_body")]
    pub body: String,
}

fn default_body() -> String {
    "{}".to_string()
}

impl HttpEvent {
    /// Create an envelope from a method string and body.
    pub fn new(http_method: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body: body.into(),
        }
    }

    /// Router/CORS guard.
    ///
    /// Returns the short-circuit response for pre-flight checks and
    /// disallowed methods, or `None` when the request may proceed to the
    /// payload decoder.
    pub fn method_guard(&self) -> Option<ApiResponse> {
        match self.http_method.to_ascii_uppercase().as_str() {
            "OPTIONS" => Some(ApiResponse::preflight()),
            "POST" => None,
            _ => Some(ApiResponse::error(
                StatusCode::METHOD_NOT_ALLOWED.as_u16(),
                "Method not allowed",
            )),
        }
    }
}

/// Outbound response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTP status code.
    pub status_code: u16,

    /// Response headers.
    pub headers: HashMap<String, String>,

    /// JSON-encoded body, or empty for pre-flight.
    pub body: String,

    /// Always false; bodies are never base64-encoded.
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    fn base_headers() -> HashMap<String, String> {
        HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ])
    }

    /// Pre-flight response: 200, empty body, extended CORS header set.
    pub fn preflight() -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: HashMap::from([
                ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
                (
                    "Access-Control-Allow-Methods".to_string(),
                    "POST, OPTIONS".to_string(),
                ),
                (
                    "Access-Control-Allow-Headers".to_string(),
                    "Content-Type".to_string(),
                ),
                ("Access-Control-Max-Age".to_string(), "86400".to_string()),
            ]),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON response with the fixed header set.
    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        Self {
            status_code,
            headers: Self::base_headers(),
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    /// Error response; the body is always a single-key `error` object.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self::json(status_code, &json!({ "error": message.into() }))
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut builder = Response::builder().status(status);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        builder
            .body(Body::from(self.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_passes_post() {
        let event = HttpEvent::new("POST", "{}");
        assert!(event.method_guard().is_none());
    }

    #[test]
    fn test_guard_preflight() {
        let event = HttpEvent::new("OPTIONS", "");
        let resp = event.method_guard().unwrap();
        assert_eq!(resp.status_code, 200);
        assert!(resp.body.is_empty());
        assert_eq!(
            resp.headers.get("Access-Control-Allow-Methods").map(String::as_str),
            Some("POST, OPTIONS")
        );
        assert_eq!(
            resp.headers.get("Access-Control-Max-Age").map(String::as_str),
            Some("86400")
        );
    }

    #[test]
    fn test_guard_rejects_other_methods() {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let event = HttpEvent::new(method, "{}");
            let resp = event.method_guard().unwrap();
            assert_eq!(resp.status_code, 405);
            assert_eq!(resp.body, r#"{"error":"Method not allowed"}"#);
        }
    }

    #[test]
    fn test_guard_normalizes_method_case() {
        let event = HttpEvent::new("options", "");
        assert_eq!(event.method_guard().unwrap().status_code, 200);
    }

    #[test]
    fn test_json_responses_carry_cors_and_content_type() {
        let resp = ApiResponse::error(400, "Invalid JSON");
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            resp.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
        assert!(!resp.is_base64_encoded);
    }

    #[test]
    fn test_envelope_serialization_field_names() {
        let resp = ApiResponse::error(405, "Method not allowed");
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("statusCode").is_some());
        assert!(value.get("isBase64Encoded").is_some());

        let event: HttpEvent = serde_json::from_str(r#"{"httpMethod": "POST"}"#).unwrap();
        assert_eq!(event.body, "{}");
    }
}
