// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Serialize a payload into a pretty-printed JSON response
///
/// A payload that fails to serialize is reported as 500 with a fixed
/// error body instead of being propagated.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_string_pretty(body) {
        Ok(json) => build(status, json),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            build(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error"}"#.to_string(),
            )
        }
    }
}

fn build(status: StatusCode, json: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build JSON response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}
