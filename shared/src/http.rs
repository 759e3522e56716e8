//! HTTP helpers for the Lambda variant.

use lambda_http::{Body, Response};
use serde::Serialize;

/// Error payload returned for malformed webhook requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Create an error response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}
