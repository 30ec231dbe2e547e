//! Relay error type
//!
//! Every failure a handler can produce, with the status code and `{"error": ...}`
//! body the client sees for it.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

use crate::http;

#[derive(Debug, Error)]
pub enum RelayError {
    /// No token in the `Authorization` header (user info) or save body
    #[error("Missing access_token")]
    MissingAccessToken,

    /// No bearer token on a post request
    #[error("Missing access token")]
    MissingBearerToken,

    #[error("Missing sub or content in body")]
    MissingPostFields,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("No token found")]
    NoTokenStored,

    #[error("Not found")]
    NotFound,

    #[error("Failed to read request body: {0}")]
    Body(String),

    /// Request could not be processed (e.g. post body is not JSON)
    #[error("{0}")]
    Processing(String),

    /// Upstream call failed; carries the upstream error body or the client error message
    #[error("upstream request failed: {0}")]
    Upstream(Value),
}

impl RelayError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingAccessToken
            | Self::MissingPostFields
            | Self::InvalidJson
            | Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::MissingBearerToken => StatusCode::UNAUTHORIZED,
            Self::NoTokenStored | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Processing(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value placed under the `error` key
    fn payload(self) -> Value {
        match self {
            Self::Upstream(payload) => payload,
            other => Value::String(other.to_string()),
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        let status = self.status();
        http::json_response(status, &json!({ "error": self.payload() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: RelayError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors() {
        assert_eq!(
            body_of(RelayError::MissingAccessToken).await,
            (StatusCode::BAD_REQUEST, r#"{"error":"Missing access_token"}"#.to_string())
        );
        assert_eq!(
            body_of(RelayError::MissingBearerToken).await,
            (StatusCode::UNAUTHORIZED, r#"{"error":"Missing access token"}"#.to_string())
        );
        assert_eq!(
            body_of(RelayError::NotFound).await,
            (StatusCode::NOT_FOUND, r#"{"error":"Not found"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_upstream_payload_is_forwarded_verbatim() {
        let payload = json!({"serviceErrorCode": 65600, "message": "Invalid access token", "status": 401});
        let (status, body) = body_of(RelayError::Upstream(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            r#"{"error":{"serviceErrorCode":65600,"message":"Invalid access token","status":401}}"#
        );
    }
}
