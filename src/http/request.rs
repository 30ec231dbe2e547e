//! Request extraction helpers

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::header::AUTHORIZATION;
use hyper::HeaderMap;
use std::fmt::Display;

use crate::error::RelayError;

/// Read the whole request body
pub async fn read_body<B>(body: B) -> Result<Bytes, RelayError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    body.collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| RelayError::Body(e.to_string()))
}

/// Token from the `Authorization` header with the first `"Bearer "` removed.
///
/// Empty or non-ASCII values count as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.replacen("Bearer ", "", 1);
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
