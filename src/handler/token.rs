//! External access token handlers
//!
//! `POST /fb/save-token` overwrites the process-wide slot, `GET /fb/token`
//! reads it back.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use super::linkedin::is_truthy;
use crate::error::RelayError;
use crate::http;
use crate::logger;
use crate::store::TokenStore;

#[derive(Serialize)]
struct Saved {
    success: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredToken {
    access_token: Value,
}

pub async fn save<B>(req: Request<B>, tokens: &TokenStore) -> Result<Response<Full<Bytes>>, RelayError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    let body = http::read_body(req.into_body()).await?;
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        logger::log_warning(&format!("JSON parse failed: {e}"));
        RelayError::InvalidJson
    })?;
    if payload.is_null() {
        return Err(RelayError::InvalidJson);
    }

    let token = payload
        .get("access_token")
        .filter(|v| is_truthy(v))
        .ok_or(RelayError::MissingAccessToken)?;

    tokens.save(token.clone()).await;
    Ok(http::json_response(StatusCode::OK, &Saved { success: true }))
}

pub async fn read(tokens: &TokenStore) -> Result<Response<Full<Bytes>>, RelayError> {
    let access_token = tokens.get().await.ok_or(RelayError::NoTokenStored)?;
    Ok(http::json_response(StatusCode::OK, &StoredToken { access_token }))
}
