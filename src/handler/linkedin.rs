//! LinkedIn relay handlers
//!
//! Token exchange, profile lookup and share posting. Each handler reshapes the
//! client request, forwards it upstream and relays the upstream JSON at 200.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use serde_json::Value;
use std::fmt::Display;

use crate::config::AppState;
use crate::error::RelayError;
use crate::http;
use crate::upstream::{TokenExchangeForm, UgcPost};

/// `POST /linkedin-login`: exchange an authorization code for an access token
pub async fn login<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, RelayError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    let body = http::read_body(req.into_body()).await?;
    let form = TokenExchangeForm::parse(&body);
    let token = state.upstream.exchange_code(&form).await?;
    Ok(http::json_response(StatusCode::OK, &token))
}

/// `GET /linkedin-userinfo`: fetch the profile behind a bearer token
pub async fn userinfo<B>(req: &Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, RelayError> {
    let access_token = http::bearer_token(req.headers()).ok_or(RelayError::MissingAccessToken)?;
    let profile = state.upstream.userinfo(&access_token).await?;
    Ok(http::json_response(StatusCode::OK, &profile))
}

/// `POST /linkedin-post`: publish `content` as an article share by `sub`
pub async fn post<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, RelayError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    let (parts, body) = req.into_parts();
    let body = http::read_body(body).await?;
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| RelayError::Processing(e.to_string()))?;
    if payload.is_null() {
        return Err(RelayError::Processing(
            "Cannot read sub and content from a null body".to_string(),
        ));
    }

    let access_token = http::bearer_token(&parts.headers).ok_or(RelayError::MissingBearerToken)?;

    let sub = payload.get("sub").filter(|v| is_truthy(v));
    let content = payload.get("content").filter(|v| is_truthy(v));
    let (Some(sub), Some(content)) = (sub, content) else {
        return Err(RelayError::MissingPostFields);
    };

    let post = UgcPost::article_share(sub, content.clone());
    let result = state.upstream.create_post(&access_token, &post).await?;
    Ok(http::json_response(StatusCode::OK, &result))
}

/// Presence check: null, false, 0 and "" count as missing
pub(super) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("123")));
        assert!(is_truthy(&json!(123)));
        assert!(is_truthy(&json!([])));
    }
}
