//! LinkedIn API client
//!
//! Every call goes through [`forward`]: send the request, hand the upstream body
//! back on success, collapse any failure into [`RelayError::Upstream`].

use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;

use super::payload::{TokenExchangeForm, UgcPost};
use crate::config::UpstreamConfig;
use crate::error::RelayError;
use crate::logger;

pub struct UpstreamClient {
    http: reqwest::Client,
    endpoints: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(endpoints: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoints })
    }

    /// Exchange an authorization code for an access token
    pub async fn exchange_code(&self, form: &TokenExchangeForm) -> Result<Value, RelayError> {
        let request = self
            .http
            .post(&self.endpoints.token_url)
            .form(&form.upstream_pairs());
        forward(request, "LinkedIn API error").await
    }

    /// Fetch the OpenID profile of the token's owner
    pub async fn userinfo(&self, access_token: &str) -> Result<Value, RelayError> {
        let request = self
            .http
            .get(&self.endpoints.userinfo_url)
            .bearer_auth(access_token);
        forward(request, "LinkedIn UserInfo error").await
    }

    pub async fn create_post(&self, access_token: &str, post: &UgcPost) -> Result<Value, RelayError> {
        let request = self
            .http
            .post(&self.endpoints.ugc_posts_url)
            .bearer_auth(access_token)
            .header(
                "X-Restli-Protocol-Version",
                &self.endpoints.restli_protocol_version,
            )
            .json(post);
        forward(request, "LinkedIn Post error").await
    }
}

/// Send `request` and relay its body.
///
/// Any 2xx yields the body. Network errors, unreadable bodies and non-2xx
/// statuses all become [`RelayError::Upstream`] carrying the upstream body if
/// there was one, otherwise the client's error message. `label` prefixes the
/// error log line.
pub async fn forward(request: RequestBuilder, label: &str) -> Result<Value, RelayError> {
    let result = match request.send().await {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(body) if status.is_success() => Ok(parse_body(&body)),
                Ok(body) => Err(error_payload(status, &body)),
                Err(e) => Err(Value::String(e.to_string())),
            }
        }
        Err(e) => Err(Value::String(e.to_string())),
    };

    result.map_err(|payload| {
        logger::log_upstream_error(label, &payload);
        RelayError::Upstream(payload)
    })
}

/// JSON bodies are relayed as JSON, anything else as a string
fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn error_payload(status: StatusCode, body: &str) -> Value {
    if body.is_empty() {
        Value::String(format!("Request failed with status code {}", status.as_u16()))
    } else {
        parse_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use serde_json::json;

    fn client_for(server: &MockServer) -> UpstreamClient {
        UpstreamClient::new(UpstreamConfig {
            token_url: server.url("/oauth/v2/accessToken"),
            userinfo_url: server.url("/v2/userinfo"),
            ugc_posts_url: server.url("/v2/ugcPosts"),
            restli_protocol_version: "2.0.0".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_body("plain text"), json!("plain text"));
        assert_eq!(parse_body(""), json!(""));
    }

    #[test]
    fn test_error_payload_without_body() {
        assert_eq!(
            error_payload(StatusCode::BAD_GATEWAY, ""),
            json!("Request failed with status code 502")
        );
    }

    #[tokio::test]
    async fn test_userinfo_sends_bearer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/userinfo")
                    .header("authorization", "Bearer tok-1");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"sub":"abc","name":"Ada"}"#);
            })
            .await;

        let profile = client_for(&server).userinfo("tok-1").await.unwrap();
        assert_eq!(profile, json!({"sub": "abc", "name": "Ada"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_post_accepts_201() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v2/ugcPosts")
                    .header("authorization", "Bearer tok-2")
                    .header("x-restli-protocol-version", "2.0.0")
                    .header("content-type", "application/json");
                then.status(201).body(r#"{"id":"urn:li:share:1"}"#);
            })
            .await;

        let post = UgcPost::article_share(&json!("123"), json!("hello"));
        let result = client_for(&server).create_post("tok-2", &post).await.unwrap();
        assert_eq!(result, json!({"id": "urn:li:share:1"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.any_request();
                then.status(401)
                    .body(r#"{"error":"invalid_request","error_description":"bad code"}"#);
            })
            .await;

        let err = client_for(&server)
            .exchange_code(&TokenExchangeForm::default())
            .await
            .unwrap_err();
        match err {
            RelayError::Upstream(payload) => assert_eq!(
                payload,
                json!({"error": "invalid_request", "error_description": "bad code"})
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_upstream_error() {
        let client = UpstreamClient::new(UpstreamConfig {
            userinfo_url: "http://127.0.0.1:1/v2/userinfo".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();

        let err = client.userinfo("tok").await.unwrap_err();
        assert_eq!(err.status(), hyper::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, RelayError::Upstream(Value::String(_))));
    }
}
