//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: preflight short-circuit, route
//! matching, dispatch, CORS tagging and access logging.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::USER_AGENT;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{linkedin, token};
use crate::config::AppState;
use crate::error::RelayError;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Endpoint};

pub const GREETING: &str = "Hello from LinkedIn Auth Backend!";

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    let started = Instant::now();
    let access_log = state.config.logging.access_log.then(|| {
        let mut entry = AccessLogEntry::new(
            remote_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.user_agent = req
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry
    });

    let response = if req.method() == Method::OPTIONS {
        http::build_preflight_response()
    } else {
        let target = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
        match routing::match_route(req.method(), target) {
            Some(endpoint) => dispatch(endpoint, req, &state)
                .await
                .unwrap_or_else(RelayError::into_response),
            None => RelayError::NotFound.into_response(),
        }
    };
    let response = http::with_cors(response);

    if let Some(mut entry) = access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch to the endpoint's handler
async fn dispatch<B>(
    endpoint: Endpoint,
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, RelayError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    match endpoint {
        Endpoint::Greeting => Ok(http::text_response(StatusCode::OK, GREETING)),
        Endpoint::LinkedInLogin => linkedin::login(req, state).await,
        Endpoint::LinkedInUserInfo => linkedin::userinfo(&req, state).await,
        Endpoint::LinkedInPost => linkedin::post(req, state).await,
        Endpoint::SaveToken => token::save(req, &state.tokens).await,
        Endpoint::ReadToken => token::read(&state.tokens).await,
    }
}
