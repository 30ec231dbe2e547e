// Application state module
// Shared, per-process state handed to every request handler

use super::types::Config;
use crate::store::TokenStore;
use crate::upstream::UpstreamClient;

/// Application state
pub struct AppState {
    pub config: Config,
    /// LinkedIn API client
    pub upstream: UpstreamClient,
    /// The single externally supplied access token
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        Ok(Self {
            config,
            upstream,
            tokens: TokenStore::new(),
        })
    }
}
