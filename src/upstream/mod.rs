//! Upstream module
//!
//! Outbound calls to LinkedIn's OAuth, user-info and UGC post APIs.

pub mod client;
pub mod payload;

pub use client::UpstreamClient;
pub use payload::{TokenExchangeForm, UgcPost};
