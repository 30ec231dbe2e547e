//! Routing module
//!
//! Maps (method, path) pairs onto relay endpoints.

pub mod matcher;

pub use matcher::{match_route, Endpoint};
