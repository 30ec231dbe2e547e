//! HTTP protocol layer module
//!
//! Request extraction and response building shared by all handlers,
//! decoupled from the LinkedIn specifics.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{bearer_token, read_body};
pub use response::{build_preflight_response, json_response, text_response, with_cors};
