//! Request handler module
//!
//! Responsible for request routing dispatch and the relay endpoints:
//! LinkedIn OAuth/profile/post forwarding and the external token slot.

mod linkedin;
pub mod router;
mod token;

// Re-export main entry point
pub use router::handle_request;
