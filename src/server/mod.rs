// Server module
// TCP listener, connection serving, accept loop and shutdown signals

mod connection;
mod listener;
mod signal;

// `loop` is a keyword, so the module file is mapped explicitly
#[path = "loop.rs"]
mod server_loop;

pub use listener::create_listener;
pub use server_loop::start_server_loop;
pub use signal::start_signal_handler;
