//! Server startup: logging and HTTP binding

pub mod http;
pub mod logging;

pub use http::server;
pub use logging::init_logging;
