//! Mode routing
//!
//! The service runs in a single mode: the HTTP server.

pub mod server;

pub use server::run_server;
