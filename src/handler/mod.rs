//! Request handler module
//!
//! Routing dispatch plus the two request backends: fixed-file serving and
//! the explorer proxy relay.

pub mod proxy;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
