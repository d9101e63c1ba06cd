//! HTTP protocol layer module
//!
//! Response construction shared between static file serving and the proxy
//! relay, decoupled from specific business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{build_405_response, build_500_response, build_502_response};
