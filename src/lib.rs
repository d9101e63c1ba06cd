//! dapps-gateway: static landing page plus explorer API relay.
//!
//! Serves `index.html` on every plain path, the dapps list on `/dapps.json`,
//! and forwards anything under `/explorer-api/` to the configured explorer
//! backend over HTTPS.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
