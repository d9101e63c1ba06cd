// Application state module
// Read-only runtime state shared by every connection

use super::types::Config;

/// Application state
///
/// Constructed once in `main` and shared behind an `Arc`. Nothing in here
/// mutates after startup, so no locking is needed anywhere.
pub struct AppState {
    pub config: Config,
    /// Reused client for upstream relays; pools connections internally
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Fails only when the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: config.clone(),
            http_client: reqwest::Client::builder().build()?,
        })
    }
}
