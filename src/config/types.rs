// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub proxy: ProxyConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Static file configuration
///
/// Two fixed filesystem locations, resolved once at startup. Contents are
/// read fresh on every request; the request path never maps onto the
/// filesystem.
#[derive(Debug, Clone)]
pub struct FilesConfig {
    pub index_path: PathBuf,
    pub dapps_path: PathBuf,
}

/// Upstream proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream hostname, always reached over HTTPS on port 443
    pub upstream_host: String,
    /// Base path prepended to the stripped sub-path
    pub upstream_base_path: String,
    /// Local path prefix that triggers proxying instead of static serving
    pub local_prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Flat view of the environment-sourced settings, deserialized by the
/// `config` crate before being assembled into [`Config`].
#[derive(Debug, Deserialize)]
pub(crate) struct RawSettings {
    pub host: String,
    pub port: u16,
    pub index_html: String,
    pub dapps_json: String,
    pub explorer_host: String,
    pub workers: Option<usize>,
    pub access_log: bool,
}
