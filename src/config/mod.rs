// Configuration module entry point
// Loads startup configuration from the environment and builds shared state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// Re-export public types
pub use state::AppState;
pub use types::{Config, FilesConfig, LoggingConfig, ProxyConfig, ServerConfig};

use types::RawSettings;

/// Explorer backend reached over HTTPS on port 443
pub const DEFAULT_EXPLORER_HOST: &str = "explorer-backend.dapps.dev";

/// Alternate dapps list selected by the `--testnet` flag
pub const TESTNET_DAPPS_FILE: &str = "dapps.testnet.json";

const UPSTREAM_BASE_PATH: &str = "/explorer/api";
const LOCAL_PROXY_PREFIX: &str = "/explorer-api/";

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory fills variables that are not
    /// already set (`KEY=VALUE` lines, `#` comments ignored, quotes
    /// stripped). The command line is scanned for the `--testnet` flag.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let testnet = std::env::args().skip(1).any(|arg| arg == "--testnet");
        Self::from_env(testnet)
    }

    fn from_env(testnet: bool) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("index_html", "index.html")?
            .set_default("dapps_json", "dapps.json")?
            .set_default("explorer_host", DEFAULT_EXPLORER_HOST)?
            .set_default("access_log", true)?
            .build()?;

        let raw: RawSettings = settings.try_deserialize()?;
        Ok(Self::from_raw(raw, testnet))
    }

    fn from_raw(raw: RawSettings, testnet: bool) -> Self {
        Self {
            server: ServerConfig {
                host: raw.host,
                port: raw.port,
                workers: raw.workers,
            },
            files: FilesConfig {
                index_path: PathBuf::from(raw.index_html),
                dapps_path: resolve_dapps_path(
                    PathBuf::from(raw.dapps_json),
                    Path::new(TESTNET_DAPPS_FILE),
                    testnet,
                ),
            },
            proxy: ProxyConfig {
                upstream_host: raw.explorer_host,
                upstream_base_path: UPSTREAM_BASE_PATH.to_string(),
                local_prefix: LOCAL_PROXY_PREFIX.to_string(),
            },
            logging: LoggingConfig {
                access_log: raw.access_log,
            },
        }
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Pick the dapps file for this run.
///
/// The flag switches to the alternate list only when it is present on disk;
/// otherwise the configured path (env override or default) is kept.
fn resolve_dapps_path(configured: PathBuf, alternate: &Path, testnet: bool) -> PathBuf {
    if testnet && alternate.is_file() {
        alternate.to_path_buf()
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_defaults() -> RawSettings {
        RawSettings {
            host: "0.0.0.0".to_string(),
            port: 8000,
            index_html: "index.html".to_string(),
            dapps_json: "dapps.json".to_string(),
            explorer_host: DEFAULT_EXPLORER_HOST.to_string(),
            workers: None,
            access_log: true,
        }
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::from_raw(raw_defaults(), false);
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.files.index_path, Path::new("index.html"));
        assert_eq!(cfg.files.dapps_path, Path::new("dapps.json"));
        assert_eq!(cfg.proxy.local_prefix, "/explorer-api/");
        assert_eq!(cfg.proxy.upstream_base_path, "/explorer/api");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::from_raw(raw_defaults(), false);
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);

        let mut raw = raw_defaults();
        raw.port = 9999;
        let cfg = Config::from_raw(raw, false);
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 9999);
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut raw = raw_defaults();
        raw.host = "not a host".to_string();
        let cfg = Config::from_raw(raw, false);
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_testnet_flag_requires_file_on_disk() {
        let configured = PathBuf::from("dapps.json");
        let missing = Path::new("definitely-missing-dapps.testnet.json");
        assert_eq!(
            resolve_dapps_path(configured.clone(), missing, true),
            configured
        );
    }

    #[test]
    fn test_testnet_flag_switches_when_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let alternate = dir.path().join("dapps.testnet.json");
        std::fs::write(&alternate, "[]").unwrap();

        let configured = PathBuf::from("dapps.json");
        assert_eq!(
            resolve_dapps_path(configured.clone(), &alternate, true),
            alternate
        );
        // Without the flag the alternate is ignored even when present
        assert_eq!(
            resolve_dapps_path(configured.clone(), &alternate, false),
            configured
        );
    }
}
