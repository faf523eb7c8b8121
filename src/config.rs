//! Application configuration.
//!
//! Read from a TOML file (defaults apply when the file is missing), then
//! adjusted by command-line flags in the binary.
//!
//! ```toml
//! listen = "0.0.0.0:3000"
//! static_dir = "public"
//!
//! [sources]
//! lamps_url = "https://raw.githubusercontent.com/kubra-kzlk/lamps/main/lamps.json"
//! fabrikanten_url = "https://raw.githubusercontent.com/kubra-kzlk/lamps/main/fabrikant.json"
//!
//! [storage]
//! backend = "redb"
//! path = "data/catalog.redb"
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
pub const DEFAULT_LAMPS_URL: &str =
    "https://raw.githubusercontent.com/kubra-kzlk/lamps/main/lamps.json";
pub const DEFAULT_FABRIKANTEN_URL: &str =
    "https://raw.githubusercontent.com/kubra-kzlk/lamps/main/fabrikant.json";
pub const DEFAULT_DB_PATH: &str = "data/catalog.redb";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub listen: String,

    /// Directory of static assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,

    pub sources: SourceConfig,
    pub storage: StorageConfig,
}

/// Remote locations of the two collections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub lamps_url: String,
    pub fabrikanten_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    /// Database file, used by the redb backend.
    pub path: PathBuf,
}

/// Which document store backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    None,
    Memory,
    Redb,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            static_dir: None,
            sources: SourceConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            lamps_url: DEFAULT_LAMPS_URL.to_string(),
            fabrikanten_url: DEFAULT_FABRIKANTEN_URL.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "redb") {
            Backend::Redb
        } else {
            Backend::None
        }
    }
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::None => "none",
            Backend::Memory => "memory",
            Backend::Redb => "redb",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Backend::None),
            "memory" => Ok(Backend::Memory),
            "redb" => Ok(Backend::Redb),
            other => Err(ConfigError::Invalid(format!(
                "unknown storage backend `{}` (expected none, memory or redb)",
                other
            ))),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the port of `listen`, keeping its host.
    pub fn set_port(&mut self, port: u16) -> Result<(), ConfigError> {
        let mut addr = self.listen_addr()?;
        addr.set_port(port);
        self.listen = addr.to_string();
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen.parse().map_err(|_| {
            ConfigError::Invalid(format!("listen address `{}` is not host:port", self.listen))
        })
    }

    /// Check the values that would otherwise fail late, after startup work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;
        if self.sources.lamps_url.trim().is_empty() {
            return Err(ConfigError::Invalid("sources.lamps_url is empty".into()));
        }
        if self.sources.fabrikanten_url.trim().is_empty() {
            return Err(ConfigError::Invalid("sources.fabrikanten_url is empty".into()));
        }
        if self.storage.backend == Backend::Redb && self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.path is required for the redb backend".into(),
            ));
        }
        Ok(())
    }
}
