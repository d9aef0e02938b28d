//! Explicit client configuration.
//!
//! Credentials are a value handed to the client, never read from the process
//! environment. The TOML form:
//!
//! ```toml
//! host = "https://xnat.example.org"
//! user = "analyst"
//! password = "secret"
//! scratch_dir = "/tmp/xnatcache"      # optional
//! snapshot_dir = "/data/snapshots"    # optional, offline document source
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub host: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Where the client keeps scratch storage. A fresh directory under the
    /// system temp dir is used when unset.
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
    /// Directory of saved session snapshots to read instead of a server.
    #[serde(default)]
    pub snapshot_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            scratch_dir: None,
            snapshot_dir: None,
        }
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(text, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::parse_toml(&text, &path.display().to_string())?;

        // Relative directories are relative to the config file, not the cwd.
        if let Some(base) = path.parent() {
            config.scratch_dir = config.scratch_dir.map(|dir| base.join(dir));
            config.snapshot_dir = config.snapshot_dir.map(|dir| base.join(dir));
        }
        Ok(config)
    }

    fn parse_toml(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        if config.host.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{origin}: host must not be empty")));
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("scratch_dir", &self.scratch_dir)
            .field("snapshot_dir", &self.snapshot_dir)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
