// config.rs — server configuration (optional TOML file + flag/env overrides).

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 4310;

/// Server configuration. Every field has a default, so a missing or partial
/// config file is fine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port for the REST server.
    pub port: u16,
    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access).
    pub bind_address: String,
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    /// Apply CLI-flag/env-var overrides on top of file values.
    pub fn apply_overrides(
        mut self,
        port: Option<u16>,
        bind: Option<String>,
        log: Option<String>,
    ) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(bind) = bind {
            self.bind_address = bind;
        }
        if let Some(log) = log {
            self.log_level = log;
        }
        self
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid bind address '{}:{}'",
                    self.bind_address, self.port
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_are_sane() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.log_level, "info");
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskd.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "port = 9000").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_address, "127.0.0.1");
    }

    #[test]
    fn overrides_beat_file_values() {
        let config = ServerConfig::default().apply_overrides(
            Some(8888),
            Some("0.0.0.0".to_string()),
            None,
        );
        assert_eq!(config.port, 8888);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ServerConfig::load(Path::new("/nonexistent/taskd.toml")).is_err());
    }
}
