use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::response::ResponsePolicy;
use super::server::ServerConfig;
use crate::wire::HEADER_LEN;

const LOCAL_CONFIG_PATH: &str = "stub-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/stub-dns/config.toml";
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration structure for stub-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listen address and datagram limits
    pub server: ServerConfig,

    /// Response header construction
    pub response: ResponsePolicy,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. stub-dns.toml in current directory
    /// 3. /etc/stub-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self
            .server
            .bind_address
            .parse::<std::net::IpAddr>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if self.server.max_datagram_size < HEADER_LEN || self.server.max_datagram_size > 65_535 {
            return Err(ConfigError::Validation(format!(
                "max_datagram_size must be between {} and 65535, got {}",
                HEADER_LEN, self.server.max_datagram_size
            )));
        }

        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }
        // Anything without directive syntax must name a level, or EnvFilter
        // reads it as a target and mutes every other event.
        if !level.contains(['=', ',', ':'])
            && !LOG_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level))
        {
            return Err(ConfigError::Validation(format!(
                "Invalid log level '{}': expected one of {} or a filter directive",
                level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}
