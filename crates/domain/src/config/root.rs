use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeConfig;
use super::records::{default_records, RecordBinding};
use super::server::ServerConfig;
use crate::address::parse_dotted_quad;

/// Main configuration structure for forge-dns
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Listener configuration (bind address, ports)
    pub server: ServerConfig,

    /// Answer and upstream fallback behaviour
    pub dns: DnsConfig,

    /// Static name table, `"*"` is the wildcard
    pub records: Vec<RecordBinding>,

    /// HTTP probe responder
    pub probe: ProbeConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dns: DnsConfig::default(),
            records: default_records(),
            probe: ProbeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. forge-dns.toml in current directory
    /// 3. /etc/forge-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
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
        if let Some(port) = overrides.probe_port {
            self.server.probe_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(advertise) = overrides.advertise_address {
            self.server.advertise_address = Some(advertise);
        }
        if overrides.disable_probe {
            self.probe.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Static record addresses are checked here so a typo fails startup
    /// instead of surfacing on the first query.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.probe.enabled && self.server.probe_port == 0 {
            return Err(ConfigError::Validation(
                "Probe port cannot be 0".to_string(),
            ));
        }

        if !self.server.is_auto_bind() {
            self.server
                .bind_address
                .parse::<Ipv4Addr>()
                .map_err(|_| {
                    ConfigError::Validation(format!(
                        "Invalid bind address '{}'",
                        self.server.bind_address
                    ))
                })?;
        }

        if let Some(ref advertise) = self.server.advertise_address {
            parse_dotted_quad(advertise).map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        if self.dns.upstream_enabled && self.dns.upstream_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        for record in &self.records {
            if record.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Record with empty name".to_string(),
                ));
            }
            if let Some(ref address) = record.address {
                parse_dotted_quad(address).map_err(|e| {
                    ConfigError::Validation(format!("Record '{}': {}", record.name, e))
                })?;
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("forge-dns.toml").exists() {
            Some("forge-dns.toml".to_string())
        } else if std::path::Path::new("/etc/forge-dns/config.toml").exists() {
            Some("/etc/forge-dns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub probe_port: Option<u16>,
    pub bind_address: Option<String>,
    pub advertise_address: Option<String>,
    pub disable_probe: bool,
    pub log_level: Option<String>,
}
