use serde::{Deserialize, Serialize};

/// `bind_address` value that asks bootstrap to detect the active interface.
pub const AUTO_BIND_ADDRESS: &str = "auto";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Address handed out for records bound without an explicit address.
    /// Falls back to the bind address when unset.
    #[serde(default)]
    pub advertise_address: Option<String>,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_probe_port")]
    pub probe_port: u16,
}

impl ServerConfig {
    pub fn is_auto_bind(&self) -> bool {
        self.bind_address.eq_ignore_ascii_case(AUTO_BIND_ADDRESS)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            advertise_address: None,
            dns_port: default_dns_port(),
            probe_port: default_probe_port(),
        }
    }
}

fn default_bind_address() -> String {
    AUTO_BIND_ADDRESS.to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_probe_port() -> u16 {
    80
}
