mod addresses;
mod logging;
mod records;

pub use addresses::{resolve_addresses, ServerAddresses};
pub use logging::init_logging;
pub use records::build_name_table;

use forge_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    // Logging is not initialized yet.
    match path.map(str::to_string).or_else(Config::get_config_path) {
        Some(path) => eprintln!("Loaded configuration from {}", path),
        None => eprintln!("No configuration file found, using defaults"),
    }

    Ok(config)
}

pub fn log_config_summary(config: &Config) {
    info!(
        dns_port = config.server.dns_port,
        probe_enabled = config.probe.enabled,
        probe_port = config.server.probe_port,
        upstream_enabled = config.dns.upstream_enabled,
        upstream_timeout_ms = config.dns.upstream_timeout_ms,
        unresolved = ?config.dns.unresolved_response,
        records = config.records.len(),
        "Configuration loaded"
    );
}
