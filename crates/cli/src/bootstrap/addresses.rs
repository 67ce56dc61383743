use anyhow::Context;
use forge_dns_domain::config::ServerConfig;
use forge_dns_domain::parse_dotted_quad;
use forge_dns_infrastructure::system::detect_local_ipv4;
use std::net::Ipv4Addr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerAddresses {
    /// Address the listeners bind to.
    pub bind: Ipv4Addr,
    /// Address handed out for records without an explicit address.
    pub advertise: Ipv4Addr,
}

pub fn resolve_addresses(server: &ServerConfig) -> anyhow::Result<ServerAddresses> {
    let bind = if server.is_auto_bind() {
        let detected = detect_local_ipv4().context("Failed to detect a local IPv4 address")?;
        info!(address = %detected, "Detected interface address");
        detected
    } else {
        server
            .bind_address
            .parse::<Ipv4Addr>()
            .with_context(|| format!("Invalid bind address '{}'", server.bind_address))?
    };

    let advertise = match server.advertise_address.as_deref() {
        Some(address) => parse_dotted_quad(address)?,
        None if bind.is_unspecified() => detect_local_ipv4()
            .context("Bound to all interfaces and failed to detect an address to advertise")?,
        None => bind,
    };

    Ok(ServerAddresses { bind, advertise })
}
