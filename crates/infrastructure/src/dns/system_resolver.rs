use async_trait::async_trait;
use forge_dns_application::ports::UpstreamResolver;
use forge_dns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// Delegates to the host resolver (`getaddrinfo` via `tokio::net::lookup_host`).
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl UpstreamResolver for SystemResolver {
    async fn lookup_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        let target = format!("{}:0", name);

        let addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host(target))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::UpstreamResolutionFailure(format!(
                    "lookup of {} failed: {}",
                    name, e
                ))
            })?;

        let mut saw_any = false;
        for addr in addrs {
            saw_any = true;
            if let IpAddr::V4(v4) = addr.ip() {
                debug!(name = %name, address = %v4, "System resolver answered");
                return Ok(v4);
            }
        }

        if saw_any {
            Err(DomainError::InvalidAddress(format!(
                "{} resolved only to IPv6 addresses",
                name
            )))
        } else {
            Err(DomainError::UpstreamResolutionFailure(format!(
                "no addresses found for {}",
                name
            )))
        }
    }
}
