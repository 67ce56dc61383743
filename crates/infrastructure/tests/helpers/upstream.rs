use async_trait::async_trait;
use forge_dns_application::ports::UpstreamResolver;
use forge_dns_domain::DomainError;
use std::net::Ipv4Addr;

pub struct FailingUpstream;

#[async_trait]
impl UpstreamResolver for FailingUpstream {
    async fn lookup_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        Err(DomainError::UpstreamResolutionFailure(format!(
            "simulated failure for {}",
            name
        )))
    }
}

pub struct FixedUpstream(pub Ipv4Addr);

#[async_trait]
impl UpstreamResolver for FixedUpstream {
    async fn lookup_ipv4(&self, _name: &str) -> Result<Ipv4Addr, DomainError> {
        Ok(self.0)
    }
}
