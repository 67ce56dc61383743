use async_trait::async_trait;
use forge_dns_domain::DomainError;
use std::net::Ipv4Addr;

/// Delegated lookup used when a name is neither bound nor covered by the
/// wildcard.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Returns the first IPv4 address for `name`.
    ///
    /// Implementations bound the lookup themselves and report an expired
    /// deadline as [`DomainError::QueryTimeout`].
    async fn lookup_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError>;
}
