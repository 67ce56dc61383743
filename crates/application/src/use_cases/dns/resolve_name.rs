use crate::ports::UpstreamResolver;
use forge_dns_domain::{DomainError, NameTable, Resolution, ResolutionSource};
use std::sync::Arc;
use tracing::{debug, error};

/// Decides the answer address for a queried name.
///
/// Lookup order, first match wins: exact table entry, wildcard entry,
/// upstream lookup. When all of them miss the outcome carries no address
/// and [`ResolutionSource::None`].
pub struct ResolveNameUseCase {
    table: Arc<NameTable>,
    upstream: Option<Arc<dyn UpstreamResolver>>,
}

impl ResolveNameUseCase {
    pub fn new(table: Arc<NameTable>, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self {
            table,
            upstream: Some(upstream),
        }
    }

    pub fn without_upstream(table: Arc<NameTable>) -> Self {
        Self {
            table,
            upstream: None,
        }
    }

    pub fn table(&self) -> &NameTable {
        &self.table
    }

    pub async fn execute(&self, name: &str) -> Resolution {
        if let Some(address) = self.table.get(name) {
            return Resolution::found(address, ResolutionSource::Table);
        }

        if let Some(address) = self.table.wildcard() {
            return Resolution::found(address, ResolutionSource::Wildcard);
        }

        let Some(ref upstream) = self.upstream else {
            debug!(name = %name, "No table entry and upstream disabled");
            return Resolution::none();
        };

        match upstream.lookup_ipv4(name).await {
            Ok(address) => Resolution::found(address, ResolutionSource::Upstream),
            Err(DomainError::QueryTimeout) => {
                error!(name = %name, source = %ResolutionSource::None, "Upstream lookup timed out");
                Resolution::none()
            }
            Err(e) => {
                error!(name = %name, source = %ResolutionSource::None, error = %e, "Upstream lookup failed");
                Resolution::none()
            }
        }
    }
}
