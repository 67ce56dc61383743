#![allow(dead_code)]

use async_trait::async_trait;
use forge_dns_application::ports::UpstreamResolver;
use forge_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<String, Result<Ipv4Addr, DomainError>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_response(&self, name: &str, address: Ipv4Addr) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), Ok(address));
    }

    pub async fn set_error(&self, name: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockUpstreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn lookup_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::UpstreamResolutionFailure(format!(
                    "No mock response for {}",
                    name
                )))
            })
    }
}
