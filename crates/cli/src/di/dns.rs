use forge_dns_application::use_cases::ResolveNameUseCase;
use forge_dns_domain::{Config, NameTable};
use forge_dns_infrastructure::dns::{DnsServerHandler, ResponseOptions, SystemResolver};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config, table: Arc<NameTable>) -> Self {
        let resolve_name = Arc::new(Self::build_use_case(config, table));

        let options = ResponseOptions {
            ttl: config.dns.answer_ttl,
            unresolved: config.dns.unresolved_response,
        };
        let handler = Arc::new(DnsServerHandler::new(resolve_name, options));

        Self { handler }
    }

    fn build_use_case(config: &Config, table: Arc<NameTable>) -> ResolveNameUseCase {
        if !config.dns.upstream_enabled {
            info!("Upstream fallback disabled");
            return ResolveNameUseCase::without_upstream(table);
        }

        let timeout = Duration::from_millis(config.dns.upstream_timeout_ms);
        info!(timeout_ms = config.dns.upstream_timeout_ms, "Upstream fallback via system resolver");
        ResolveNameUseCase::new(table, Arc::new(SystemResolver::new(timeout)))
    }
}
