use forge_dns_domain::config::ProbeConfig;
use forge_dns_infrastructure::probe::ProbeResponder;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn start_probe_server(
    bind_addr: SocketAddr,
    config: Arc<ProbeConfig>,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, rules = config.rules.len(), "Starting probe server");

    let responder = ProbeResponder::bind(bind_addr, config).await?;
    responder.run().await?;

    Ok(())
}
