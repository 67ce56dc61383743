use clap::Parser;
use forge_dns_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::task::JoinSet;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "forge-dns")]
#[command(version)]
#[command(about = "Forge DNS - answers connectivity-test names with a local address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Probe (HTTP) server port
    #[arg(short = 'p', long)]
    probe_port: Option<u16>,

    /// Bind address, or "auto" to use the default-route interface
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Address handed out for records without an explicit address
    #[arg(long, value_name = "ADDR")]
    advertise: Option<String>,

    /// Do not start the probe server
    #[arg(long)]
    no_probe: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        probe_port: cli.probe_port,
        bind_address: cli.bind.clone(),
        advertise_address: cli.advertise.clone(),
        disable_probe: cli.no_probe,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Forge DNS v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config);

    let addresses = bootstrap::resolve_addresses(&config.server)?;
    info!(bind = %addresses.bind, advertise = %addresses.advertise, "Server addresses");

    let table = Arc::new(bootstrap::build_name_table(
        &config.records,
        addresses.advertise,
    )?);
    let dns_services = di::DnsServices::new(&config, table);

    let mut servers: JoinSet<anyhow::Result<()>> = JoinSet::new();

    let dns_addr = SocketAddr::new(addresses.bind.into(), config.server.dns_port);
    servers.spawn(server::start_dns_server(dns_addr, dns_services.handler));

    if config.probe.enabled {
        let probe_addr = SocketAddr::new(addresses.bind.into(), config.server.probe_port);
        servers.spawn(server::start_probe_server(
            probe_addr,
            Arc::new(config.probe.clone()),
        ));
    } else {
        info!("Probe server disabled");
    }

    let outcome = tokio::select! {
        Some(joined) = servers.join_next() => match joined {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!(error = %e, "Server stopped");
                Err(e)
            }
            Err(e) => Err(e.into()),
        },
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    servers.shutdown().await;
    info!("Server shutdown complete");
    outcome
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
