use clap::Parser;
use cinder_dns_application::{LocalAnswers, ProxyQueryUseCase, UpstreamResolver};
use cinder_dns_domain::config::CliOverrides;
use cinder_dns_infrastructure::{UdpServer, UdpUpstream};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "cinder-dns")]
#[command(version)]
#[command(about = "Cinder DNS - UDP proxy in front of a recursive resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listening port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver address (IP:PORT)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Cinder DNS proxy v{}", env!("CARGO_PKG_VERSION"));

    // validate() has already checked this parses.
    let upstream_addr: SocketAddr = config.upstream.address.parse()?;
    let transport = Arc::new(UdpUpstream::new(
        upstream_addr,
        Duration::from_millis(config.upstream.query_timeout_ms),
    ));

    let handler = Arc::new(ProxyQueryUseCase::new(
        UpstreamResolver::new(transport),
        LocalAnswers::new(config.local_records.clone()),
    ));

    let listen_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;
    info!(
        listen = %listen_addr,
        upstream = %upstream_addr,
        local_records = config.local_records.len(),
        "configuration loaded"
    );

    let server = UdpServer::bind(listen_addr, handler).await?;
    server.serve().await?;

    Ok(())
}
