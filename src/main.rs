use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use rentrib_site::config;
use rentrib_site::lifecycle::{bootstrap, wait_for_shutdown_signal, Shutdown};
use rentrib_site::net::load_tls_config;
use rentrib_site::observability::{logging, metrics};
use rentrib_site::SiteServer;

#[derive(Parser)]
#[command(name = "rentrib-site", version, about = "RentRibAthens bilingual site server")]
struct Args {
    /// TOML configuration file; defaults plus environment overrides when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rentrib-site starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        site_url = %config.site.url,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let tls = match &config.listener.tls {
        Some(tls) => Some(load_tls_config(tls).await?),
        None => None,
    };
    let bind_address: SocketAddr = config.listener.bind_address.parse()?;
    let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);

    let state = bootstrap(config)?;
    let server = SiteServer::new(state);

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let mut server_task = match tls {
        Some(tls) => tokio::spawn(server.run_tls(bind_address, tls, rx)),
        None => {
            let listener = TcpListener::bind(bind_address).await?;
            tokio::spawn(server.run(listener, rx))
        }
    };

    tokio::select! {
        result = &mut server_task => {
            // Server exited on its own, which only happens on error
            result??;
            return Ok(());
        }
        _ = wait_for_shutdown_signal() => shutdown.trigger(),
    }

    match tokio::time::timeout(grace, server_task).await {
        Ok(result) => result??,
        Err(_) => tracing::warn!(
            grace_secs = grace.as_secs(),
            "Connections still open after grace period, exiting"
        ),
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
