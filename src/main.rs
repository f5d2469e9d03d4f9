//! Media server entry point.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use media_server::config::{Config, LogFormat};
use media_server::error::ServerError;
use media_server::metrics;
use media_server::server;
use media_server::utils::shutdown_signal;

/// HTTP service for the media library API.
#[derive(Parser, Debug)]
#[command(name = "media-server")]
#[command(about = "Serves the media library health and media API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP port to listen on (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load().map_err(ServerError::from)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose |= args.verbose;

    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServerError::InvalidConfig(e).into());
    }

    // Initialize metrics
    metrics::init_metrics();
    if let Some(metrics_port) = config.metrics_port {
        metrics::install_exporter(metrics_port)?;
    }

    info!("Starting media server v{}", env!("CARGO_PKG_VERSION"));

    let listener = server::bind(config.port).await.map_err(|e| {
        error!("Failed to bind port {}: {}", config.port, e);
        e
    })?;

    server::serve(listener, shutdown_signal()).await?;

    Ok(())
}

/// Install the global tracing subscriber writing to stdout.
fn init_tracing(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("media_server=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}
