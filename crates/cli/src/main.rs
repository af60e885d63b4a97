use clap::Parser;
use std::sync::Arc;
use stub_dns_application::use_cases::HandleDatagramUseCase;
use stub_dns_domain::{CliOverrides, LogFormat};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "stub-dns")]
#[command(version)]
#[command(about = "stub-dns - UDP DNS responder that echoes the question section")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting stub-dns v{}", env!("CARGO_PKG_VERSION"));

    let handler = Arc::new(HandleDatagramUseCase::new(config.response));
    let shutdown = CancellationToken::new();

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        ctrl_c_token.cancel();
    });

    let stats = server::start_dns_server(&config.server, handler, shutdown).await?;

    info!(
        received = stats.received,
        answered = stats.answered,
        dropped = stats.dropped,
        send_failures = stats.send_failures,
        "Server shutdown complete"
    );
    Ok(())
}
