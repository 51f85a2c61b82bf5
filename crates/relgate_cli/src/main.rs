//! Gateway binary: loads the host configuration, then serves the gateway.

use anyhow::{Context, Result};
use clap::Parser;
use relgate_github::GithubReleaseSource;
use relgate_server::GatewayServer;
use relgate_server::config::GatewayConfig;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Redirecting download gateway for GitHub release assets.
#[derive(Debug, Parser)]
#[command(name = "relgate", version, about)]
struct Args {
    /// os-release style key-value file carrying the gateway configuration.
    #[arg(long, env = "RELGATE_CONFIG", default_value = "/usr/lib/os-release")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "RELGATE_BIND", default_value = "0.0.0.0:1002")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // Hosts without the key-value file still get a working gateway with the
    // built-in defaults.
    let config = match GatewayConfig::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "no usable config at {}: {err}; using defaults",
                args.config.display()
            );
            GatewayConfig::default()
        }
    };

    info!("serving releases of {} on {}", config.default_repo, args.bind);

    let app = GatewayServer::new(config).build(GithubReleaseSource::new());

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
