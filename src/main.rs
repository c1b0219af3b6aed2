use anyhow::{Context, Result};
use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

use rss_fixture::server;

#[derive(Parser, Debug)]
#[command(
    name = "rss-fixture",
    about = "HTTP fixture server emitting RSS 2.0 edge-case documents"
)]
struct Args {
    /// TCP port to listen on (binds all interfaces)
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A missing or unparseable port argument exits non-zero before any
    // socket is opened.
    let args = Args::parse();

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, args.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, "Serving RSS fixture scenarios");

    axum::serve(listener, server::router())
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}
