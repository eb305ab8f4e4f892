// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # DKMS Node
//!
//! Entry point for the `dkms-node` binary. Parses CLI arguments, initializes
//! logging and metrics, and serves the registration API.
//!
//! The binary supports three subcommands:
//!
//! - `run`     — start the node
//! - `deal`    — share a fresh secret and print one node's registration request
//! - `version` — print build version information

mod api;
mod cli;
mod logging;
mod metrics;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::signal;

use dkms_protocol::{Dealer, Group, MemoryRepository, Ristretto255};

use cli::{Commands, DkmsNodeCli};
use logging::LogFormat;
use metrics::NodeMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = DkmsNodeCli::parse();

    match cli.command {
        Commands::Run(args) => run_node(args).await,
        Commands::Deal(args) => deal(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Starts the node: API server and metrics endpoint.
async fn run_node(args: cli::RunArgs) -> Result<()> {
    logging::init_logging(logging::DEFAULT_FILTER, args.log_format);

    tracing::info!(
        listen_addr = %args.listen_addr,
        api_port = args.api_port,
        metrics_port = args.metrics_port,
        "starting dkms-node"
    );

    let node_metrics = Arc::new(NodeMetrics::new().context("failed to register metrics")?);

    let app_state = api::AppState {
        version: format!(
            "{} (protocol {})",
            env!("CARGO_PKG_VERSION"),
            dkms_protocol::config::PROTOCOL_VERSION,
        ),
        group: Ristretto255,
        repository: Arc::new(MemoryRepository::new()),
        metrics: Arc::clone(&node_metrics),
    };

    // --- API server ---
    let api_router = api::create_router(app_state);
    let api_addr = format!("{}:{}", args.listen_addr, args.api_port);
    let api_listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("failed to bind API listener on {}", api_addr))?;
    tracing::info!("API server listening on {}", api_addr);

    // --- Metrics server ---
    let metrics_router = metrics::router(Arc::clone(&node_metrics));
    let metrics_addr = format!("{}:{}", args.listen_addr, args.metrics_port);
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
        .await
        .with_context(|| format!("failed to bind metrics listener on {}", metrics_addr))?;
    tracing::info!("Metrics server listening on {}", metrics_addr);

    // --- Serve ---
    tokio::select! {
        res = axum::serve(api_listener, api_router) => {
            if let Err(e) = res {
                tracing::error!("API server error: {}", e);
            }
        }
        res = axum::serve(metrics_listener, metrics_router) => {
            if let Err(e) = res {
                tracing::error!("Metrics server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("shutdown signal received, draining connections");
        }
    }

    tracing::info!("dkms-node stopped");
    Ok(())
}

/// Shares a fresh secret and prints the registration request for one node.
fn deal(args: cli::DealArgs) -> Result<()> {
    logging::init_logging("dkms_node=warn,dkms_protocol=warn", LogFormat::Pretty);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let group = Ristretto255;
    let secret = <Ristretto255 as Group>::Scalar::random(&mut rng);
    let dealing = Dealer::new(group, args.t, args.u, group.commit_base_point())
        .deal(secret, &mut rng)
        .context("failed to deal")?;

    let request = dealing.registration_request(args.user_id, args.x, args.y, args.nodes);
    let json = serde_json::to_string_pretty(&request).context("failed to encode request")?;
    println!("{}", json);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("dkms-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", dkms_protocol::config::PROTOCOL_VERSION);
    println!("group     {}", dkms_protocol::config::GROUP_NAME);
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM, whichever comes first.
///
/// On non-Unix platforms, only Ctrl+C is supported. If a handler cannot be
/// installed the corresponding branch never completes.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
