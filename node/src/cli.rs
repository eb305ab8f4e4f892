//! # CLI Interface
//!
//! Defines the command-line argument structure for `dkms-node` using
//! `clap` derive. Supports three subcommands: `run`, `deal`, and `version`.

use clap::{Parser, Subcommand};
use dkms_protocol::NodeInfo;

use crate::logging::LogFormat;

/// DKMS key-management node.
///
/// Accepts bivariate share registrations from a dealer, verifies them
/// against Feldman commitments, and serves the public part of each
/// registered user plus Prometheus metrics.
#[derive(Parser, Debug)]
#[command(
    name = "dkms-node",
    about = "DKMS key-management node",
    version,
    propagate_version = true
)]
pub struct DkmsNodeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the DKMS node binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the node.
    Run(RunArgs),
    /// Act as a dealer: share a fresh secret and print the registration
    /// request for one node as JSON.
    Deal(DealArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Address both servers bind to.
    #[arg(long, env = "DKMS_LISTEN_ADDR", default_value = "0.0.0.0")]
    pub listen_addr: String,

    /// Port for the REST API.
    #[arg(long, env = "DKMS_API_PORT", default_value_t = 9750)]
    pub api_port: u16,

    /// Port for the Prometheus metrics endpoint.
    #[arg(long, env = "DKMS_METRICS_PORT", default_value_t = 9751)]
    pub metrics_port: u16,

    /// Log output format.
    #[arg(long, env = "DKMS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Arguments for the `deal` subcommand.
#[derive(Parser, Debug)]
pub struct DealArgs {
    /// User the key is dealt for.
    #[arg(long)]
    pub user_id: String,

    /// Threshold along x (custodian groups).
    #[arg(long, short = 't', default_value_t = 2)]
    pub t: usize,

    /// Threshold along y (custodians per group).
    #[arg(long, short = 'u', default_value_t = 2)]
    pub u: usize,

    /// The receiving node's x coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub x: i64,

    /// The receiving node's y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub y: i64,

    /// Participating nodes as `id@address`. Repeatable.
    #[arg(long = "node", value_parser = parse_node)]
    pub nodes: Vec<NodeInfo>,

    /// Seed for reproducible output. Never use a seed for real keys.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parses `id@address` into a [`NodeInfo`].
fn parse_node(s: &str) -> Result<NodeInfo, String> {
    match s.split_once('@') {
        Some((id, address)) if !id.is_empty() && !address.is_empty() => Ok(NodeInfo {
            id: id.to_string(),
            address: address.to_string(),
        }),
        _ => Err(format!("expected id@address, got {s:?}")),
    }
}
