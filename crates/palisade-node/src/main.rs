// crates/palisade-node/src/main.rs
//
// Binary entrypoint for the Palisade Protocol node.
//
// Initializes tracing, parses CLI arguments, loads configuration,
// seeds genesis accounts, spawns the block producer, and serves the
// RPC endpoint in the foreground.

mod block_producer;
mod config;

use std::sync::Arc;

use clap::Parser;
use tokio::sync::RwLock;

use block_producer::BlockProducer;
use config::NodeConfig;
use palisade_core::Principal;
use palisade_economics::{Pale, TokenVault};
use palisade_rpc::{PalisadeRpcServer, RpcConfig};
use palisade_runtime::{ChainClock, PalisadeRuntime};

/// Palisade Protocol node, a single-process devnet daemon.
#[derive(Parser, Debug)]
#[command(name = "palisade-node", version = "0.1.0", about = "Palisade Protocol node daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.palisade/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration from TOML file, falling back to defaults if the file
    // is not found.
    let config_path = expand_tilde(&args.config);
    let config = match NodeConfig::load(&config_path) {
        Ok(cfg) => {
            tracing::info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            tracing::warn!(
                "Could not load config from {}: {}. Using defaults.",
                config_path,
                e
            );
            NodeConfig::default()
        }
    };

    tracing::info!("Palisade Protocol Node v0.1.0");
    tracing::info!("RPC endpoint: {}:{}", config.rpc_host, config.rpc_port);
    tracing::info!("Block interval: {} ms", config.block_interval_ms);
    tracing::info!("Genesis accounts: {}", config.genesis.len());

    // ---------------------------------------------------------------
    // Seed genesis accounts into the vault and reputation ledger.
    // ---------------------------------------------------------------
    let mut vault = TokenVault::new();
    let mut reputations: Vec<(Principal, u64)> = Vec::new();
    for account in &config.genesis {
        match Principal::from_hex(&account.principal) {
            Ok(principal) => {
                vault.credit(principal, account.balance);
                if account.reputation > 0 {
                    reputations.push((principal, account.reputation));
                }
                tracing::info!(
                    "Genesis account {}: {} (reputation {})",
                    principal,
                    Pale(account.balance),
                    account.reputation
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping genesis account {}: {}",
                    account.principal,
                    e
                );
            }
        }
    }

    let mut runtime = PalisadeRuntime::new(Box::new(vault));
    for (principal, score) in reputations {
        runtime.grant_reputation(principal, score);
    }

    let runtime = Arc::new(RwLock::new(runtime));
    let chain = Arc::new(ChainClock::new());

    // Spawn block producer in background, run RPC server in foreground.
    if config.block_interval_ms > 0 {
        let producer = BlockProducer::new(Arc::clone(&chain), config.block_interval_ms);
        tokio::spawn(async move {
            if let Err(e) = producer.run().await {
                tracing::error!("Block producer error: {}", e);
            }
        });
    } else {
        tracing::info!("Block producer disabled; height moves via chain/advance");
    }

    let rpc_config = RpcConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let server = PalisadeRpcServer::new(rpc_config, runtime, chain);
    server.start().await?;

    Ok(())
}

/// Expand `~` at the start of a path to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &path[1..]);
        }
    }
    path.to_string()
}
