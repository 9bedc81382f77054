//! PIN Ledger service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌─────────────────┐    ┌──────────────┐
//! │  Config  │───▶│ AccountStore │───▶│ TransferService │───▶│   Gateway    │
//! │  (YAML)  │    │   (seeded)   │    │                 │    │ (axum HTTP)  │
//! └──────────┘    └──────────────┘    └─────────────────┘    └──────────────┘
//! ```
//!
//! Usage: `pin_ledger [--env dev] [--port 8000]`

use std::sync::Arc;

use anyhow::{Context, Result};

use pin_ledger::account::AccountStore;
use pin_ledger::config::AppConfig;
use pin_ledger::transfer::TransferService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = pin_ledger::logging::init_logging(&app_config);

    tracing::info!("Starting PIN Ledger in {} mode", env);

    let store = AccountStore::from_seeds(app_config.accounts.clone())
        .context("Failed to seed accounts")?;
    for account in store.snapshot_all() {
        tracing::info!(account = %account.id, balance = %account.balance, "seeded account");
    }

    let service = TransferService::new(Arc::new(store));
    pin_ledger::gateway::run_server(&app_config.gateway, service).await
}
