use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::account::AccountSeed;
use crate::money::Money;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: Rotation,
    pub gateway: GatewayConfig,
    /// Fixed account set seeded at startup
    #[serde(default = "default_accounts")]
    pub accounts: Vec<AccountSeed>,
}

/// Log file rotation period. Unknown values fail at load.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Never,
    Hourly,
    Daily,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

fn default_accounts() -> Vec<AccountSeed> {
    vec![
        AccountSeed {
            id: "Owais".to_string(),
            pin: "1234".to_string(),
            balance: Money::from_minor_units(1_000_000),
        },
        AccountSeed {
            id: "Danish".to_string(),
            pin: "5678".to_string(),
            balance: Money::from_minor_units(500_000),
        },
    ]
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> Result<Self> {
        Self::from_file(format!("config/{}.yaml", env))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config yaml")
    }
}
