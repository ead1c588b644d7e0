//! Configuration for the wallet connection CLI
//!
//! Configuration is a JSON file (via `--config`) with env-var
//! overrides; every field has a sensible default so the tool runs with
//! no configuration at all.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable names
mod env_vars {
    pub const SIM_INSTALLED: &str = "WALLET_SIM_INSTALLED";
    pub const SIM_ALLOWED: &str = "WALLET_SIM_ALLOWED";
    pub const SIM_DECLINE: &str = "WALLET_SIM_DECLINE";
    pub const SIM_ADDRESS: &str = "WALLET_SIM_ADDRESS";
    pub const SIM_NETWORK: &str = "WALLET_SIM_NETWORK";
}

/// Default simulated signing key (testnet-shaped Stellar public key)
pub const DEFAULT_SIM_ADDRESS: &str =
    "GAIH3ULLFQ4DGSECF2AR555KZ4KNDGEKN4AFI4SU2M7B43MGK3QJZNSR";

/// Default simulated network
pub const DEFAULT_SIM_NETWORK: &str = "TESTNET";

/// Settings for the simulated wallet provider backing demo runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorSettings {
    /// Whether the simulated extension is installed
    #[serde(default = "default_true")]
    pub installed: bool,
    /// Whether approval is already granted
    #[serde(default = "default_true")]
    pub allowed: bool,
    /// Whether the simulated user declines the approval prompt
    #[serde(default)]
    pub decline_access: bool,
    /// Signing address the simulator hands out
    #[serde(default = "default_address")]
    pub address: String,
    /// Network identifier the simulator reports
    #[serde(default = "default_network")]
    pub network: String,
}

fn default_true() -> bool {
    true
}

fn default_address() -> String {
    DEFAULT_SIM_ADDRESS.to_string()
}

fn default_network() -> String {
    DEFAULT_SIM_NETWORK.to_string()
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            installed: true,
            allowed: true,
            decline_access: false,
            address: default_address(),
            network: default_network(),
        }
    }
}

impl SimulatorSettings {
    /// Apply `WALLET_SIM_*` environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(env_vars::SIM_INSTALLED) {
            self.installed = parse_flag(&value);
        }
        if let Ok(value) = std::env::var(env_vars::SIM_ALLOWED) {
            self.allowed = parse_flag(&value);
        }
        if let Ok(value) = std::env::var(env_vars::SIM_DECLINE) {
            self.decline_access = parse_flag(&value);
        }
        if let Ok(value) = std::env::var(env_vars::SIM_ADDRESS) {
            self.address = value;
        }
        if let Ok(value) = std::env::var(env_vars::SIM_NETWORK) {
            self.network = value;
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Simulated provider settings
    #[serde(default)]
    pub simulator: SimulatorSettings,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from an optional file, then apply env overrides
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.simulator.apply_env();
        Ok(config)
    }
}
