//! Configuration for the faucet CLI.

use anyhow::Result;
use faucet_chain::ExecutorConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the faucet CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaucetConfig {
    /// Display name of the target network
    pub network_name: String,
    /// JSON-RPC endpoint of the target network
    pub rpc_url: String,
    /// Chain id of the target network
    pub chain_id: u64,
    /// URL prefix of the explorer's transaction pages
    pub explorer_tx_url: String,
    /// Gas limit of a plain value transfer
    pub gas_limit: u64,
    /// Confirmations to wait for per transfer
    pub confirmations: usize,
    /// Seconds to wait for confirmations before giving up
    pub confirmation_timeout_secs: u64,
    /// Receipt polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Path to the wallet list
    pub wallets_file: PathBuf,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            network_name: "Base Sepolia Testnet".to_string(),
            rpc_url: "https://sepolia.base.org".to_string(),
            chain_id: 84532,
            explorer_tx_url: "https://sepolia.basescan.org/tx/".to_string(),
            gas_limit: 21000,
            confirmations: 1,
            confirmation_timeout_secs: 300,
            poll_interval_ms: 2000,
            wallets_file: PathBuf::from("wallets.json"),
        }
    }
}

impl FaucetConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Gets the settings of the chain executor.
    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig {
            rpc_url: self.rpc_url.clone(),
            chain_id: self.chain_id,
            gas_limit: self.gas_limit,
            confirmations: self.confirmations,
            confirmation_timeout: Duration::from_secs(self.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            explorer_tx_url: self.explorer_tx_url.clone(),
        }
    }
}
