//! Command line relay faucet for testnet wallets.

pub mod banner;
pub mod config;
pub mod prompt;
pub mod summary;

// Re-export commonly used types and functions
pub use config::FaucetConfig;
pub use prompt::LinePrompter;
