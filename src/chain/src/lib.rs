//! EVM chain access for the relay faucet.
//!
//! This crate provides the [`faucet_core::TransferExecutor`] used against a
//! live testnet.

pub mod executor;
pub mod explorer;
pub mod fees;

pub use executor::{EthTransferExecutor, ExecutorConfig};
pub use explorer::Explorer;
pub use fees::{FeeData, FeeParams};
