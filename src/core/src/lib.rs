//! Core of the relay faucet.
//!
//! This crate holds the wallet model, the amount arithmetic and the relay
//! distribution protocol. Chain access and operator interaction are reached
//! through the [`TransferExecutor`] and [`Prompter`] traits.

pub mod amount;
pub mod distributor;
pub mod errors;
pub mod executor;
pub mod plan;
pub mod types;
pub mod wallets;

// Re-export commonly used types
pub use amount::{EtherAmount, NATIVE_SYMBOL};
pub use distributor::{AbortReason, Distributor, Outcome, Stage};
pub use errors::{CoreError, TransferError};
pub use executor::{Prompter, TransferExecutor};
pub use plan::{DistributionPlan, RelayHop};
pub use types::{TransferRequest, TransferStep, TxHash, Wallet};
pub use wallets::{JsonWalletFile, WalletSource};
