//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while preparing a distribution.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error when the wallet file cannot be read.
    #[error("Wallet file error: {0}")]
    WalletFile(#[from] std::io::Error),

    /// Error when the wallet file is not a valid wallet list.
    #[error("Wallet file is not valid JSON: {0}")]
    WalletFormat(#[from] serde_json::Error),

    /// Error when the wallet list contains no wallets.
    #[error("No wallets found in the wallet file")]
    EmptyWalletList,

    /// Error when an amount cannot be parsed or is not positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error when an amount no longer fits after multiplication.
    #[error("Amount overflow: {amount} x {factor}")]
    AmountOverflow {
        /// The per-wallet amount
        amount: String,
        /// The multiplier that overflowed
        factor: u64,
    },

    /// Error when the operator did not provide a private key.
    #[error("No private key provided")]
    MissingPrivateKey,

    /// Error when reading an answer from the operator fails.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Errors reported by a transfer executor for a single transfer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Error when the recipient is not a valid chain address.
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// Error when the sender credential is not a valid signing key.
    #[error("Invalid sender credential: {0}")]
    InvalidCredential(String),

    /// Error when the amount cannot be expressed in the native unit.
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(String),

    /// Error when the provider cannot be created or reached.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Error when no usable fee data is available.
    #[error("Fee data unavailable: {0}")]
    FeeData(String),

    /// Error when the node rejects the transaction.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Error while waiting for the transaction to be confirmed.
    #[error("Confirmation failed: {0}")]
    Confirmation(String),

    /// Error when confirmation takes longer than allowed.
    #[error("Transaction {tx_hash} not confirmed after {seconds}s")]
    ConfirmationTimeout {
        /// The pending transaction hash
        tx_hash: String,
        /// The timeout that elapsed
        seconds: u64,
    },

    /// Error when the transaction disappeared from the mempool.
    #[error("Transaction {0} was dropped")]
    Dropped(String),

    /// Error when the transaction was mined but failed.
    #[error("Transaction {0} reverted")]
    Reverted(String),
}
