//! Core types for the relay faucet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A funded or to-be-funded wallet from the wallet file.
///
/// Wallets are loaded once and never mutated; the controller only borrows them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// The chain address of the wallet
    address: String,
    /// The hex-encoded private key of the wallet
    #[serde(rename = "privateKey")]
    private_key: String,
}

impl Wallet {
    /// Creates a wallet from an address and its private key.
    pub fn new(address: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            private_key: private_key.into(),
        }
    }

    /// Gets the chain address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Gets the private key used to sign transfers out of this wallet.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// An opaque transaction identifier returned by a confirmed transfer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    /// Wraps a transaction hash string.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Gets the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single value transfer handed to an executor.
///
/// Built fresh for each transfer; it borrows the recipient and credential
/// from the wallet list or the operator input.
#[derive(Clone, PartialEq, Eq)]
pub struct TransferRequest<'a> {
    /// The amount, formatted with six decimal places
    pub amount: String,
    /// The recipient address
    pub recipient: &'a str,
    /// The private key of the sender
    pub sender_credential: &'a str,
}

impl fmt::Debug for TransferRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferRequest")
            .field("amount", &self.amount)
            .field("recipient", &self.recipient)
            .field("sender_credential", &"<redacted>")
            .finish()
    }
}

/// Position of a transfer within a distribution run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStep {
    /// Operator wallet to the first listed wallet.
    Initial,
    /// Listed wallet `i` to listed wallet `i + 1`.
    Relay(usize),
}

impl fmt::Display for TransferStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStep::Initial => write!(f, "initial transfer"),
            TransferStep::Relay(i) => write!(f, "relay hop {}", i),
        }
    }
}
