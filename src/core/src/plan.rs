//! Amount schedule for a relay distribution.
//!
//! The operator funds the first wallet with the total for every wallet. Each
//! wallet then forwards what is left for the wallets after it, keeping one
//! per-wallet amount for itself:
//!
//! ```text
//! operator --a*n--> w0 --a*(n-1)--> w1 --a*(n-2)--> ... --a--> w(n-1)
//! ```

use crate::amount::EtherAmount;
use crate::errors::CoreError;
use crate::types::{TransferStep, Wallet};

/// One wallet-to-wallet transfer of the relay chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayHop<'a> {
    /// Hop index, `0..n-1`
    pub index: usize,
    /// The wallet paying for the hop
    pub from: &'a Wallet,
    /// The wallet being funded
    pub to: &'a Wallet,
    /// Amount forwarded on this hop
    pub amount: EtherAmount,
}

impl RelayHop<'_> {
    /// Gets the step this hop occupies in a run.
    pub fn step(&self) -> TransferStep {
        TransferStep::Relay(self.index)
    }
}

/// The full schedule of transfers for a list of wallets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan<'a> {
    per_wallet: EtherAmount,
    total: EtherAmount,
    first: &'a Wallet,
    hops: Vec<RelayHop<'a>>,
}

impl<'a> DistributionPlan<'a> {
    /// Computes the plan for sending `per_wallet` to every wallet in `wallets`.
    pub fn new(wallets: &'a [Wallet], per_wallet: EtherAmount) -> Result<Self, CoreError> {
        let first = wallets.first().ok_or(CoreError::EmptyWalletList)?;
        let n = wallets.len() as u64;
        let total = per_wallet.checked_mul(n)?;

        let hops = wallets
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let remaining = n - (i as u64 + 1);
                Ok(RelayHop {
                    index: i,
                    from: &pair[0],
                    to: &pair[1],
                    amount: per_wallet.checked_mul(remaining)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self {
            per_wallet,
            total,
            first,
            hops,
        })
    }

    /// Gets the amount each wallet ends up with.
    pub fn per_wallet(&self) -> EtherAmount {
        self.per_wallet
    }

    /// Gets the amount of the initial transfer from the operator.
    pub fn total(&self) -> EtherAmount {
        self.total
    }

    /// Gets the wallet funded by the operator.
    pub fn first_wallet(&self) -> &'a Wallet {
        self.first
    }

    /// Gets the relay hops in execution order.
    pub fn hops(&self) -> &[RelayHop<'a>] {
        &self.hops
    }

    /// Gets the number of wallets covered by the plan.
    pub fn wallet_count(&self) -> usize {
        self.hops.len() + 1
    }
}
