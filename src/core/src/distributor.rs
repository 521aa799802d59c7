//! The relay distribution controller.
//!
//! A run walks through `Idle -> WalletsLoaded -> InputCollected -> Confirmed
//! -> Distributing` and ends in either `Complete` or `Aborted`. Every abort
//! before `Distributing` happens before any funds move. Once distributing,
//! the first failed transfer stops the run and nothing is rolled back.

use crate::amount::{EtherAmount, NATIVE_SYMBOL};
use crate::errors::TransferError;
use crate::executor::{Prompter, TransferExecutor};
use crate::plan::DistributionPlan;
use crate::types::{TransferRequest, TransferStep, TxHash};
use crate::wallets::WalletSource;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Question asked for the per-wallet amount.
pub const AMOUNT_PROMPT: &str = "Enter the amount of ETH to send to each wallet (e.g., 0.001): ";

/// Question asked for the operator's private key.
pub const PRIVATE_KEY_PROMPT: &str = "Enter the private key of the wallet that holds the testnet ETH.\nThis wallet will be used for the initial transfer: ";

/// Question asked before any funds move.
pub const CONFIRM_PROMPT: &str = "Are you sure you want to proceed with this operation? (y/n): ";

/// Where a distribution run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing has happened yet.
    Idle,
    /// A non-empty wallet list was read.
    WalletsLoaded,
    /// The amount and the operator key were accepted.
    InputCollected,
    /// The operator answered `y`.
    Confirmed,
    /// Transfers are being sent.
    Distributing,
    /// Every transfer was confirmed.
    Complete,
    /// The run stopped early.
    Aborted,
}

/// Why a distribution run stopped before completing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The wallet list was empty.
    #[error("no wallets to fund")]
    NoWallets,

    /// The wallet list could not be loaded.
    #[error("failed to load wallets: {0}")]
    WalletSource(String),

    /// The per-wallet amount was rejected.
    #[error("{0}")]
    InvalidAmount(String),

    /// The operator entered no private key.
    #[error("no private key provided")]
    MissingPrivateKey,

    /// The operator did not confirm.
    #[error("operation canceled by the user")]
    Cancelled,

    /// A transfer failed; later transfers were not attempted.
    #[error("{step} failed: {error}")]
    TransferFailed {
        /// The transfer that failed
        step: TransferStep,
        /// The executor's error
        error: TransferError,
    },

    /// Something outside the protocol went wrong, such as reading a prompt.
    #[error("{0}")]
    Unexpected(String),
}

/// Result of a distribution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every transfer was confirmed.
    Complete {
        /// Hashes in execution order, initial transfer first
        transactions: Vec<TxHash>,
    },
    /// The run stopped early.
    Aborted {
        /// Why the run stopped
        reason: AbortReason,
        /// Hashes of the transfers that were already confirmed
        transactions: Vec<TxHash>,
    },
}

impl Outcome {
    /// Returns true if every wallet was funded.
    pub fn is_complete(&self) -> bool {
        matches!(self, Outcome::Complete { .. })
    }

    /// Gets the confirmed transactions, whatever the outcome.
    pub fn transactions(&self) -> &[TxHash] {
        match self {
            Outcome::Complete { transactions } | Outcome::Aborted { transactions, .. } => {
                transactions
            }
        }
    }

    /// Gets the abort reason, if the run stopped early.
    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            Outcome::Complete { .. } => None,
            Outcome::Aborted { reason, .. } => Some(reason),
        }
    }
}

/// Drives one distribution run against an executor and an operator prompt.
pub struct Distributor<E, P> {
    executor: E,
    prompter: P,
    stage: Stage,
    history: Vec<Stage>,
}

impl<E: TransferExecutor, P: Prompter> Distributor<E, P> {
    /// Creates a distributor in the `Idle` stage.
    pub fn new(executor: E, prompter: P) -> Self {
        Self {
            executor,
            prompter,
            stage: Stage::Idle,
            history: vec![Stage::Idle],
        }
    }

    /// Gets the current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Gets every stage the last run went through, in order, starting at `Idle`.
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    /// Gets the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Gets the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Runs the whole protocol once. Never panics; every failure ends in `Outcome::Aborted`.
    pub async fn run<S: WalletSource + ?Sized>(&mut self, source: &S) -> Outcome {
        self.stage = Stage::Idle;
        self.history = vec![Stage::Idle];
        let mut transactions = Vec::new();

        match self.try_run(source, &mut transactions).await {
            Ok(()) => {
                self.enter(Stage::Complete);
                Outcome::Complete { transactions }
            }
            Err(reason) => {
                if let AbortReason::Unexpected(msg) = &reason {
                    error!("An error occurred during the operation: {}", msg);
                }
                self.enter(Stage::Aborted);
                Outcome::Aborted {
                    reason,
                    transactions,
                }
            }
        }
    }

    async fn try_run<S: WalletSource + ?Sized>(
        &mut self,
        source: &S,
        transactions: &mut Vec<TxHash>,
    ) -> Result<(), AbortReason> {
        let wallets = source.load().map_err(|e| {
            error!("Failed to load wallets: {}", e);
            AbortReason::WalletSource(e.to_string())
        })?;
        if wallets.is_empty() {
            error!("No wallets found in the wallet file. Please add wallets to proceed.");
            return Err(AbortReason::NoWallets);
        }
        info!("Loaded {} wallets from the file.", wallets.len());
        self.enter(Stage::WalletsLoaded);

        let raw_amount = self.ask(AMOUNT_PROMPT)?;
        let per_wallet = EtherAmount::parse(&raw_amount).map_err(|e| {
            error!("Invalid amount entered. Please provide a valid positive number.");
            AbortReason::InvalidAmount(e.to_string())
        })?;
        info!(
            "You have chosen to send {} {} to each wallet.",
            per_wallet, NATIVE_SYMBOL
        );

        let operator_key = self.ask(PRIVATE_KEY_PROMPT)?.trim().to_string();
        if operator_key.is_empty() {
            error!("No private key provided. Please provide a valid private key to proceed.");
            return Err(AbortReason::MissingPrivateKey);
        }
        info!("Private key provided. Proceeding with the setup.");
        self.enter(Stage::InputCollected);

        let plan = DistributionPlan::new(&wallets, per_wallet).map_err(|e| {
            error!("Invalid amount entered: {}", e);
            AbortReason::InvalidAmount(e.to_string())
        })?;
        warn!(
            "You are about to send a total of {} {} to {} wallets.",
            plan.total(),
            NATIVE_SYMBOL,
            plan.wallet_count()
        );

        let answer = self.ask(CONFIRM_PROMPT)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            warn!("Operation canceled by the user.");
            return Err(AbortReason::Cancelled);
        }
        self.enter(Stage::Confirmed);

        self.distribute(&plan, &operator_key, transactions).await
    }

    async fn distribute(
        &mut self,
        plan: &DistributionPlan<'_>,
        operator_key: &str,
        transactions: &mut Vec<TxHash>,
    ) -> Result<(), AbortReason> {
        self.enter(Stage::Distributing);
        info!("=== Initiating Fund Distribution ===");

        let first = plan.first_wallet();
        info!(
            "Sending {} {} to the first wallet ({}) from your main wallet.",
            plan.total(),
            NATIVE_SYMBOL,
            first.address()
        );
        let request = TransferRequest {
            amount: plan.total().to_fixed(),
            recipient: first.address(),
            sender_credential: operator_key,
        };
        transactions.push(self.execute(TransferStep::Initial, &request).await?);
        info!(
            "Successfully sent {} {} to {}.",
            plan.total(),
            NATIVE_SYMBOL,
            first.address()
        );

        for hop in plan.hops() {
            info!(
                "=== Transferring {} {} from wallet {} to wallet {} ===",
                hop.amount,
                NATIVE_SYMBOL,
                hop.from.address(),
                hop.to.address()
            );
            let request = TransferRequest {
                amount: hop.amount.to_fixed(),
                recipient: hop.to.address(),
                sender_credential: hop.from.private_key(),
            };
            transactions.push(self.execute(hop.step(), &request).await?);
            info!(
                "Successfully transferred {} {} to {} from {}.",
                hop.amount,
                NATIVE_SYMBOL,
                hop.to.address(),
                hop.from.address()
            );
        }

        info!("=== Fund Distribution Complete ===");
        info!("All wallets have been funded successfully!");
        Ok(())
    }

    async fn execute(
        &self,
        step: TransferStep,
        request: &TransferRequest<'_>,
    ) -> Result<TxHash, AbortReason> {
        self.executor.send(request).await.map_err(|error| {
            error!("Failed to send funds to {} ({}): {}", request.recipient, step, error);
            AbortReason::TransferFailed { step, error }
        })
    }

    fn enter(&mut self, stage: Stage) {
        debug!("Entering stage {:?}", stage);
        self.stage = stage;
        self.history.push(stage);
    }

    fn ask(&mut self, question: &str) -> Result<String, AbortReason> {
        self.prompter
            .ask(question)
            .map_err(|e| AbortReason::Unexpected(e.to_string()))
    }
}
