//! Value transfers on an EVM testnet.

use crate::explorer::Explorer;
use crate::fees::FeeData;
use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address as EthAddress, Eip1559TransactionRequest, U256, U64},
    utils::parse_ether,
};
use faucet_core::{TransferError, TransferExecutor, TransferRequest, TxHash, NATIVE_SYMBOL};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Settings for [`EthTransferExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// JSON-RPC endpoint of the chain
    pub rpc_url: String,
    /// Chain id used when signing
    pub chain_id: u64,
    /// Gas limit of a plain value transfer
    pub gas_limit: u64,
    /// Confirmations to wait for before a transfer counts as done
    pub confirmations: usize,
    /// Upper bound on the confirmation wait
    pub confirmation_timeout: Duration,
    /// How often the provider polls for receipts
    pub poll_interval: Duration,
    /// URL prefix of the explorer's transaction pages
    pub explorer_tx_url: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://sepolia.base.org".to_string(),
            chain_id: 84532,
            gas_limit: 21000,
            confirmations: 1,
            confirmation_timeout: Duration::from_secs(300),
            poll_interval: Duration::from_millis(2000),
            explorer_tx_url: "https://sepolia.basescan.org/tx/".to_string(),
        }
    }
}

/// Sends native currency with EIP-1559 transactions over an HTTP provider.
#[derive(Debug, Clone)]
pub struct EthTransferExecutor {
    provider: Provider<Http>,
    chain_id: u64,
    gas_limit: u64,
    confirmations: usize,
    confirmation_timeout: Duration,
    explorer: Explorer,
}

impl EthTransferExecutor {
    /// Creates an executor. No request is made until the first transfer.
    pub fn new(config: &ExecutorConfig) -> Result<Self, TransferError> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| TransferError::Provider(format!("Failed to create provider: {}", e)))?
            .interval(config.poll_interval);

        Ok(Self {
            provider,
            chain_id: config.chain_id,
            gas_limit: config.gas_limit,
            confirmations: config.confirmations,
            confirmation_timeout: config.confirmation_timeout,
            explorer: Explorer::new(config.explorer_tx_url.clone()),
        })
    }

    /// Gets the explorer used for transaction links.
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    async fn try_send(&self, request: &TransferRequest<'_>) -> Result<TxHash, TransferError> {
        let to = EthAddress::from_str(request.recipient).map_err(|e| {
            TransferError::InvalidRecipient(format!("{}: {}", request.recipient, e))
        })?;

        let value = parse_ether(&request.amount)
            .map_err(|e| TransferError::InvalidAmount(format!("{}: {}", request.amount, e)))?;
        if value.is_zero() {
            return Err(TransferError::InvalidAmount(format!(
                "{} is not a positive amount",
                request.amount
            )));
        }

        // Never echo the key itself back in an error.
        let wallet = request
            .sender_credential
            .parse::<LocalWallet>()
            .map_err(|e| TransferError::InvalidCredential(e.to_string()))?
            .with_chain_id(self.chain_id);
        debug!("Sender address: {:?}", wallet.address());

        let fees = FeeData::fetch(&self.provider).await?.resolve()?;
        let tx = Eip1559TransactionRequest::new()
            .to(to)
            .value(value)
            .gas(U256::from(self.gas_limit))
            .max_fee_per_gas(fees.max_fee_per_gas)
            .max_priority_fee_per_gas(fees.max_priority_fee_per_gas)
            .chain_id(self.chain_id);

        let client = SignerMiddleware::new(self.provider.clone(), wallet);
        let pending = client
            .send_transaction(tx, None)
            .await
            .map_err(|e| TransferError::Submission(e.to_string()))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        info!(
            "Transaction sent to {}: {}",
            request.recipient,
            self.explorer.tx_link(&tx_hash)
        );

        let receipt = tokio::time::timeout(
            self.confirmation_timeout,
            pending.confirmations(self.confirmations),
        )
        .await
        .map_err(|_| TransferError::ConfirmationTimeout {
            tx_hash: tx_hash.clone(),
            seconds: self.confirmation_timeout.as_secs(),
        })?
        .map_err(|e| TransferError::Confirmation(e.to_string()))?
        .ok_or_else(|| TransferError::Dropped(tx_hash.clone()))?;

        if receipt.status == Some(U64::zero()) {
            return Err(TransferError::Reverted(tx_hash));
        }
        debug!(
            "Transaction {} included in block {:?}",
            tx_hash, receipt.block_number
        );

        Ok(TxHash::new(tx_hash))
    }
}

#[async_trait]
impl TransferExecutor for EthTransferExecutor {
    async fn send(&self, request: &TransferRequest<'_>) -> Result<TxHash, TransferError> {
        info!(
            "Sending {} {} to address {}",
            request.amount, NATIVE_SYMBOL, request.recipient
        );
        self.try_send(request).await.map_err(|e| {
            error!("Error sending funds: {}", e);
            e
        })
    }
}
