//! Network fee data for value transfers.

use ethers::{providers::Middleware, types::U256};
use faucet_core::TransferError;
use tracing::{debug, warn};

/// Fee parameters reported by the network. Any of them may be unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeData {
    /// Legacy flat gas price
    pub gas_price: Option<U256>,
    /// EIP-1559 fee cap
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 priority fee
    pub max_priority_fee_per_gas: Option<U256>,
}

/// The fees actually attached to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeParams {
    /// Most the sender pays per unit of gas, base fee included
    pub max_fee_per_gas: U256,
    /// Tip per unit of gas paid to the block producer
    pub max_priority_fee_per_gas: U256,
}

impl FeeData {
    /// Queries the gas price and an EIP-1559 fee estimate from the node.
    ///
    /// A failed gas price query means the node cannot be used and is returned
    /// as `TransferError::Provider`. A missing EIP-1559 estimate is tolerated
    /// and left for [`FeeData::resolve`] to fall back on.
    pub async fn fetch<M: Middleware>(client: &M) -> Result<Self, TransferError> {
        let gas_price = client
            .get_gas_price()
            .await
            .map_err(|e| TransferError::Provider(format!("failed to query gas price: {}", e)))?;

        let (max_fee_per_gas, max_priority_fee_per_gas) =
            match client.estimate_eip1559_fees(None).await {
                Ok((max_fee, priority_fee)) => (Some(max_fee), Some(priority_fee)),
                Err(e) => {
                    debug!("EIP-1559 fee estimate unavailable: {}", e);
                    (None, None)
                }
            };

        let data = Self {
            gas_price: Some(gas_price),
            max_fee_per_gas,
            max_priority_fee_per_gas,
        };
        debug!("Fee data: {:?}", data);
        Ok(data)
    }

    /// Picks the fees for a transfer, falling back to the flat gas price for
    /// whichever EIP-1559 value is missing.
    pub fn resolve(&self) -> Result<FeeParams, TransferError> {
        if self.max_fee_per_gas.is_none() || self.max_priority_fee_per_gas.is_none() {
            warn!("EIP-1559 fee data unavailable, using flat gas price");
        }

        let max_priority_fee_per_gas = self
            .max_priority_fee_per_gas
            .or(self.gas_price)
            .ok_or_else(|| TransferError::FeeData("no priority fee or gas price".to_string()))?;
        let max_fee_per_gas = self
            .max_fee_per_gas
            .or(self.gas_price)
            .ok_or_else(|| TransferError::FeeData("no max fee or gas price".to_string()))?;

        Ok(FeeParams {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }
}
