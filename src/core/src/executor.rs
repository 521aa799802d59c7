//! Seams between the distribution protocol and the outside world.

use crate::errors::{CoreError, TransferError};
use crate::types::{TransferRequest, TxHash};
use async_trait::async_trait;

/// Submits a single value transfer and waits for it to be confirmed.
///
/// Implementations must not retry; a returned error means the transfer did
/// not happen as far as the caller is concerned.
#[async_trait]
pub trait TransferExecutor: Send + Sync {
    /// Sends `request.amount` to `request.recipient`, signed with `request.sender_credential`.
    async fn send(&self, request: &TransferRequest<'_>) -> Result<TxHash, TransferError>;
}

#[async_trait]
impl<T: TransferExecutor + ?Sized> TransferExecutor for Box<T> {
    async fn send(&self, request: &TransferRequest<'_>) -> Result<TxHash, TransferError> {
        (**self).send(request).await
    }
}

/// Asks the operator a question and returns the answer without its line ending.
pub trait Prompter {
    /// Shows `question` and reads one answer.
    fn ask(&mut self, question: &str) -> Result<String, CoreError>;
}
