use chain::error::ChainError;
use thiserror::Error;

/// Cycle-level failure classes. None of these crash the process: the
/// runner logs them and the next tick retries the same window, which is
/// safe because listing mutations are idempotent upserts.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("chain node unreachable: {0}")]
    Network(#[source] ChainError),

    #[error("block range [{from}, {to}] rejected by provider: {message}")]
    Range { from: u64, to: u64, message: String },

    #[error("store write failed: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error(transparent)]
    Unexpected(#[from] eyre::Report),
}

impl From<ChainError> for SyncError {
    fn from(e: ChainError) -> Self {
        match e {
            ChainError::RangeRejected { from, to, message } => {
                SyncError::Range { from, to, message }
            }
            transport => SyncError::Network(transport),
        }
    }
}
