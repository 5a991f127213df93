use alloy::transports::{RpcError, TransportErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("node unreachable: {0}")]
    Transport(#[source] RpcError<TransportErrorKind>),

    #[error("block range [{from}, {to}] rejected by provider: {message}")]
    RangeRejected { from: u64, to: u64, message: String },
}
