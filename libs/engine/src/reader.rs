use alloy::primitives::{Address, BlockNumber};
use alloy::rpc::types::Log;
use chain::error::ChainError;
use chain::rpc::NodeClient;

use crate::event::MarketEventKind;
use crate::window::Window;

/// Read-only view of the chain the coordinator consumes.
#[async_trait::async_trait]
pub trait ChainReader: Send + Sync {
    async fn latest_block_number(&self) -> Result<BlockNumber, ChainError>;

    /// Raw logs for one event kind over an inclusive window, in on-chain
    /// order.
    async fn market_events(
        &self,
        kind: MarketEventKind,
        window: Window,
    ) -> Result<Vec<Log>, ChainError>;
}

/// Chain reader bound to one marketplace contract.
pub struct MarketSource {
    pub node_client: NodeClient,
    pub address: Address,
}

#[async_trait::async_trait]
impl ChainReader for MarketSource {
    async fn latest_block_number(&self) -> Result<BlockNumber, ChainError> {
        self.node_client.get_latest_block_number().await
    }

    async fn market_events(
        &self,
        kind: MarketEventKind,
        window: Window,
    ) -> Result<Vec<Log>, ChainError> {
        self.node_client.get_logs(&self.address, kind.signature(), window.from, window.to).await
    }
}
