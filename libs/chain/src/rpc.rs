use alloy::primitives::{Address, BlockNumber};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::{Filter, Log};
use alloy::transports::http::reqwest;
use alloy::transports::RpcError;
use reqwest::Url;

use crate::error::ChainError;

#[derive(Clone)]
pub struct NodeClient {
    provider: RootProvider,
}

impl NodeClient {
    pub fn new(rpc_url: Url) -> Self {
        let rpc_client = RpcClient::new_http(rpc_url);
        let provider = RootProvider::new(rpc_client);
        Self { provider }
    }

    pub async fn get_latest_block_number(&self) -> Result<BlockNumber, ChainError> {
        self.provider.get_block_number().await.map_err(ChainError::Transport)
    }

    /// Past logs for one event signature over an inclusive block range.
    /// The node returns them in on-chain order (ascending block number,
    /// then ascending log index within block).
    pub async fn get_logs(
        &self,
        address: &Address,
        event: &str,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, ChainError> {
        let filter =
            Filter::new().address(*address).event(event).from_block(from_block).to_block(to_block);

        self.provider.get_logs(&filter).await.map_err(|e| match &e {
            // Providers reject windows exceeding their block-range or
            // result-size limits with a JSON-RPC error response.
            RpcError::ErrorResp(payload) if is_range_rejection(&payload.message) => {
                ChainError::RangeRejected {
                    from: from_block,
                    to: to_block,
                    message: payload.message.to_string(),
                }
            }
            _ => ChainError::Transport(e),
        })
    }
}

fn is_range_rejection(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("range") || message.contains("limit") || message.contains("too many")
}
