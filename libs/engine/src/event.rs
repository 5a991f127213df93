use alloy::primitives::BlockNumber;
use alloy::rpc::types::Log;
use eyre::{eyre, Result};
use store::utils::{bytes_to_hex, bytes_to_u256};

/// The closed set of marketplace events the engine reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketEventKind {
    Listed,
    Unlisted,
    Purchased,
}

impl MarketEventKind {
    pub const ALL: [MarketEventKind; 3] =
        [MarketEventKind::Listed, MarketEventKind::Unlisted, MarketEventKind::Purchased];

    pub fn signature(&self) -> &'static str {
        match self {
            MarketEventKind::Listed => "ListNFT(uint256,address,uint256)",
            MarketEventKind::Unlisted => "UnlistNFT(uint256,address)",
            MarketEventKind::Purchased => "BuyNFT(uint256,address)",
        }
    }
}

/// On-chain coordinates of one log. Sorting by this key restores chain
/// order after the per-kind fetches are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChainPosition {
    pub block_number: BlockNumber,
    pub transaction_index: u64,
    pub log_index: u64,
}

/// Kind-specific payload. Each event names its counterparty differently
/// on-chain (seller, newOwner, buyer); the variant keeps the mapping to
/// listing fields exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketMutation {
    Listed { seller: Vec<u8>, price: Vec<u8> },
    Unlisted { new_owner: Vec<u8> },
    Purchased { buyer: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketEvent {
    pub token_id: Vec<u8>,
    pub transaction_hash: Vec<u8>,
    pub position: ChainPosition,
    pub mutation: MarketMutation,
}

impl MarketEvent {
    pub fn kind(&self) -> MarketEventKind {
        match self.mutation {
            MarketMutation::Listed { .. } => MarketEventKind::Listed,
            MarketMutation::Unlisted { .. } => MarketEventKind::Unlisted,
            MarketMutation::Purchased { .. } => MarketEventKind::Purchased,
        }
    }

    /// Decode a raw log fetched for `kind`. The token id is the indexed
    /// first topic; counterparty (and price for listings) sit abi-padded
    /// in the data section.
    pub fn decode(kind: MarketEventKind, log: &Log) -> Result<MarketEvent> {
        let position = ChainPosition {
            block_number: log.block_number.ok_or_else(|| eyre!("missing block_number"))?,
            transaction_index: log
                .transaction_index
                .ok_or_else(|| eyre!("missing transaction_index"))?,
            log_index: log.log_index.ok_or_else(|| eyre!("missing log_index"))?,
        };
        let transaction_hash = log
            .transaction_hash
            .ok_or_else(|| eyre!("missing transaction_hash"))?
            .to_vec();
        let token_id = log
            .topics()
            .get(1)
            .ok_or_else(|| eyre!("missing token id topic"))?
            .as_slice()
            .to_vec();

        let data = &log.data().data;
        let word = |i: usize| -> Result<Vec<u8>> {
            data.get(i * 32..(i + 1) * 32)
                .map(<[u8]>::to_vec)
                .ok_or_else(|| eyre!("short data section: {}", bytes_to_hex(data)))
        };

        let mutation = match kind {
            MarketEventKind::Listed => {
                MarketMutation::Listed { seller: word(0)?, price: word(1)? }
            }
            MarketEventKind::Unlisted => MarketMutation::Unlisted { new_owner: word(0)? },
            MarketEventKind::Purchased => MarketMutation::Purchased { buyer: word(0)? },
        };

        Ok(MarketEvent { token_id, transaction_hash, position, mutation })
    }

    pub fn token_id_pretty(&self) -> String {
        bytes_to_u256(&self.token_id)
    }
}
