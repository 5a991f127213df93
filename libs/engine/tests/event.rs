#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, B256, U256};
    use alloy::rpc::types::Log;
    use engine::event::{ChainPosition, MarketEvent, MarketEventKind, MarketMutation};
    use store::utils::u256_to_bytes;

    fn pad_address(addr: Address) -> Vec<u8> {
        let mut bytes = vec![0u8; 12];
        bytes.extend_from_slice(addr.as_slice());
        bytes
    }

    fn raw_log(token_id: u64, data: Vec<u8>, block: u64, tx_index: u64, log_index: u64) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: Address::repeat_byte(0x11),
                data: alloy::primitives::LogData::new_unchecked(
                    vec![B256::ZERO, B256::from(U256::from(token_id))],
                    data.into(),
                ),
            },
            block_hash: Some(B256::repeat_byte(0x22)),
            block_number: Some(block),
            block_timestamp: None,
            transaction_hash: Some(B256::repeat_byte(0x33)),
            transaction_index: Some(tx_index),
            log_index: Some(log_index),
            removed: false,
        }
    }

    #[test]
    fn test_decode_listed() {
        let seller = Address::repeat_byte(0xAA);
        let mut data = pad_address(seller);
        data.extend_from_slice(&u256_to_bytes(U256::from(50)));

        let log = raw_log(7, data, 120, 0, 0);
        let event = MarketEvent::decode(MarketEventKind::Listed, &log).unwrap();

        assert_eq!(event.kind(), MarketEventKind::Listed);
        assert_eq!(event.token_id, u256_to_bytes(U256::from(7)));
        assert_eq!(
            event.position,
            ChainPosition { block_number: 120, transaction_index: 0, log_index: 0 }
        );
        assert_eq!(
            event.mutation,
            MarketMutation::Listed {
                seller: pad_address(seller),
                price: u256_to_bytes(U256::from(50)),
            }
        );
    }

    #[test]
    fn test_decode_unlisted_and_purchased() {
        let owner = Address::repeat_byte(0xCC);

        let log = raw_log(7, pad_address(owner), 121, 1, 3);
        let event = MarketEvent::decode(MarketEventKind::Unlisted, &log).unwrap();
        assert_eq!(event.mutation, MarketMutation::Unlisted { new_owner: pad_address(owner) });

        let event = MarketEvent::decode(MarketEventKind::Purchased, &log).unwrap();
        assert_eq!(event.mutation, MarketMutation::Purchased { buyer: pad_address(owner) });
    }

    #[test]
    fn test_decode_rejects_short_data() {
        let log = raw_log(7, vec![0u8; 32], 120, 0, 0);
        // a listing needs two data words, seller and price
        assert!(MarketEvent::decode(MarketEventKind::Listed, &log).is_err());
    }

    #[test]
    fn test_decode_rejects_pending_log() {
        let mut log = raw_log(7, pad_address(Address::repeat_byte(0xCC)), 120, 0, 0);
        log.block_number = None;
        assert!(MarketEvent::decode(MarketEventKind::Unlisted, &log).is_err());
    }

    #[test]
    fn test_chain_position_orders_by_block_then_tx_index() {
        let a = ChainPosition { block_number: 120, transaction_index: 1, log_index: 0 };
        let b = ChainPosition { block_number: 120, transaction_index: 2, log_index: 0 };
        let c = ChainPosition { block_number: 121, transaction_index: 0, log_index: 0 };

        let mut positions = vec![c, a, b];
        positions.sort();
        assert_eq!(positions, vec![a, b, c]);
    }
}
