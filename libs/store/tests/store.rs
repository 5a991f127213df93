#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};
    use eyre::Result;
    use store::checkpoint::store::Store as CheckpointStore;
    use store::client::Client;
    use store::listing::model::ListingUpdate;
    use store::listing::store::Store as ListingStore;
    use store::utils::u256_to_bytes;

    fn padded_address(addr: Address) -> Vec<u8> {
        let mut bytes = vec![0u8; 12];
        bytes.extend_from_slice(addr.as_slice());
        bytes
    }

    #[tokio::test]
    async fn test_last_checkpoint_is_the_maximum_block_number() -> Result<()> {
        let db_url = "sqlite::memory:";
        let client = Client::init(db_url).await?;
        let store = CheckpointStore::new(client);

        store.insert_checkpoint(100).await?;
        store.insert_checkpoint(10100).await?;
        // An out-of-order append must not move the effective checkpoint back
        store.insert_checkpoint(50).await?;

        let last = store.get_last_checkpoint().await?;

        assert!(last.is_some());
        let last = last.unwrap();
        assert_eq!(last.last_block_number, 10100);
        assert!(last.created_at > 0);

        let history = store.get_checkpoint_history().await?;
        assert_eq!(history.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_last_checkpoint_on_empty_store() -> Result<()> {
        let db_url = "sqlite::memory:";
        let client = Client::init(db_url).await?;
        let store = CheckpointStore::new(client);

        assert!(store.get_last_checkpoint().await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_listing_creates_then_overwrites() -> Result<()> {
        let db_url = "sqlite::memory:";
        let client = Client::init(db_url).await?;
        let store = ListingStore::new(client);

        let token_id = u256_to_bytes(U256::from(7));
        let seller = padded_address(Address::repeat_byte(0xAA));
        let buyer = padded_address(Address::repeat_byte(0xBB));

        let listed = ListingUpdate {
            token_id: token_id.clone(),
            owner: seller.clone(),
            is_listed: true,
            fixed_price: u256_to_bytes(U256::from(50)),
        };
        store.upsert_listing(&listed).await?;

        let row = store.get_listing(&token_id).await?.unwrap();
        assert_eq!(row.owner, seller);
        assert!(row.is_listed);
        assert_eq!(row.fixed_price, u256_to_bytes(U256::from(50)));

        let purchased = ListingUpdate {
            token_id: token_id.clone(),
            owner: buyer.clone(),
            is_listed: false,
            fixed_price: u256_to_bytes(U256::ZERO),
        };
        store.upsert_listing(&purchased).await?;

        // Still exactly one row for the token, last writer wins
        let rows = store.get_listings().await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].owner, buyer);
        assert!(!rows[0].is_listed);
        assert_eq!(rows[0].fixed_price, u256_to_bytes(U256::ZERO));

        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_listing_is_idempotent() -> Result<()> {
        let db_url = "sqlite::memory:";
        let client = Client::init(db_url).await?;
        let store = ListingStore::new(client);

        let update = ListingUpdate {
            token_id: u256_to_bytes(U256::from(7)),
            owner: padded_address(Address::repeat_byte(0xAA)),
            is_listed: true,
            fixed_price: u256_to_bytes(U256::from(50)),
        };

        store.upsert_listing(&update).await?;
        store.upsert_listing(&update).await?;

        let rows = store.get_listings().await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].owner, update.owner);
        assert!(rows[0].is_listed);

        Ok(())
    }
}
