use eyre::{eyre, Result};
use store::listing::model::ListingUpdate;
use store::listing::store::Store;
use store::utils::u256_to_bytes;

use crate::event::{MarketEvent, MarketMutation};
use crate::sink::handle::Sink;

/// The mutation table: who owns the asset and at what price, per event.
impl From<&MarketEvent> for ListingUpdate {
    fn from(event: &MarketEvent) -> Self {
        let token_id = event.token_id.clone();
        match &event.mutation {
            MarketMutation::Listed { seller, price } => ListingUpdate {
                token_id,
                owner: seller.clone(),
                is_listed: true,
                fixed_price: price.clone(),
            },
            MarketMutation::Unlisted { new_owner } => ListingUpdate {
                token_id,
                owner: new_owner.clone(),
                is_listed: false,
                fixed_price: u256_to_bytes(alloy::primitives::U256::ZERO),
            },
            MarketMutation::Purchased { buyer } => ListingUpdate {
                token_id,
                owner: buyer.clone(),
                is_listed: false,
                fixed_price: u256_to_bytes(alloy::primitives::U256::ZERO),
            },
        }
    }
}

pub struct ListingSink {
    pub store: Store,
}

#[async_trait::async_trait]
impl Sink for ListingSink {
    type Item = MarketEvent;

    async fn apply(&self, event: &MarketEvent) -> Result<()> {
        let update: ListingUpdate = event.into();
        match self.store.upsert_listing(&update).await {
            Ok(_) => {
                tracing::info!("Applied: {update:?}");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Sink failed on [upsert_listing]: {e:?}");
                Err(eyre!(e))
            }
        }
    }
}
