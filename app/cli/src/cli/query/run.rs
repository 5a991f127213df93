use alloy::primitives::U256;
use eyre::{eyre, Result};
use store::client::Client;
use store::utils::u256_to_bytes;

use crate::cli::query::args::Query;
use crate::cli::query::read::Entity;
use crate::cli::query::response::{CheckpointResponse, ListingResponse};

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::init(&query.db_url).await?;

    match query.entity {
        Entity::Listing => {
            let listing_store = store::listing::store::Store::new(client.clone());

            let listings = match query.token_id {
                Some(token_id) => {
                    let token_id = u256_to_bytes(U256::from(token_id));
                    listing_store.get_listing(&token_id).await?.into_iter().collect()
                }
                None => listing_store.get_listings().await?,
            };

            if listings.is_empty() {
                println!("No Listings Found")
            } else {
                let response: Vec<ListingResponse> =
                    listings.into_iter().map(ListingResponse).collect();
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Entity::Checkpoint => {
            let checkpoint_store = store::checkpoint::store::Store::new(client.clone());

            let checkpoint = checkpoint_store
                .get_last_checkpoint()
                .await?
                .ok_or(eyre!("Checkpoint Not Found"))?;

            let response = CheckpointResponse(checkpoint);

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
