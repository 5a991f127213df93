use crate::client::Client;
use crate::listing::model::{Listing, ListingUpdate};
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // LISTINGS
    // ---------------------------

    /// Create-if-absent, else overwrite. Applying the same update twice
    /// leaves the row unchanged, which is what makes window replays safe.
    pub async fn upsert_listing(&self, update: &ListingUpdate) -> Result<(), Error> {
        let query = r#"
            INSERT INTO listings (token_id, owner, is_listed, fixed_price, updated_at)
            VALUES (?, ?, ?, ?, unixepoch())
            ON CONFLICT (token_id) DO UPDATE SET
                owner = excluded.owner,
                is_listed = excluded.is_listed,
                fixed_price = excluded.fixed_price,
                updated_at = unixepoch()
            "#;

        sqlx::query(query)
            .bind(&update.token_id)
            .bind(&update.owner)
            .bind(update.is_listed)
            .bind(&update.fixed_price)
            .execute(self.client.pool())
            .await?;
        Ok(())
    }

    pub async fn get_listing(&self, token_id: &[u8]) -> Result<Option<Listing>, Error> {
        let query = r#"
            SELECT token_id, owner, is_listed, fixed_price, updated_at
            FROM listings
            WHERE token_id = ?
            LIMIT 1
            "#;
        let listing =
            sqlx::query_as(query).bind(token_id).fetch_optional(self.client.pool()).await?;

        Ok(listing)
    }

    pub async fn get_listings(&self) -> Result<Vec<Listing>, Error> {
        let query = r#"
            SELECT token_id, owner, is_listed, fixed_price, updated_at
            FROM listings
            ORDER BY token_id ASC
            "#;
        let listings = sqlx::query_as(query).fetch_all(self.client.pool()).await?;

        Ok(listings)
    }
}
