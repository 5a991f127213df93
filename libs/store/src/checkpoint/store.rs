use crate::checkpoint::model::Checkpoint;
use crate::client::Client;
use alloy::primitives::BlockNumber;
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
    // CHECKPOINTS
    // ---------------------------

    /// Append-only: a new row per advanced window, never an update.
    pub async fn insert_checkpoint(&self, block_number: BlockNumber) -> Result<(), Error> {
        let query = r#"
            INSERT INTO checkpoints (last_block_number)
            VALUES (?)
            "#;
        sqlx::query(query).bind(block_number as i64).execute(self.client.pool()).await?;
        Ok(())
    }

    pub async fn get_last_checkpoint(&self) -> Result<Option<Checkpoint>, Error> {
        let query = r#"
            SELECT last_block_number, created_at
            FROM checkpoints
            ORDER BY last_block_number DESC
            LIMIT 1
            "#;
        let checkpoint = sqlx::query_as(query).fetch_optional(self.client.pool()).await?;

        Ok(checkpoint)
    }

    pub async fn get_checkpoint_history(&self) -> Result<Vec<Checkpoint>, Error> {
        let query = r#"
            SELECT last_block_number, created_at
            FROM checkpoints
            ORDER BY id ASC
            "#;
        let checkpoints = sqlx::query_as(query).fetch_all(self.client.pool()).await?;

        Ok(checkpoints)
    }
}
