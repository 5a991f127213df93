use sqlx::FromRow;

/// One row of the append-only synchronization log. The effective
/// checkpoint is the row with the maximum `last_block_number`.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Checkpoint {
    pub last_block_number: i64,
    pub created_at: i64,
}
