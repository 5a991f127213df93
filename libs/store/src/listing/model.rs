use sqlx::FromRow;

/// Materialized marketplace status of one on-chain asset, keyed by token id.
/// Token id, owner and price are kept as raw big-endian blobs; rendering
/// happens in `pretty` and in the query responses.
#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct Listing {
    pub token_id: Vec<u8>,
    pub owner: Vec<u8>,
    pub is_listed: bool,
    pub fixed_price: Vec<u8>,
    pub updated_at: i64,
}

/// The mutation applied by one marketplace event. `updated_at` is filled
/// by the store at write time.
#[derive(Clone, PartialEq, Eq)]
pub struct ListingUpdate {
    pub token_id: Vec<u8>,
    pub owner: Vec<u8>,
    pub is_listed: bool,
    pub fixed_price: Vec<u8>,
}
