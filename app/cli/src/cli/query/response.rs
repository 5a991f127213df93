use serde::{ser::SerializeStruct, Serialize};
use store::{checkpoint::model::Checkpoint, listing::model::Listing, utils};

// Tuple wrapper for Checkpoint
pub struct CheckpointResponse(pub Checkpoint);

impl Serialize for CheckpointResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let c = &self.0;
        let mut state = serializer.serialize_struct("Checkpoint", 2)?;
        state.serialize_field("last_block_number", &c.last_block_number)?;
        state.serialize_field("created_at", &c.created_at)?;
        state.end()
    }
}

// Tuple wrapper for Listing
pub struct ListingResponse(pub Listing);

impl Serialize for ListingResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let l = &self.0;
        let mut state = serializer.serialize_struct("Listing", 5)?;
        state.serialize_field("token_id", &utils::bytes_to_u256(&l.token_id))?;
        state.serialize_field("owner", &utils::bytes_to_address(&l.owner))?;
        state.serialize_field("is_listed", &l.is_listed)?;
        state.serialize_field("fixed_price", &utils::bytes_to_u256(&l.fixed_price))?;
        state.serialize_field("updated_at", &l.updated_at)?;
        state.end()
    }
}
