use std::fmt::{Debug, Formatter, Result};

use crate::listing::model::{Listing, ListingUpdate};
use crate::utils::{bytes_to_address, bytes_to_u256};

impl Debug for Listing {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Listing")
            .field("token_id", &bytes_to_u256(&self.token_id))
            .field("owner", &bytes_to_address(&self.owner))
            .field("is_listed", &self.is_listed)
            .field("fixed_price", &bytes_to_u256(&self.fixed_price))
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl Debug for ListingUpdate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ListingUpdate")
            .field("token_id", &bytes_to_u256(&self.token_id))
            .field("owner", &bytes_to_address(&self.owner))
            .field("is_listed", &self.is_listed)
            .field("fixed_price", &bytes_to_u256(&self.fixed_price))
            .finish()
    }
}
