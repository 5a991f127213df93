use alloy::primitives::Address;
use eyre::{eyre, Result};

pub fn parse_address(input: &str) -> Result<Address> {
    input.trim().parse::<Address>().map_err(|e| eyre!("invalid contract address `{input}`: {e}"))
}
