//! Polkadot / Kusama
//!
//! SS58 地址，网络前缀取自描述表

use crate::codec::ss58;
use crate::coin::stellar::ed25519_bytes;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

pub struct PolkadotEntry;

fn network(coin: CoinType) -> Result<u16, AddressError> {
    coin.descriptor()
        .ss58_prefix
        .ok_or_else(|| AddressError::format(format!("{} has no ss58 prefix", coin)))
}

impl CoinEntry for PolkadotEntry {
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        ss58::decode(address, network(coin)?).map(|key| key.to_vec())
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(ss58::encode(network(coin)?, &ed25519_bytes(public_key)?))
    }
}
