//! MultiversX (原 Elrond)
//!
//! bech32("erd", 32 字节 ed25519 公钥)

use crate::codec::bech32::{self, Variant};
use crate::coin::stellar::ed25519_bytes;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

const HRP: &str = "erd";
const KEY_LEN: usize = 32;

pub struct MultiversXEntry;

impl CoinEntry for MultiversXEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        bech32::decode_exact(address, HRP, Variant::Bech32, KEY_LEN)
    }

    fn normalize_address(&self, _coin: CoinType, address: &str) -> String {
        address.to_ascii_lowercase()
    }

    fn derive_address(&self, _coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(bech32::encode(HRP, &ed25519_bytes(public_key)?, Variant::Bech32)?)
    }
}
