//! Ronin
//!
//! 与 EVM 地址同构，对外展示 `ronin:` 前缀；输入兼容 `0x`

use crate::coin::ethereum::{checksummed_body, decode_hex_body, key_hash};
use crate::coin::signer::TransactionSigner;
use crate::coin::{forward_sign_json, CoinEntry};
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

const PREFIX: &str = "ronin:";

pub struct RoninEntry;

fn strip_prefix(address: &str) -> Result<&str, AddressError> {
    address
        .strip_prefix(PREFIX)
        .or_else(|| address.strip_prefix("0x"))
        .ok_or_else(|| AddressError::format("address must start with ronin: or 0x"))
}

impl CoinEntry for RoninEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        decode_hex_body(strip_prefix(address)?)
    }

    fn normalize_address(&self, coin: CoinType, address: &str) -> String {
        match self.address_to_data(coin, address) {
            Ok(data) => format!("{}{}", PREFIX, checksummed_body(&data)),
            Err(_) => address.to_string(),
        }
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(format!("{}{}", PREFIX, checksummed_body(&key_hash(coin, public_key)?)))
    }

    fn supports_json_signing(&self) -> bool {
        true
    }

    fn sign_json(
        &self,
        coin: CoinType,
        json: &str,
        private_key: &[u8],
        signer: &dyn TransactionSigner,
    ) -> Result<String, CoinError> {
        forward_sign_json(coin, json, private_key, signer)
    }
}
