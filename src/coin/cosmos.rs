//! Cosmos SDK 链 (Cosmos Hub, BNB Beacon Chain)
//!
//! bech32(hrp, hash160(压缩公钥))

use crate::codec::bech32::{self, Variant};
use crate::coin::signer::TransactionSigner;
use crate::coin::{forward_sign_json, CoinEntry};
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const HASH_LEN: usize = 20;

pub struct CosmosEntry;

fn hrp(coin: CoinType) -> Result<&'static str, AddressError> {
    coin.descriptor()
        .hrp
        .ok_or_else(|| AddressError::format(format!("{} has no bech32 hrp", coin)))
}

impl CoinEntry for CosmosEntry {
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        bech32::decode_exact(address, hrp(coin)?, Variant::Bech32, HASH_LEN)
    }

    fn normalize_address(&self, _coin: CoinType, address: &str) -> String {
        address.to_ascii_lowercase()
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;
        let hash = coin.descriptor().hasher.hash(key.bytes());
        Ok(bech32::encode(hrp(coin)?, &hash, Variant::Bech32)?)
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
