//! Zilliqa
//!
//! bech32("zil", sha256(压缩公钥)[12..])；地址数据是带校验大小写的十六进制文本

use crate::codec::bech32::{self, Variant};
use crate::codec::mixed_case::MixedCaseChecksum;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const HRP: &str = "zil";
const HASH_LEN: usize = 20;

pub struct ZilliqaEntry;

impl CoinEntry for ZilliqaEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let raw = bech32::decode_exact(address, HRP, Variant::Bech32, HASH_LEN)?;
        let checksummed = MixedCaseChecksum::Zilliqa
            .checksum(&hex::encode(raw))
            .ok_or_else(|| AddressError::format("zilliqa checksum"))?;
        Ok(checksummed.into_bytes())
    }

    fn normalize_address(&self, _coin: CoinType, address: &str) -> String {
        address.to_ascii_lowercase()
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;
        let hash = coin.descriptor().hasher.hash(key.bytes());
        Ok(bech32::encode(HRP, &hash[hash.len() - HASH_LEN..], Variant::Bech32)?)
    }
}
