//! Bitcoin 系列 (BTC, LTC, DOGE, DASH, ZEC)
//!
//! 带 hrp 的币种同时接受 segwit 与 Base58Check 旧地址；派生总是给出该币种的首选格式

use crate::codec::base58::{self, Base58Alphabet};
use crate::codec::bech32;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const HASH_LEN: usize = 20;

pub struct BitcoinEntry;

impl BitcoinEntry {
    fn is_segwit(hrp: Option<&'static str>, address: &str) -> Option<&'static str> {
        let hrp = hrp?;
        let lower = address.to_ascii_lowercase();
        if lower.starts_with(hrp) && lower[hrp.len()..].starts_with('1') {
            Some(hrp)
        } else {
            None
        }
    }

    fn decode_legacy(coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let descriptor = coin.descriptor();
        let decoded = base58::decode_check(address, Base58Alphabet::Bitcoin)?;

        for prefix in [descriptor.p2pkh_prefix, descriptor.p2sh_prefix] {
            if prefix.is_empty() || decoded.len() != prefix.len() + HASH_LEN {
                continue;
            }
            if decoded.starts_with(prefix) {
                return Ok(decoded[prefix.len()..].to_vec());
            }
        }

        let prefix_len = descriptor.p2pkh_prefix.len();
        if decoded.len() != prefix_len + HASH_LEN {
            return Err(AddressError::InvalidLength {
                expected: prefix_len + HASH_LEN,
                found: decoded.len(),
            });
        }
        Err(AddressError::WrongNetwork(format!(
            "version {} is not a {} prefix",
            hex::encode(&decoded[..prefix_len]),
            coin
        )))
    }
}

impl CoinEntry for BitcoinEntry {
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        match Self::is_segwit(coin.descriptor().hrp, address) {
            Some(hrp) => bech32::decode_segwit(address, hrp).map(|wp| wp.program),
            None => Self::decode_legacy(coin, address),
        }
    }

    fn normalize_address(&self, coin: CoinType, address: &str) -> String {
        // bech32 只允许单一大小写，规范形式为小写
        match Self::is_segwit(coin.descriptor().hrp, address) {
            Some(_) => address.to_ascii_lowercase(),
            None => address.to_string(),
        }
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let descriptor = coin.descriptor();
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;
        let hash = descriptor.hasher.hash(key.bytes());

        match descriptor.hrp {
            Some(hrp) => Ok(bech32::encode_segwit(hrp, 0, &hash)?),
            None => Ok(base58::encode_with_prefix(
                descriptor.p2pkh_prefix,
                &hash,
                Base58Alphabet::Bitcoin,
            )),
        }
    }
}
