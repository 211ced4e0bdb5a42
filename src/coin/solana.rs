//! Solana
//!
//! 地址即 Base58 编码的 32 字节 ed25519 公钥，无校验和

use crate::codec::base58::{self, Base58Alphabet};
use crate::coin::stellar::ed25519_bytes;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

const KEY_LEN: usize = 32;

pub struct SolanaEntry;

impl CoinEntry for SolanaEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let decoded = base58::decode(address, Base58Alphabet::Bitcoin)?;
        if decoded.len() != KEY_LEN {
            return Err(AddressError::InvalidLength {
                expected: KEY_LEN,
                found: decoded.len(),
            });
        }
        Ok(decoded)
    }

    fn derive_address(&self, _coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(base58::encode(&ed25519_bytes(public_key)?, Base58Alphabet::Bitcoin))
    }
}
