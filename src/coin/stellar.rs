//! Stellar / Kin
//!
//! StrKey 账户地址 `G...`，数据即 32 字节 ed25519 公钥

use crate::codec::strkey::{self, ACCOUNT_ID};
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError, KeyError};

pub struct StellarEntry;

/// ed25519 系适配器共用：取出 32 字节公钥
pub(crate) fn ed25519_bytes(public_key: &PublicKey) -> Result<[u8; 32], CoinError> {
    <[u8; 32]>::try_from(public_key.bytes()).map_err(|_| {
        CoinError::Key(KeyError::InvalidLength {
            key_type: public_key.key_type(),
            expected: 32,
            found: public_key.bytes().len(),
        })
    })
}

impl CoinEntry for StellarEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        strkey::decode(address, ACCOUNT_ID).map(|key| key.to_vec())
    }

    fn derive_address(&self, _coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(strkey::encode(ACCOUNT_ID, &ed25519_bytes(public_key)?))
    }
}
