//! XRP Ledger
//!
//! 经典地址：Ripple 字母表的 Base58Check(0x00 ‖ hash160(压缩公钥))

use crate::codec::base58::{self, Base58Alphabet};
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const ACCOUNT_PREFIX: [u8; 1] = [0x00];

pub struct RippleEntry;

impl CoinEntry for RippleEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        base58::decode_with_prefix(address, &ACCOUNT_PREFIX, 20, Base58Alphabet::Ripple)
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;
        Ok(base58::encode_with_prefix(
            &ACCOUNT_PREFIX,
            &coin.descriptor().hasher.hash(key.bytes()),
            Base58Alphabet::Ripple,
        ))
    }
}
