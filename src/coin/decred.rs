//! Decred (DCR)
//!
//! 两字节版本前缀的 Base58Check；校验和与公钥哈希都用 BLAKE-256 代替 SHA-256

use crate::codec::base58::{self, Base58Alphabet};
use crate::codec::Hasher;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const HASH_LEN: usize = 20;
const CHECKSUM: Hasher = Hasher::Blake256d;

pub struct DecredEntry;

impl CoinEntry for DecredEntry {
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let descriptor = coin.descriptor();
        let decoded = base58::decode_check_with(address, Base58Alphabet::Bitcoin, CHECKSUM)?;

        let prefix_len = descriptor.p2pkh_prefix.len();
        if decoded.len() != prefix_len + HASH_LEN {
            return Err(AddressError::InvalidLength {
                expected: prefix_len + HASH_LEN,
                found: decoded.len(),
            });
        }

        let (version, hash) = decoded.split_at(prefix_len);
        if version == descriptor.p2pkh_prefix || version == descriptor.p2sh_prefix {
            Ok(hash.to_vec())
        } else {
            Err(AddressError::WrongNetwork(format!(
                "version {} is not a {} prefix",
                hex::encode(version),
                coin
            )))
        }
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let descriptor = coin.descriptor();
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;

        let mut payload = descriptor.p2pkh_prefix.to_vec();
        payload.extend_from_slice(&descriptor.hasher.hash(key.bytes()));
        Ok(base58::encode_check_with(&payload, Base58Alphabet::Bitcoin, CHECKSUM))
    }
}
