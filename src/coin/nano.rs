//! Nano
//!
//! `nano_` + base32 公钥 + blake2b-40 校验和；旧前缀 `xrb_` 只在输入时接受

use crate::codec::nano::{self, LEGACY_PREFIX, PREFIX};
use crate::coin::stellar::ed25519_bytes;
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

pub struct NanoEntry;

impl CoinEntry for NanoEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        nano::decode(address).map(|key| key.to_vec())
    }

    fn normalize_address(&self, _coin: CoinType, address: &str) -> String {
        match address.strip_prefix(LEGACY_PREFIX) {
            Some(body) => format!("{}{}", PREFIX, body),
            None => address.to_string(),
        }
    }

    fn derive_address(&self, _coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(nano::encode(&ed25519_bytes(public_key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PublicKeyType;

    const PUBKEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const ADDRESS: &str = "nano_3ottm11r7eacpzcnqzpms7k1ggigw7sh9po86ekty1itf5uignatnb14pyae";

    #[test]
    fn test_derive() {
        let key = PublicKey::from_hex(PUBKEY, PublicKeyType::Ed25519Blake2b).unwrap();
        assert_eq!(NanoEntry.derive_address(CoinType::Nano, &key).unwrap(), ADDRESS);
    }

    #[test]
    fn test_legacy_prefix() {
        let legacy = ADDRESS.replacen("nano_", "xrb_", 1);
        assert!(NanoEntry.validate_address(CoinType::Nano, &legacy));
        assert_eq!(NanoEntry.normalize_address(CoinType::Nano, &legacy), ADDRESS);
        assert_eq!(
            hex::encode(NanoEntry.address_to_data(CoinType::Nano, &legacy).unwrap()),
            PUBKEY
        );
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let corrupted = format!("{}y", &ADDRESS[..ADDRESS.len() - 1]);
        assert_eq!(
            NanoEntry.address_to_data(CoinType::Nano, &corrupted),
            Err(AddressError::InvalidChecksum)
        );
        assert!(!NanoEntry.validate_address(CoinType::Nano, &ADDRESS[5..]));
    }
}
