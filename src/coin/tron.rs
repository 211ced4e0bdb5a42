//! Tron
//!
//! Base58Check(0x41 ‖ keccak256(非压缩公钥)[12..])

use crate::codec::base58::{self, Base58Alphabet};
use crate::coin::ethereum::key_hash;
use crate::coin::signer::TransactionSigner;
use crate::coin::{forward_sign_json, CoinEntry};
use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

const PREFIX: [u8; 1] = [0x41];

pub struct TronEntry;

impl CoinEntry for TronEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        base58::decode_with_prefix(address, &PREFIX, 20, Base58Alphabet::Bitcoin)
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let hash = key_hash(coin, public_key)?;
        Ok(base58::encode_with_prefix(&PREFIX, &hash, Base58Alphabet::Bitcoin))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PublicKeyType;

    #[test]
    fn test_derive() {
        let key = PublicKey::from_hex(
            "031f3ea174cafbe4e8f21893d0c4604ff79e2539c91fd2419e0b347a61a5020a06",
            PublicKeyType::Secp256k1,
        )
        .unwrap();
        assert_eq!(
            TronEntry.derive_address(CoinType::Tron, &key).unwrap(),
            "TJRyWwFs9wTFGZg3JbrVriFbNfCug5tDeC"
        );
    }

    #[test]
    fn test_address_data() {
        let data = TronEntry
            .address_to_data(CoinType::Tron, "TJRyWwFs9wTFGZg3JbrVriFbNfCug5tDeC")
            .unwrap();
        assert_eq!(hex::encode(data), "5cd0fb0ab3ce40f3051414c604b27756e69e43db");
    }

    #[test]
    fn test_rejects_other_versions() {
        assert!(matches!(
            TronEntry.address_to_data(CoinType::Tron, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Err(AddressError::WrongNetwork(_))
        ));
        assert_eq!(
            TronEntry.address_to_data(CoinType::Tron, "TJRyWwFs9wTFGZg3JbrVriFbNfCug5tDeD"),
            Err(AddressError::InvalidChecksum)
        );
        assert!(!TronEntry.validate_address(CoinType::Tron, "0x5cd0fb0ab3ce40f3051414c604b27756e69e43db"));
    }
}
