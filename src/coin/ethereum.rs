//! EVM 链 (ETH, ETC, Polygon, BSC, Avalanche C-Chain, Arbitrum, Optimism)
//!
//! 地址 = keccak256(非压缩公钥去掉 0x04)[12..]，EIP-55 大小写校验

use crate::codec::mixed_case::MixedCaseChecksum;
use crate::coin::signer::TransactionSigner;
use crate::coin::{forward_sign_json, CoinEntry};
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const ADDRESS_HEX_LEN: usize = 40;

pub struct EthereumEntry;

/// 校验去掉前缀后的 40 位十六进制地址体，返回 20 字节
pub(crate) fn decode_hex_body(body: &str) -> Result<Vec<u8>, AddressError> {
    if body.len() != ADDRESS_HEX_LEN {
        return Err(AddressError::format(format!(
            "expected {} hex characters, found {}",
            ADDRESS_HEX_LEN,
            body.len()
        )));
    }
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::format("address contains non-hex characters"));
    }
    if !MixedCaseChecksum::Eip55.verify(body) {
        return Err(AddressError::InvalidChecksum);
    }
    hex::decode(body).map_err(|e| AddressError::format(e.to_string()))
}

/// EIP-55 形式的地址体（不含前缀）
pub(crate) fn checksummed_body(bytes: &[u8]) -> String {
    let lower = hex::encode(bytes);
    MixedCaseChecksum::Eip55
        .checksum(&lower)
        .unwrap_or(lower)
}

/// keccak256(x ‖ y)[12..]
pub(crate) fn key_hash(coin: CoinType, public_key: &PublicKey) -> Result<Vec<u8>, CoinError> {
    let key = public_key.to_type(PublicKeyType::Secp256k1Extended)?;
    let digest = coin.descriptor().hasher.hash(&key.bytes()[1..]);
    Ok(digest[digest.len() - 20..].to_vec())
}

impl CoinEntry for EthereumEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let body = address
            .strip_prefix("0x")
            .ok_or_else(|| AddressError::format("address must start with 0x"))?;
        decode_hex_body(body)
    }

    fn normalize_address(&self, coin: CoinType, address: &str) -> String {
        match self.address_to_data(coin, address) {
            Ok(data) => format!("0x{}", checksummed_body(&data)),
            Err(_) => address.to_string(),
        }
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        Ok(format!("0x{}", checksummed_body(&key_hash(coin, public_key)?)))
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

    const PUBKEY: &str = "02753f5c275e1847ba4d2fd3df36ad00af2e165650b35fe3991e9c9c46f68b12bc";

    #[test]
    fn test_derive_every_evm_chain() {
        let key = PublicKey::from_hex(PUBKEY, PublicKeyType::Secp256k1).unwrap();
        for coin in [
            CoinType::Ethereum,
            CoinType::EthereumClassic,
            CoinType::Polygon,
            CoinType::SmartChain,
            CoinType::AvalancheCChain,
            CoinType::Arbitrum,
            CoinType::Optimism,
        ] {
            assert_eq!(
                EthereumEntry.derive_address(coin, &key).unwrap(),
                "0x8a69dC190c319C5a4f1459620c185708C701902A"
            );
        }
    }

    #[test]
    fn test_checksum_rules() {
        let coin = CoinType::Ethereum;
        assert!(EthereumEntry.validate_address(coin, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(EthereumEntry.validate_address(coin, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(EthereumEntry.validate_address(coin, "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
        assert_eq!(
            EthereumEntry.address_to_data(coin, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn test_rejects_malformed() {
        let coin = CoinType::Ethereum;
        for address in [
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAedaa",
            "0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0X5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        ] {
            assert!(!EthereumEntry.validate_address(coin, address), "{address}");
        }
    }

    #[test]
    fn test_normalize_to_checksum() {
        assert_eq!(
            EthereumEntry.normalize_address(
                CoinType::Polygon,
                "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
            ),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_address_data() {
        let data = EthereumEntry
            .address_to_data(CoinType::Ethereum, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
            .unwrap();
        assert_eq!(hex::encode(data), "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }
}
