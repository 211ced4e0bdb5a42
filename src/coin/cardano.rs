//! Cardano (Shelley 主网)
//!
//! 128 字节扩展公钥 = 支付公钥 ‖ 链码 ‖ 质押公钥 ‖ 链码；派生基础地址
//! header(0x01) ‖ blake2b-224(支付公钥) ‖ blake2b-224(质押公钥)

use crate::codec::bech32::{self, Variant};
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError, KeyError};

const HRP: &str = "addr";
const MAINNET: u8 = 0x01;
const BASE_ADDRESS: u8 = 0x00;
const KEY_HASH_LEN: usize = 28;

pub struct CardanoEntry;

/// 按 header 高 4 位检查负载长度
fn check_shape(data: &[u8]) -> Result<(), AddressError> {
    let header = *data
        .first()
        .ok_or_else(|| AddressError::format("empty cardano address"))?;

    let kind = header >> 4;
    let len = data.len();
    let shape_ok = match kind {
        // 基础地址：支付凭证 + 质押凭证
        0..=3 => len == 1 + 2 * KEY_HASH_LEN,
        // 指针地址：凭证 + 变长指针
        4 | 5 => len > 1 + KEY_HASH_LEN,
        // 企业地址：仅支付凭证
        6 | 7 => len == 1 + KEY_HASH_LEN,
        other => {
            return Err(AddressError::format(format!(
                "unsupported cardano address type {}",
                other
            )))
        }
    };
    if !shape_ok {
        return Err(AddressError::format(format!(
            "cardano address type {} has invalid length {}",
            kind, len
        )));
    }

    let network = header & 0x0f;
    if network != MAINNET {
        return Err(AddressError::WrongNetwork(format!(
            "cardano network id {}",
            network
        )));
    }
    Ok(())
}

impl CoinEntry for CardanoEntry {
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let data = bech32::decode(address, HRP, Variant::Bech32)?;
        check_shape(&data)?;
        Ok(data)
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        if public_key.key_type() != PublicKeyType::Ed25519Cardano {
            return Err(CoinError::Key(KeyError::UnsupportedConversion {
                from: public_key.key_type(),
                to: PublicKeyType::Ed25519Cardano,
            }));
        }
        let bytes = public_key.bytes();
        let hasher = coin.descriptor().hasher;

        let mut data = Vec::with_capacity(1 + 2 * KEY_HASH_LEN);
        data.push(BASE_ADDRESS << 4 | MAINNET);
        data.extend_from_slice(&hasher.hash(&bytes[..32]));
        data.extend_from_slice(&hasher.hash(&bytes[64..96]));
        Ok(bech32::encode(HRP, &data, Variant::Bech32)?)
    }
}
