//! NEO (Legacy)
//!
//! 地址 = Base58Check(0x17 ‖ hash160(PUSHBYTES33 ‖ 压缩公钥 ‖ CHECKSIG))

use crate::codec::base58::{self, Base58Alphabet};
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

const VERSION: u8 = 0x17;
const PUSH_BYTES_33: u8 = 0x21;
const CHECK_SIG: u8 = 0xac;

pub struct NeoEntry;

/// 单签验证脚本
fn verification_script(key: &[u8]) -> Vec<u8> {
    let mut script = Vec::with_capacity(key.len() + 2);
    script.push(PUSH_BYTES_33);
    script.extend_from_slice(key);
    script.push(CHECK_SIG);
    script
}

impl CoinEntry for NeoEntry {
    /// 数据包含版本字节
    fn address_to_data(&self, _coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let hash = base58::decode_with_prefix(address, &[VERSION], 20, Base58Alphabet::Bitcoin)?;
        let mut data = Vec::with_capacity(1 + hash.len());
        data.push(VERSION);
        data.extend_from_slice(&hash);
        Ok(data)
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let key = public_key.to_type(PublicKeyType::Nist256p1)?;
        let hash = coin.descriptor().hasher.hash(&verification_script(key.bytes()));
        Ok(base58::encode_with_prefix(&[VERSION], &hash, Base58Alphabet::Bitcoin))
    }
}
