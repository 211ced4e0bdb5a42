//! 链适配器
//!
//! 每个区块链族一个 `CoinEntry` 实现；本模块的分发函数是所有地址与签名操作的唯一入口

pub mod bitcoin;
pub mod bitcoin_cash;
pub mod cardano;
pub mod cosmos;
pub mod decred;
pub mod ethereum;
pub mod multiversx;
pub mod nano;
pub mod neo;
pub mod polkadot;
pub mod registry;
pub mod ripple;
pub mod ronin;
pub mod signer;
pub mod solana;
pub mod stellar;
pub mod tron;
pub mod zilliqa;

pub use registry::resolve;
pub use signer::{TransactionSigner, UnconfiguredSigner};

use crate::domain::{CoinType, PublicKey};
use crate::error::{AddressError, CoinError};

/// 链适配器 trait
///
/// 实现必须无状态；`address_to_data` 同时承担完整校验，其余默认实现都建立在它之上
pub trait CoinEntry: Send + Sync {
    /// 解码并校验地址，返回去掉前缀/校验和后的规范数据
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError>;

    fn validate_address(&self, coin: CoinType, address: &str) -> bool {
        self.address_to_data(coin, address).is_ok()
    }

    /// 规范化已校验的地址，必须幂等
    fn normalize_address(&self, _coin: CoinType, address: &str) -> String {
        address.to_string()
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError>;

    fn sign(
        &self,
        coin: CoinType,
        input: &[u8],
        signer: &dyn TransactionSigner,
    ) -> Result<Vec<u8>, CoinError> {
        signer.sign(coin, input).map_err(CoinError::Signing)
    }

    fn supports_json_signing(&self) -> bool {
        false
    }

    fn sign_json(
        &self,
        coin: CoinType,
        _json: &str,
        _private_key: &[u8],
        _signer: &dyn TransactionSigner,
    ) -> Result<String, CoinError> {
        Err(CoinError::UnsupportedOperation {
            coin,
            operation: "sign_json",
        })
    }
}

/// 支持 JSON 签名的适配器共用：直接转交签名器
pub(crate) fn forward_sign_json(
    coin: CoinType,
    json: &str,
    private_key: &[u8],
    signer: &dyn TransactionSigner,
) -> Result<String, CoinError> {
    signer
        .sign_json(coin, json, private_key)
        .map_err(CoinError::Signing)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 分发函数
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn validate_address(coin: CoinType, address: &str) -> bool {
    let valid = resolve(coin).validate_address(coin, address);
    if !valid {
        tracing::debug!(coin = %coin, "address rejected");
    }
    valid
}

/// 地址无效时返回 None
pub fn normalize_address(coin: CoinType, address: &str) -> Option<String> {
    let entry = resolve(coin);
    if !entry.validate_address(coin, address) {
        return None;
    }
    Some(entry.normalize_address(coin, address))
}

/// 校验并规范化，失败时给出具体原因
pub fn parse_address(coin: CoinType, address: &str) -> Result<String, AddressError> {
    let entry = resolve(coin);
    if let Err(e) = entry.address_to_data(coin, address) {
        tracing::debug!(coin = %coin, error = %e, "address rejected");
        return Err(e);
    }
    Ok(entry.normalize_address(coin, address))
}

pub fn address_to_data(coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
    resolve(coin).address_to_data(coin, address)
}

/// 派生地址；公钥曲线必须与币种一致，同曲线的压缩/非压缩形式由适配器自行转换
pub fn derive_address(coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
    let descriptor = coin.descriptor();
    let actual = public_key.key_type();
    if actual.curve() != descriptor.curve {
        tracing::debug!(coin = %coin, key_type = ?actual, "public key curve mismatch");
        return Err(CoinError::KeyTypeMismatch {
            coin,
            expected: descriptor.public_key_type,
            actual,
        });
    }
    resolve(coin).derive_address(coin, public_key)
}

pub fn sign(
    coin: CoinType,
    input: &[u8],
    signer: &dyn TransactionSigner,
) -> Result<Vec<u8>, CoinError> {
    resolve(coin).sign(coin, input, signer).map_err(|e| {
        tracing::warn!(coin = %coin, error = %e, "signing failed");
        e
    })
}

pub fn supports_json_signing(coin: CoinType) -> bool {
    resolve(coin).supports_json_signing()
}

pub fn sign_json(
    coin: CoinType,
    json: &str,
    private_key: &[u8],
    signer: &dyn TransactionSigner,
) -> Result<String, CoinError> {
    resolve(coin)
        .sign_json(coin, json, private_key, signer)
        .map_err(|e| {
            tracing::warn!(coin = %coin, error = %e, "json signing failed");
            e
        })
}
