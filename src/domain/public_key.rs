//! 公钥
//!
//! 构造时校验长度、前缀与曲线点；同曲线的压缩/非压缩形式可互相转换

use std::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Serialize};

use crate::domain::coin_descriptor::CurveType;
use crate::error::KeyError;

/// 公钥类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicKeyType {
    /// 33 字节压缩 secp256k1
    Secp256k1,
    /// 65 字节非压缩 secp256k1
    Secp256k1Extended,
    /// 33 字节压缩 NIST P-256
    Nist256p1,
    /// 65 字节非压缩 NIST P-256
    Nist256p1Extended,
    /// 32 字节 ed25519
    Ed25519,
    /// 32 字节 ed25519（Blake2b 变体，Nano）
    Ed25519Blake2b,
    /// 128 字节 Cardano 扩展公钥：支付公钥 ‖ 链码 ‖ 质押公钥 ‖ 链码
    Ed25519Cardano,
}

impl PublicKeyType {
    pub fn len(self) -> usize {
        match self {
            PublicKeyType::Secp256k1 | PublicKeyType::Nist256p1 => 33,
            PublicKeyType::Secp256k1Extended | PublicKeyType::Nist256p1Extended => 65,
            PublicKeyType::Ed25519 | PublicKeyType::Ed25519Blake2b => 32,
            PublicKeyType::Ed25519Cardano => 128,
        }
    }

    pub fn curve(self) -> CurveType {
        match self {
            PublicKeyType::Secp256k1 | PublicKeyType::Secp256k1Extended => CurveType::Secp256k1,
            PublicKeyType::Nist256p1 | PublicKeyType::Nist256p1Extended => CurveType::Nist256p1,
            PublicKeyType::Ed25519 => CurveType::Ed25519,
            PublicKeyType::Ed25519Blake2b => CurveType::Ed25519Blake2bNano,
            PublicKeyType::Ed25519Cardano => CurveType::Ed25519ExtendedCardano,
        }
    }
}

/// 经过校验的公钥
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: Vec<u8>,
    key_type: PublicKeyType,
}

impl PublicKey {
    pub fn new(bytes: &[u8], key_type: PublicKeyType) -> Result<Self, KeyError> {
        if bytes.len() != key_type.len() {
            return Err(KeyError::InvalidLength {
                key_type,
                expected: key_type.len(),
                found: bytes.len(),
            });
        }

        let valid = match key_type {
            PublicKeyType::Secp256k1 => {
                matches!(bytes[0], 0x02 | 0x03) && k256::PublicKey::from_sec1_bytes(bytes).is_ok()
            }
            PublicKeyType::Secp256k1Extended => {
                bytes[0] == 0x04 && k256::PublicKey::from_sec1_bytes(bytes).is_ok()
            }
            PublicKeyType::Nist256p1 => matches!(bytes[0], 0x02 | 0x03),
            PublicKeyType::Nist256p1Extended => bytes[0] == 0x04,
            PublicKeyType::Ed25519 | PublicKeyType::Ed25519Blake2b => is_ed25519_point(bytes),
            PublicKeyType::Ed25519Cardano => {
                is_ed25519_point(&bytes[..32]) && is_ed25519_point(&bytes[64..96])
            }
        };
        if !valid {
            return Err(KeyError::InvalidPoint(key_type));
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            key_type,
        })
    }

    pub fn from_hex(hex_str: &str, key_type: PublicKeyType) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim_start_matches("0x"))
            .map_err(|_| KeyError::InvalidEncoding(key_type))?;
        Self::new(&bytes, key_type)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn key_type(&self) -> PublicKeyType {
        self.key_type
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// 转换为同曲线的目标类型
    pub fn to_type(&self, target: PublicKeyType) -> Result<PublicKey, KeyError> {
        use PublicKeyType::*;

        if target == self.key_type {
            return Ok(self.clone());
        }

        let unsupported = KeyError::UnsupportedConversion {
            from: self.key_type,
            to: target,
        };

        match (self.key_type, target) {
            (Secp256k1, Secp256k1Extended) | (Secp256k1Extended, Secp256k1) => {
                let point = k256::PublicKey::from_sec1_bytes(&self.bytes)
                    .map_err(|_| KeyError::InvalidPoint(self.key_type))?;
                let encoded = point.to_encoded_point(target == Secp256k1);
                Self::new(encoded.as_bytes(), target)
            }
            (Nist256p1Extended, Nist256p1) => {
                let parity = self.bytes[64] & 1;
                let mut compressed = Vec::with_capacity(33);
                compressed.push(0x02 | parity);
                compressed.extend_from_slice(&self.bytes[1..33]);
                Self::new(&compressed, target)
            }
            // ed25519 与 blake2b 变体共用同一曲线点
            (Ed25519, Ed25519Blake2b) | (Ed25519Blake2b, Ed25519) => Self::new(&self.bytes, target),
            _ => Err(unsupported),
        }
    }
}

fn is_ed25519_point(bytes: &[u8]) -> bool {
    let Ok(arr) = <[u8; 32]>::try_from(bytes) else {
        return false;
    };
    ed25519_dalek::VerifyingKey::from_bytes(&arr).is_ok()
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("key_type", &self.key_type)
            .field("bytes", &self.to_hex())
            .finish()
    }
}
