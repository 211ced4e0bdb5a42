//! Base58 / Base58Check 编解码
//!
//! Base58Check = Base58(version ‖ payload ‖ checksum(version ‖ payload)[..4])
//!
//! 校验和默认为 sha256d，Decred 使用双 BLAKE-256

use crate::codec::hash::Hasher;
use crate::error::AddressError;

const CHECKSUM_LEN: usize = 4;

/// Base58 字母表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Alphabet {
    Bitcoin,
    Ripple,
}

impl Base58Alphabet {
    fn table(self) -> &'static bs58::Alphabet {
        match self {
            Base58Alphabet::Bitcoin => bs58::Alphabet::BITCOIN,
            Base58Alphabet::Ripple => bs58::Alphabet::RIPPLE,
        }
    }
}

pub fn encode(data: &[u8], alphabet: Base58Alphabet) -> String {
    bs58::encode(data).with_alphabet(alphabet.table()).into_string()
}

pub fn decode(s: &str, alphabet: Base58Alphabet) -> Result<Vec<u8>, AddressError> {
    if s.is_empty() {
        return Err(AddressError::format("empty base58 string"));
    }
    bs58::decode(s)
        .with_alphabet(alphabet.table())
        .into_vec()
        .map_err(|e| AddressError::format(format!("base58: {}", e)))
}

pub fn encode_check(payload: &[u8], alphabet: Base58Alphabet) -> String {
    encode_check_with(payload, alphabet, Hasher::Sha256d)
}

pub fn encode_check_with(payload: &[u8], alphabet: Base58Alphabet, checksum: Hasher) -> String {
    let checksum = checksum.hash(payload);
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&buf, alphabet)
}

/// 解码并校验 4 字节校验和，返回去掉校验和后的数据（含版本字节）
pub fn decode_check(s: &str, alphabet: Base58Alphabet) -> Result<Vec<u8>, AddressError> {
    decode_check_with(s, alphabet, Hasher::Sha256d)
}

pub fn decode_check_with(
    s: &str,
    alphabet: Base58Alphabet,
    checksum: Hasher,
) -> Result<Vec<u8>, AddressError> {
    let mut decoded = decode(s, alphabet)?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(AddressError::format("base58check payload too short"));
    }

    let split = decoded.len() - CHECKSUM_LEN;
    let expected = checksum.hash(&decoded[..split]);
    if decoded[split..] != expected[..CHECKSUM_LEN] {
        return Err(AddressError::InvalidChecksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}

pub fn encode_with_prefix(prefix: &[u8], payload: &[u8], alphabet: Base58Alphabet) -> String {
    let mut buf = Vec::with_capacity(prefix.len() + payload.len());
    buf.extend_from_slice(prefix);
    buf.extend_from_slice(payload);
    encode_check(&buf, alphabet)
}

/// 解码 Base58Check 并校验版本前缀与负载长度，返回去掉前缀的负载
pub fn decode_with_prefix(
    s: &str,
    prefix: &[u8],
    payload_len: usize,
    alphabet: Base58Alphabet,
) -> Result<Vec<u8>, AddressError> {
    let decoded = decode_check(s, alphabet)?;
    if decoded.len() != prefix.len() + payload_len {
        return Err(AddressError::InvalidLength {
            expected: prefix.len() + payload_len,
            found: decoded.len(),
        });
    }
    if !decoded.starts_with(prefix) {
        return Err(AddressError::WrongNetwork(format!(
            "version {} does not match {}",
            hex::encode(&decoded[..prefix.len()]),
            hex::encode(prefix)
        )));
    }
    Ok(decoded[prefix.len()..].to_vec())
}
