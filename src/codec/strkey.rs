//! Stellar StrKey
//!
//! base32(version ‖ key ‖ crc16_xmodem(version ‖ key) 小端)，RFC 4648 字母表，无填充

use base32::Alphabet;

use crate::error::AddressError;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };
const KEY_LEN: usize = 32;
const RAW_LEN: usize = 1 + KEY_LEN + 2;
const ENCODED_LEN: usize = 56;

/// 账户公钥版本字节（编码后以 G 开头）
pub const ACCOUNT_ID: u8 = 6 << 3;

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

pub fn encode(version: u8, key: &[u8; KEY_LEN]) -> String {
    let mut raw = Vec::with_capacity(RAW_LEN);
    raw.push(version);
    raw.extend_from_slice(key);
    let crc = crc16_xmodem(&raw);
    raw.extend_from_slice(&crc.to_le_bytes());

    // 35 字节 = 280 位，恰好 56 个字符
    base32::encode(ALPHABET, &raw)
}

pub fn decode(s: &str, version: u8) -> Result<[u8; KEY_LEN], AddressError> {
    if s.len() != ENCODED_LEN {
        return Err(AddressError::format(format!(
            "strkey must be {} characters, got {}",
            ENCODED_LEN,
            s.len()
        )));
    }
    // base32 解码不区分大小写，StrKey 只允许大写
    if let Some(c) = s.chars().find(|c| !matches!(c, 'A'..='Z' | '2'..='7')) {
        return Err(AddressError::format(format!("invalid strkey character {:?}", c)));
    }

    let raw = base32::decode(ALPHABET, s)
        .ok_or_else(|| AddressError::format("strkey is not valid base32"))?;
    if raw.len() != RAW_LEN {
        return Err(AddressError::InvalidLength {
            expected: RAW_LEN,
            found: raw.len(),
        });
    }

    if raw[0] != version {
        return Err(AddressError::format(format!(
            "strkey version {:#04x} is not {:#04x}",
            raw[0], version
        )));
    }

    let body = &raw[..1 + KEY_LEN];
    let crc = u16::from_le_bytes([raw[1 + KEY_LEN], raw[2 + KEY_LEN]]);
    if crc != crc16_xmodem(body) {
        return Err(AddressError::InvalidChecksum);
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&body[1..]);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id() {
        let key: [u8; 32] =
            hex::decode("3f0c34bf93ad0d9971d04ccc90f705511c838aad9734a4a2fb0d7a03fc7fe89a")
                .unwrap()
                .try_into()
                .unwrap();
        let encoded = encode(ACCOUNT_ID, &key);
        assert_eq!(
            encoded,
            "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ"
        );
        assert_eq!(decode(&encoded, ACCOUNT_ID).unwrap(), key);
    }

    #[test]
    fn test_checksum_and_version() {
        assert_eq!(
            decode(
                "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGA",
                ACCOUNT_ID
            ),
            Err(AddressError::InvalidChecksum)
        );
        // 私钥种子版本 (S...) 不是账户地址
        let key = [7u8; 32];
        let seed = encode(18 << 3, &key);
        assert!(matches!(
            decode(&seed, ACCOUNT_ID),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(matches!(
            decode(
                "ga7qynf7sowq3glr2bgmzehxavirza4kvwltjjfc7mgxua74p7ujvsgz",
                ACCOUNT_ID
            ),
            Err(AddressError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_characters() {
        // 0/1/8/9 不在 RFC 4648 字母表中
        let err = decode(
            "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSG1",
            ACCOUNT_ID,
        )
        .unwrap_err();
        assert!(matches!(err, AddressError::InvalidFormat(_)));
    }
}
