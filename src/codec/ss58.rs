//! SS58 编解码 (Polkadot / Kusama / Substrate)
//!
//! base58(prefix ‖ pubkey ‖ blake2b512("SS58PRE" ‖ prefix ‖ pubkey)[..2])

use crate::codec::base58::{self, Base58Alphabet};
use crate::codec::hash::blake2b_512;
use crate::error::AddressError;

const PREFIX_SALT: &[u8] = b"SS58PRE";
const KEY_LEN: usize = 32;
const CHECKSUM_LEN: usize = 2;

/// 网络前缀最大值（14 位）
pub const MAX_PREFIX: u16 = 16383;

fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut preimage = Vec::with_capacity(PREFIX_SALT.len() + body.len());
    preimage.extend_from_slice(PREFIX_SALT);
    preimage.extend_from_slice(body);
    let hash = blake2b_512(&preimage);
    [hash[0], hash[1]]
}

fn encode_prefix(prefix: u16) -> Vec<u8> {
    let ident = prefix & MAX_PREFIX;
    if ident < 64 {
        vec![ident as u8]
    } else {
        let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
        let second = ((ident >> 8) as u8) | (((ident & 0b0000_0000_0000_0011) as u8) << 6);
        vec![first | 0b0100_0000, second]
    }
}

pub fn encode(prefix: u16, key: &[u8; KEY_LEN]) -> String {
    let mut body = encode_prefix(prefix);
    body.extend_from_slice(key);
    let sum = checksum(&body);
    body.extend_from_slice(&sum);
    base58::encode(&body, Base58Alphabet::Bitcoin)
}

/// 解码 SS58 地址，前缀不等于 `expected_prefix` 时返回 WrongNetwork
pub fn decode(s: &str, expected_prefix: u16) -> Result<[u8; KEY_LEN], AddressError> {
    let data = base58::decode(s, Base58Alphabet::Bitcoin)?;

    let (prefix_len, ident) = match data.first() {
        Some(&b0) if b0 < 64 => (1, u16::from(b0)),
        Some(&b0) if b0 < 128 => {
            let b1 = *data
                .get(1)
                .ok_or_else(|| AddressError::format("ss58 prefix truncated"))?;
            let lower = (b0 << 2) | (b1 >> 6);
            let upper = b1 & 0b0011_1111;
            (2, u16::from(lower) | (u16::from(upper) << 8))
        }
        Some(_) => return Err(AddressError::format("reserved ss58 prefix")),
        None => return Err(AddressError::format("empty ss58 payload")),
    };

    let expected_len = prefix_len + KEY_LEN + CHECKSUM_LEN;
    if data.len() != expected_len {
        return Err(AddressError::InvalidLength {
            expected: expected_len,
            found: data.len(),
        });
    }

    let body_len = prefix_len + KEY_LEN;
    if data[body_len..] != checksum(&data[..body_len]) {
        return Err(AddressError::InvalidChecksum);
    }

    if ident != expected_prefix {
        return Err(AddressError::WrongNetwork(format!(
            "ss58 prefix {} does not match {}",
            ident, expected_prefix
        )));
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&data[prefix_len..body_len]);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLKADOT_ADDR: &str = "16fir1SPRAaWGtF4ZkKNDq3S6LnD9mbphGXqL923DoH85Exz";
    const KEY: &str = "fab55af5eaaa1a284b615946dc3dd403c44ce3448c15884d61b2dcba3ddb245a";

    fn key() -> [u8; 32] {
        let mut k = [0u8; 32];
        k.copy_from_slice(&hex::decode(KEY).unwrap());
        k
    }

    #[test]
    fn test_decode_polkadot() {
        assert_eq!(hex::encode(decode(POLKADOT_ADDR, 0).unwrap()), KEY);
    }

    #[test]
    fn test_encode_kusama() {
        let addr = encode(2, &key());
        assert_eq!(addr, "JF3MzXCBkKxb13zNp5QydaHPK4oG8rs59e6ZWJe9WU6dksg");
        assert_eq!(decode(&addr, 2).unwrap(), key());
    }

    #[test]
    fn test_wrong_network() {
        assert!(matches!(
            decode(POLKADOT_ADDR, 2),
            Err(AddressError::WrongNetwork(_))
        ));
    }

    #[test]
    fn test_two_byte_prefix() {
        let addr = encode(1284, &key());
        assert_eq!(decode(&addr, 1284).unwrap(), key());
        assert!(matches!(decode(&addr, 0), Err(AddressError::WrongNetwork(_))));
    }

    #[test]
    fn test_corrupted_checksum() {
        let mut raw = base58::decode(POLKADOT_ADDR, Base58Alphabet::Bitcoin).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let corrupted = base58::encode(&raw, Base58Alphabet::Bitcoin);
        assert_eq!(decode(&corrupted, 0), Err(AddressError::InvalidChecksum));
    }
}
