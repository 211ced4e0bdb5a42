//! CashAddr 编解码 (Bitcoin Cash / eCash)
//!
//! prefix:payload，payload = base32(version ‖ hash ‖ 40 位 BCH 校验和)

use crate::codec::{bytes_to_u5, u5_to_bytes};
use crate::error::AddressError;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const CHECKSUM_LEN: usize = 8;

/// CashAddr 地址类型（版本字节高位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashAddrType {
    P2pkh,
    P2sh,
}

impl CashAddrType {
    fn bits(self) -> u8 {
        match self {
            CashAddrType::P2pkh => 0,
            CashAddrType::P2sh => 1,
        }
    }
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    const GEN: [u64; 5] = [
        0x98f2bc8e61,
        0x79b76d99e2,
        0xf33e5fb3c4,
        0xae2eabe2a8,
        0x1e4f43e470,
    ];

    let mut c: u64 = 1;
    for d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, g) in GEN.iter().enumerate() {
            if (c0 >> i) & 1 == 1 {
                c ^= g;
            }
        }
    }
    c ^ 1
}

fn expand_prefix(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|b| b & 0x1f).chain(std::iter::once(0))
}

fn size_code(len: usize) -> Option<u8> {
    match len {
        20 => Some(0),
        24 => Some(1),
        28 => Some(2),
        32 => Some(3),
        40 => Some(4),
        48 => Some(5),
        56 => Some(6),
        64 => Some(7),
        _ => None,
    }
}

pub fn encode(prefix: &str, kind: CashAddrType, hash: &[u8]) -> Result<String, AddressError> {
    let size = size_code(hash.len()).ok_or(AddressError::InvalidLength {
        expected: 20,
        found: hash.len(),
    })?;

    let mut raw = Vec::with_capacity(hash.len() + 1);
    raw.push(kind.bits() << 3 | size);
    raw.extend_from_slice(hash);
    let payload = bytes_to_u5(&raw);

    let checksum = polymod(
        expand_prefix(prefix)
            .chain(payload.iter().copied())
            .chain([0u8; CHECKSUM_LEN]),
    );

    let mut out = String::with_capacity(prefix.len() + 1 + payload.len() + CHECKSUM_LEN);
    out.push_str(prefix);
    out.push(':');
    for v in &payload {
        out.push(CHARSET[*v as usize] as char);
    }
    for i in 0..CHECKSUM_LEN {
        let v = (checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f;
        out.push(CHARSET[v as usize] as char);
    }
    Ok(out)
}

/// 解码 CashAddr；前缀可省略，省略时按 `expected_prefix` 计算校验和
pub fn decode(s: &str, expected_prefix: &str) -> Result<(CashAddrType, Vec<u8>), AddressError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::format("cashaddr mixes upper and lower case"));
    }
    let lower = s.to_ascii_lowercase();

    let payload_str = match lower.split_once(':') {
        Some((prefix, rest)) => {
            if prefix != expected_prefix {
                return Err(AddressError::InvalidHrp {
                    expected: expected_prefix.to_string(),
                    found: prefix.to_string(),
                });
            }
            rest
        }
        None => lower.as_str(),
    };

    if payload_str.len() <= CHECKSUM_LEN {
        return Err(AddressError::format("cashaddr payload too short"));
    }

    let values = payload_str
        .bytes()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&x| x == c)
                .map(|p| p as u8)
                .ok_or_else(|| AddressError::format(format!("invalid cashaddr character {:?}", c as char)))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if polymod(expand_prefix(expected_prefix).chain(values.iter().copied())) != 0 {
        return Err(AddressError::InvalidChecksum);
    }

    let data = &values[..values.len() - CHECKSUM_LEN];
    let raw = u5_to_bytes(data)
        .ok_or_else(|| AddressError::format("cashaddr has non-zero padding"))?;

    let (version, hash) = raw
        .split_first()
        .ok_or_else(|| AddressError::format("cashaddr payload is empty"))?;

    let kind = match version >> 3 {
        0 => CashAddrType::P2pkh,
        1 => CashAddrType::P2sh,
        other => return Err(AddressError::format(format!("unknown cashaddr type {}", other))),
    };
    let expected_len = size_code_len(version & 0x07);
    if hash.len() != expected_len {
        return Err(AddressError::InvalidLength {
            expected: expected_len,
            found: hash.len(),
        });
    }

    Ok((kind, hash.to_vec()))
}

fn size_code_len(code: u8) -> usize {
    match code {
        0 => 20,
        1 => 24,
        2 => 28,
        3 => 32,
        4 => 40,
        5 => 48,
        6 => 56,
        _ => 64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_prefix() {
        let (kind, hash) = decode(
            "bitcoincash:qzxf0wl63ahx6jsxu8uuldcw7n5aatwppvnteraqaw",
            "bitcoincash",
        )
        .unwrap();
        assert_eq!(kind, CashAddrType::P2pkh);
        assert_eq!(hex::encode(hash), "8c97bbfa8f6e6d4a06e1f9cfb70ef4e9deadc10b");
    }

    #[test]
    fn test_decode_without_prefix_and_uppercase() {
        let (_, hash) = decode(
            "QZXF0WL63AHX6JSXU8UULDCW7N5AATWPPVNTERAQAW",
            "bitcoincash",
        )
        .unwrap();
        assert_eq!(hex::encode(hash), "8c97bbfa8f6e6d4a06e1f9cfb70ef4e9deadc10b");
    }

    #[test]
    fn test_encode_ecash() {
        let hash = hex::decode("8c97bbfa8f6e6d4a06e1f9cfb70ef4e9deadc10b").unwrap();
        assert_eq!(
            encode("ecash", CashAddrType::P2pkh, &hash).unwrap(),
            "ecash:qzxf0wl63ahx6jsxu8uuldcw7n5aatwppv2xdgx6me"
        );
    }

    #[test]
    fn test_prefix_is_part_of_checksum() {
        // 同一负载配上错误前缀校验和失败
        assert_eq!(
            decode("qzxf0wl63ahx6jsxu8uuldcw7n5aatwppvnteraqaw", "ecash"),
            Err(AddressError::InvalidChecksum)
        );
        assert!(matches!(
            decode("ecash:qzxf0wl63ahx6jsxu8uuldcw7n5aatwppv2xdgx6me", "bitcoincash"),
            Err(AddressError::InvalidHrp { .. })
        ));
    }
}
