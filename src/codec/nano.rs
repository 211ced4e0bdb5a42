//! Nano 地址编解码
//!
//! nano_ + 52 字符公钥（前补 4 个零位）+ 8 字符 blake2b-40 校验和（字节逆序）

use crate::codec::{bytes_to_u5, u5_to_bytes};
use crate::codec::hash::blake2b_40;
use crate::error::AddressError;

const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";
const KEY_CHARS: usize = 52;
const CHECKSUM_CHARS: usize = 8;

pub const PREFIX: &str = "nano_";
pub const LEGACY_PREFIX: &str = "xrb_";

fn checksum(key: &[u8; 32]) -> [u8; 5] {
    let mut sum = blake2b_40(key);
    sum.reverse();
    sum
}

fn to_char(v: u8) -> char {
    ALPHABET[(v & 0x1f) as usize] as char
}

pub fn encode(key: &[u8; 32]) -> String {
    let mut out = String::with_capacity(PREFIX.len() + KEY_CHARS + CHECKSUM_CHARS);
    out.push_str(PREFIX);

    // 4 个前导零位 + 256 位公钥 = 260 位
    let mut acc: u32 = 0;
    let mut bits: u32 = 4;
    for &byte in key {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(to_char((acc >> bits) as u8));
        }
        acc &= (1 << bits) - 1;
    }

    for v in bytes_to_u5(&checksum(key)) {
        out.push(to_char(v));
    }
    out
}

/// 解码 `nano_` 或 `xrb_` 前缀地址，返回 32 字节公钥
pub fn decode(s: &str) -> Result<[u8; 32], AddressError> {
    let body = s
        .strip_prefix(PREFIX)
        .or_else(|| s.strip_prefix(LEGACY_PREFIX))
        .ok_or_else(|| AddressError::format("nano address must start with nano_ or xrb_"))?;

    if body.len() != KEY_CHARS + CHECKSUM_CHARS {
        return Err(AddressError::format(format!(
            "nano address body must be {} characters",
            KEY_CHARS + CHECKSUM_CHARS
        )));
    }

    let values = body
        .bytes()
        .map(|c| {
            ALPHABET
                .iter()
                .position(|&x| x == c)
                .map(|p| p as u8)
                .ok_or_else(|| AddressError::format(format!("invalid nano character {:?}", c as char)))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let (key_part, checksum_part) = values.split_at(KEY_CHARS);
    if key_part[0] > 1 {
        return Err(AddressError::format("nano key overflows 256 bits"));
    }

    let mut key = [0u8; 32];
    let mut acc: u32 = u32::from(key_part[0]);
    let mut bits: u32 = 1;
    let mut pos = 0;
    for &v in &key_part[1..] {
        acc = (acc << 5) | u32::from(v);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            key[pos] = (acc >> bits) as u8;
            pos += 1;
            acc &= (1 << bits) - 1;
        }
    }

    let sum = u5_to_bytes(checksum_part)
        .ok_or_else(|| AddressError::format("nano checksum padding"))?;
    if sum[..] != checksum(&key) {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(key)
}
