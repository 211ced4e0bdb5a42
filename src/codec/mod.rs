//! 地址编解码库
//!
//! 无状态、与链无关的编码族实现；链相关参数（前缀、hrp、版本字节）由调用方传入

pub mod base58;
pub mod bech32;
pub mod cashaddr;
pub mod hash;
pub mod mixed_case;
pub mod nano;
pub mod ss58;
pub mod strkey;

pub use hash::Hasher;

use ::bech32::primitives::iter::{ByteIterExt, Fe32IterExt};
use ::bech32::Fe32;

/// 字节 → 5 位组，末尾补零位
pub(crate) fn bytes_to_u5(data: &[u8]) -> Vec<u8> {
    data.iter().copied().bytes_to_fes().map(Fe32::to_u8).collect()
}

/// 5 位组 → 字节
///
/// 剩余位必须少于 5 且全为零，否则返回 None
pub(crate) fn u5_to_bytes(values: &[u8]) -> Option<Vec<u8>> {
    let fes = values
        .iter()
        .map(|&v| Fe32::try_from(v).ok())
        .collect::<Option<Vec<Fe32>>>()?;

    let leftover = values.len() * 5 % 8;
    if leftover >= 5 {
        return None;
    }
    if let Some(&last) = values.last() {
        if last & ((1 << leftover) - 1) != 0 {
            return None;
        }
    }

    Some(fes.into_iter().fes_to_bytes().collect())
}
