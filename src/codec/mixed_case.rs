//! 大小写混合十六进制校验和
//!
//! EIP-55: keccak256(小写 hex 文本) 的对应半字节 >= 8 时字母大写
//! Zilliqa: sha256(原始字节) 视为 256 位整数，第 i 个字符看第 255 - 6i 位

use crate::codec::hash::{keccak256, sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedCaseChecksum {
    Eip55,
    Zilliqa,
}

impl MixedCaseChecksum {
    /// 生成规范大小写形式；输入为不带 0x 的十六进制
    pub fn checksum(self, hex_body: &str) -> Option<String> {
        let lower = hex_body.to_ascii_lowercase();
        let raw = hex::decode(&lower).ok()?;

        let uppercase_at: Vec<bool> = match self {
            MixedCaseChecksum::Eip55 => {
                let hash = keccak256(lower.as_bytes());
                (0..lower.len())
                    .map(|i| {
                        let byte = hash[(i / 2) % 32];
                        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
                        nibble >= 8
                    })
                    .collect()
            }
            MixedCaseChecksum::Zilliqa => {
                let hash = sha256(&raw);
                (0..lower.len())
                    .map(|i| match 255usize.checked_sub(6 * i) {
                        Some(bit) => (hash[31 - bit / 8] >> (bit % 8)) & 1 == 1,
                        None => false,
                    })
                    .collect()
            }
        };

        Some(
            lower
                .chars()
                .zip(uppercase_at)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect(),
        )
    }

    /// 全小写或全大写直接通过，混合大小写必须与校验形式完全一致
    pub fn verify(self, hex_body: &str) -> bool {
        if !hex_body.chars().all(|c| c.is_ascii_hexdigit()) {
            return false;
        }
        let has_lower = hex_body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_body.chars().any(|c| c.is_ascii_uppercase());
        if !(has_lower && has_upper) {
            return hex_body.len() % 2 == 0;
        }
        self.checksum(hex_body).as_deref() == Some(hex_body)
    }
}
