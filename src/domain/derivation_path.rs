//! BIP-32 派生路径
//!
//! 形如 `m/44'/60'/0'/0/0`，分量依次为 purpose / coin / account / change / address_index

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DerivationPathError;

const HARDENED_BIT: u32 = 0x8000_0000;

/// 路径分量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivationIndex {
    pub value: u32,
    pub hardened: bool,
}

impl DerivationIndex {
    pub fn hardened(value: u32) -> Self {
        Self {
            value,
            hardened: true,
        }
    }

    pub fn normal(value: u32) -> Self {
        Self {
            value,
            hardened: false,
        }
    }

    /// BIP-32 子索引（硬化分量带最高位）
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.value | HARDENED_BIT
        } else {
            self.value
        }
    }
}

impl fmt::Display for DerivationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// 已解析的派生路径
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<DerivationIndex>,
}

impl DerivationPath {
    pub fn new(indices: Vec<DerivationIndex>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[DerivationIndex] {
        &self.indices
    }

    pub fn purpose(&self) -> Option<u32> {
        self.indices.first().map(|i| i.value)
    }

    pub fn coin(&self) -> Option<u32> {
        self.indices.get(1).map(|i| i.value)
    }

    pub fn account(&self) -> Option<u32> {
        self.indices.get(2).map(|i| i.value)
    }

    pub fn change(&self) -> Option<u32> {
        self.indices.get(3).map(|i| i.value)
    }

    pub fn address_index(&self) -> Option<u32> {
        self.indices.get(4).map(|i| i.value)
    }

    /// 以本路径为模板替换 account / change / address_index，保留各分量的硬化标记
    pub fn with_indices(&self, account: u32, change: u32, index: u32) -> Self {
        let mut indices = self.indices.clone();
        for (pos, value) in [(2, account), (3, change), (4, index)] {
            if let Some(slot) = indices.get_mut(pos) {
                slot.value = value;
            }
        }
        Self { indices }
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DerivationPathError::Empty);
        }

        let mut parts = trimmed.split('/');
        if parts.next() != Some("m") {
            return Err(DerivationPathError::MissingRoot);
        }

        let indices = parts
            .map(|part| {
                let hardened_suffix = |c: char| c == '\'' || c == 'h' || c == 'H';
                let (digits, hardened) = match part.strip_suffix(hardened_suffix) {
                    Some(d) => (d, true),
                    None => (part, false),
                };
                let value: u32 = digits
                    .parse()
                    .map_err(|_| DerivationPathError::InvalidComponent(part.to_string()))?;
                if value >= HARDENED_BIT {
                    return Err(DerivationPathError::IndexOutOfRange(part.to_string()));
                }
                Ok(DerivationIndex { value, hardened })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if indices.is_empty() {
            return Err(DerivationPathError::Empty);
        }
        Ok(Self { indices })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bip44() {
        let path: DerivationPath = "m/44'/60'/0'/0/7".parse().unwrap();
        assert_eq!(path.purpose(), Some(44));
        assert_eq!(path.coin(), Some(60));
        assert_eq!(path.account(), Some(0));
        assert_eq!(path.change(), Some(0));
        assert_eq!(path.address_index(), Some(7));
        assert_eq!(path.indices()[0].raw(), 0x8000_002c);
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/7");
    }

    #[test]
    fn test_h_suffix_normalized() {
        let path: DerivationPath = "m/44h/501h/0h/0h".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/501'/0'/0'");
        assert_eq!(path.address_index(), None);
    }

    #[test]
    fn test_with_indices_keeps_hardening() {
        let template: DerivationPath = "m/44'/354'/0'/0'/0'".parse().unwrap();
        assert_eq!(
            template.with_indices(1, 0, 5).to_string(),
            "m/44'/354'/1'/0'/5'"
        );
    }

    #[test]
    fn test_invalid_paths() {
        assert_eq!("".parse::<DerivationPath>(), Err(DerivationPathError::Empty));
        assert_eq!(
            "44'/60'".parse::<DerivationPath>(),
            Err(DerivationPathError::MissingRoot)
        );
        assert!(matches!(
            "m/44'/abc".parse::<DerivationPath>(),
            Err(DerivationPathError::InvalidComponent(_))
        ));
        assert!(matches!(
            "m/2147483648".parse::<DerivationPath>(),
            Err(DerivationPathError::IndexOutOfRange(_))
        ));
        assert_eq!("m".parse::<DerivationPath>(), Err(DerivationPathError::Empty));
    }

    #[test]
    fn test_serde() {
        let path: DerivationPath = "m/84'/0'/0'/0/0".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"m/84'/0'/0'/0/0\"");
        assert_eq!(serde_json::from_str::<DerivationPath>(&json).unwrap(), path);
    }
}
