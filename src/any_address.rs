//! 链无关地址
//!
//! 构造即校验：持有规范化后的地址字符串，并在构造时一次性计算地址数据

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::coin;
use crate::domain::{CoinType, PublicKey};
use crate::error::CoinError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyAddress {
    address: String,
    coin: CoinType,
    data: Vec<u8>,
}

impl AnyAddress {
    /// 解析地址字符串；无效时返回 None
    pub fn create_from_string(address: &str, coin: CoinType) -> Option<Self> {
        let normalized = coin::normalize_address(coin, address)?;
        let data = match coin::address_to_data(coin, &normalized) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(coin = %coin, error = %e, "normalized address failed to decode");
                return None;
            }
        };

        Some(Self {
            address: normalized,
            coin,
            data,
        })
    }

    /// 由公钥派生地址
    pub fn create_from_public_key(public_key: &PublicKey, coin: CoinType) -> Result<Self, CoinError> {
        let address = coin::derive_address(coin, public_key)?;
        let data = coin::address_to_data(coin, &address)?;

        Ok(Self {
            address,
            coin,
            data,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coin(&self) -> CoinType {
        self.coin
    }

    /// 去掉前缀与校验和后的地址数据
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for AnyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl Serialize for AnyAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnyAddress", 3)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("coin", &self.coin)?;
        state.serialize_field("data", &hex::encode(&self.data))?;
        state.end()
    }
}
