//! 钱包账户
//!
//! 一个币种在某条派生路径上的地址与扩展公钥，构造时地址会按该币种校验并规范化

use serde::{Deserialize, Serialize};

use crate::coin;
use crate::domain::coin_type::CoinType;
use crate::domain::derivation_path::DerivationPath;
use crate::error::CoinError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    address: String,
    coin: CoinType,
    derivation_path: DerivationPath,
    /// xpub / zpub 等，ed25519 链为空字符串
    extended_public_key: String,
}

impl Account {
    pub fn new(
        address: &str,
        coin: CoinType,
        derivation_path: &str,
        extended_public_key: impl Into<String>,
    ) -> Result<Self, CoinError> {
        let address = coin::parse_address(coin, address)?;
        let derivation_path: DerivationPath = derivation_path.parse()?;

        Ok(Self {
            address,
            coin,
            derivation_path,
            extended_public_key: extended_public_key.into(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coin(&self) -> CoinType {
        self.coin
    }

    pub fn derivation_path(&self) -> &DerivationPath {
        &self.derivation_path
    }

    pub fn extended_public_key(&self) -> &str {
        &self.extended_public_key
    }
}
