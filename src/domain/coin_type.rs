//! 币种标识
//!
//! 取值沿用 SLIP-44（EVM 侧链使用 10000000 + chain_id 约定），一经发布不再复用

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::coin_descriptor::{descriptor_for, CoinDescriptor};
use crate::utils::chain_normalizer;

/// 支持的币种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum CoinType {
    Bitcoin = 0,
    Litecoin = 2,
    Dogecoin = 3,
    Dash = 5,
    Decred = 42,
    Ethereum = 60,
    #[serde(rename = "classic")]
    EthereumClassic = 61,
    Cosmos = 118,
    Zcash = 133,
    Ripple = 144,
    BitcoinCash = 145,
    Stellar = 148,
    Nano = 165,
    Tron = 195,
    Zilliqa = 313,
    Polkadot = 354,
    Kusama = 434,
    Solana = 501,
    #[serde(rename = "elrond")]
    MultiversX = 508,
    Binance = 714,
    Neo = 888,
    ECash = 899,
    Polygon = 966,
    Cardano = 1815,
    Kin = 2017,
    Optimism = 10000070,
    Ronin = 10002020,
    #[serde(rename = "avalanchec")]
    AvalancheCChain = 10009000,
    Arbitrum = 10042221,
    SmartChain = 20000714,
}

impl CoinType {
    /// 全部已注册币种（按数值升序）
    pub const ALL: [CoinType; 30] = [
        CoinType::Bitcoin,
        CoinType::Litecoin,
        CoinType::Dogecoin,
        CoinType::Dash,
        CoinType::Decred,
        CoinType::Ethereum,
        CoinType::EthereumClassic,
        CoinType::Cosmos,
        CoinType::Zcash,
        CoinType::Ripple,
        CoinType::BitcoinCash,
        CoinType::Stellar,
        CoinType::Nano,
        CoinType::Tron,
        CoinType::Zilliqa,
        CoinType::Polkadot,
        CoinType::Kusama,
        CoinType::Solana,
        CoinType::MultiversX,
        CoinType::Binance,
        CoinType::Neo,
        CoinType::ECash,
        CoinType::Polygon,
        CoinType::Cardano,
        CoinType::Kin,
        CoinType::Optimism,
        CoinType::Ronin,
        CoinType::AvalancheCChain,
        CoinType::Arbitrum,
        CoinType::SmartChain,
    ];

    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn from_u32(value: u32) -> Option<CoinType> {
        CoinType::ALL.iter().copied().find(|c| c.value() == value)
    }

    /// 静态链参数
    pub fn descriptor(self) -> &'static CoinDescriptor {
        descriptor_for(self)
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

impl FromStr for CoinType {
    type Err = anyhow::Error;

    /// 接受 id、符号、名称、别名或数值（大小写不敏感）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chain_normalizer::resolve_coin(s)
    }
}
