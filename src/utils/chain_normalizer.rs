//! 链标识符标准化模块
//!
//! 统一所有链标识符的处理逻辑：id、符号、名称、别名或 SLIP-44 数值都解析到同一个 CoinType

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::{Blockchain, CoinType};

/// 描述表之外的常用别名
const ALIASES: &[(CoinType, &[&str])] = &[
    (CoinType::Bitcoin, &["xbt"]),
    (CoinType::Ethereum, &["mainnet"]),
    (CoinType::EthereumClassic, &["ethereum-classic"]),
    (CoinType::Cosmos, &["cosmoshub"]),
    (CoinType::Polygon, &["matic"]),
    (CoinType::SmartChain, &["bsc", "bep20"]),
    (CoinType::Binance, &["bep2", "bnb-beacon"]),
    (CoinType::AvalancheCChain, &["avalanche"]),
    (CoinType::Arbitrum, &["arb", "arbitrum-one"]),
    (CoinType::Optimism, &["op"]),
    (CoinType::Nano, &["raiblocks"]),
];

/// 小写标识符 → 币种（静态初始化）
///
/// 符号冲突时先注册者优先（BNB → BNB Beacon Chain），显式别名最后覆盖
static COIN_REGISTRY: Lazy<HashMap<String, CoinType>> = Lazy::new(|| {
    let mut registry = HashMap::new();

    for coin in CoinType::ALL {
        let descriptor = coin.descriptor();
        for key in [
            descriptor.id.to_string(),
            descriptor.symbol.to_ascii_lowercase(),
            descriptor.name.to_ascii_lowercase(),
            coin.value().to_string(),
        ] {
            registry.entry(key).or_insert(coin);
        }
    }

    for (coin, aliases) in ALIASES {
        for alias in *aliases {
            registry.insert(alias.to_string(), *coin);
        }
    }

    registry
});

/// 解析链标识符
///
/// # 示例
/// ```rust
/// # use ironcore_wallet_core::utils::chain_normalizer::resolve_coin;
/// # use ironcore_wallet_core::domain::CoinType;
/// assert_eq!(resolve_coin("ETH").unwrap(), CoinType::Ethereum);
/// assert_eq!(resolve_coin("60").unwrap(), CoinType::Ethereum);
/// assert_eq!(resolve_coin("BSC").unwrap(), CoinType::SmartChain);
/// ```
pub fn resolve_coin(input: &str) -> anyhow::Result<CoinType> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Chain identifier cannot be empty");
    }

    COIN_REGISTRY
        .get(&trimmed.to_ascii_lowercase())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Unsupported chain identifier: {}", trimmed))
}

/// 标准化链标识符，返回描述表中的规范 id
pub fn normalize_chain_identifier(input: &str) -> anyhow::Result<&'static str> {
    resolve_coin(input).map(|coin| coin.descriptor().id)
}

/// 判断是否为EVM链
pub fn is_evm_chain(chain: &str) -> bool {
    match resolve_coin(chain) {
        Ok(coin) => matches!(
            coin.descriptor().blockchain,
            Blockchain::Ethereum | Blockchain::Ronin
        ),
        Err(_) => false,
    }
}

/// 获取链符号
pub fn get_chain_symbol(chain: &str) -> anyhow::Result<&'static str> {
    resolve_coin(chain).map(|coin| coin.descriptor().symbol)
}
