//! 币种描述表
//!
//! 每个币种一份只读的静态参数：曲线、地址格式、版本字节、hrp、派生路径等

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codec::Hasher;
use crate::domain::coin_type::CoinType;
use crate::domain::derivation_path::DerivationPath;
use crate::domain::public_key::PublicKeyType;

/// 加密曲线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 曲线 (Bitcoin 系列, Ethereum 系列, Tron, Cosmos ...)
    Secp256k1,
    /// ed25519 曲线 (Solana, Stellar, Polkadot, MultiversX)
    Ed25519,
    /// ed25519 + Blake2b (Nano)
    Ed25519Blake2bNano,
    /// Cardano 扩展 ed25519
    Ed25519ExtendedCardano,
    /// NIST P-256 (NEO)
    Nist256p1,
}

/// 地址编码格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// 十六进制 0x...，EIP-55 校验
    Hex,
    /// Base58Check + 版本字节
    Base58Check,
    /// 纯 Base58 (Solana)
    Base58,
    /// Bech32 (Cosmos, Zilliqa, Cardano, MultiversX)
    Bech32,
    /// segwit 见证程序，同时兼容 Base58Check 旧地址
    Segwit,
    /// CashAddr (Bitcoin Cash)
    CashAddr,
    /// SS58 (Polkadot/Substrate)
    SS58,
    /// Stellar StrKey
    StrKey,
    /// Nano base32
    Nano,
}

/// HD 派生标准
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivationStandard {
    /// BIP44: m/44'/coin_type'/account'/change/index
    BIP44,
    /// BIP84: m/84'/coin_type'/account'/change/index (native segwit)
    BIP84,
    /// SLIP-0010: 适用于 ed25519，全部硬化
    SLIP0010,
    /// CIP-1852: Cardano 专用
    CIP1852,
}

impl DerivationStandard {
    pub fn purpose(self) -> u32 {
        match self {
            DerivationStandard::BIP44 | DerivationStandard::SLIP0010 => 44,
            DerivationStandard::BIP84 => 84,
            DerivationStandard::CIP1852 => 1852,
        }
    }
}

/// 链适配器族，决定由哪个 CoinEntry 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    Bitcoin,
    BitcoinCash,
    Decred,
    Ethereum,
    Ronin,
    Tron,
    Ripple,
    Stellar,
    Solana,
    Polkadot,
    Cosmos,
    Zilliqa,
    Nano,
    Cardano,
    Neo,
    MultiversX,
}

/// 币种静态参数
#[derive(Debug, Clone, Serialize)]
pub struct CoinDescriptor {
    pub coin: CoinType,
    /// 稳定的小写标识
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub blockchain: Blockchain,
    pub curve: CurveType,
    /// 派生地址时使用的公钥形式
    pub public_key_type: PublicKeyType,
    pub address_format: AddressFormat,
    /// 公钥哈希算法
    pub hasher: Hasher,
    /// P2PKH 版本字节（可多字节，如 Zcash）
    pub p2pkh_prefix: &'static [u8],
    /// P2SH 版本字节
    pub p2sh_prefix: &'static [u8],
    pub hrp: Option<&'static str>,
    pub ss58_prefix: Option<u16>,
    pub derivation: DerivationStandard,
    /// BIP44 coin type (用于派生路径)
    pub slip44: u32,
    /// 默认派生路径
    pub derivation_path_template: &'static str,
}

impl CoinDescriptor {
    /// 生成派生路径
    ///
    /// # Arguments
    /// * `account` - 账户索引 (通常为 0)
    /// * `change` - 找零索引 (外部地址为 0，内部地址为 1)
    /// * `index` - 地址索引
    ///
    /// 模板中不存在的分量被忽略（如 Stellar 只有 account）
    pub fn derivation_path(&self, account: u32, change: u32, index: u32) -> Option<DerivationPath> {
        self.default_derivation_path()
            .map(|template| template.with_indices(account, change, index))
    }

    pub fn default_derivation_path(&self) -> Option<DerivationPath> {
        self.derivation_path_template.parse().ok()
    }
}


/// 币种注册表
///
/// 描述表本身是静态的；注册表只额外提供按符号、id、曲线的查找
pub struct CoinRegistry {
    by_symbol: HashMap<String, CoinType>,
    by_id: HashMap<&'static str, CoinType>,
}

impl CoinRegistry {
    pub fn new() -> Self {
        let mut by_symbol = HashMap::new();
        let mut by_id = HashMap::new();

        for coin in CoinType::ALL {
            let descriptor = descriptor_for(coin);
            // 符号可能重复（ETH / BNB），先注册者优先
            by_symbol
                .entry(descriptor.symbol.to_lowercase())
                .or_insert(coin);
            by_id.insert(descriptor.id, coin);
        }

        Self { by_symbol, by_id }
    }

    pub fn get(&self, coin: CoinType) -> &'static CoinDescriptor {
        descriptor_for(coin)
    }

    /// 通过符号获取配置
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&'static CoinDescriptor> {
        self.by_symbol
            .get(&symbol.to_lowercase())
            .map(|coin| descriptor_for(*coin))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'static CoinDescriptor> {
        self.by_id.get(id).map(|coin| descriptor_for(*coin))
    }

    /// 按曲线类型分组获取所有币种
    pub fn get_by_curve_type(&self, curve: CurveType) -> Vec<&'static CoinDescriptor> {
        CoinType::ALL
            .iter()
            .map(|coin| descriptor_for(*coin))
            .filter(|d| d.curve == curve)
            .collect()
    }

    pub fn get_by_blockchain(&self, blockchain: Blockchain) -> Vec<&'static CoinDescriptor> {
        CoinType::ALL
            .iter()
            .map(|coin| descriptor_for(*coin))
            .filter(|d| d.blockchain == blockchain)
            .collect()
    }

    /// 列出所有支持的币种
    pub fn list_all(&self) -> Vec<&'static CoinDescriptor> {
        CoinType::ALL.iter().map(|coin| descriptor_for(*coin)).collect()
    }

    /// 验证描述表一致性
    pub fn validate_configs(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for coin in CoinType::ALL {
            let d = descriptor_for(coin);

            if d.coin != coin {
                errors.push(format!("{:?} resolves to descriptor of {:?}", coin, d.coin));
            }
            if d.id.is_empty() || d.name.is_empty() || d.symbol.is_empty() {
                errors.push(format!("{:?} has empty id, name or symbol", coin));
            }
            if d.public_key_type.curve() != d.curve {
                errors.push(format!(
                    "{} public key type {:?} is not on curve {:?}",
                    d.name, d.public_key_type, d.curve
                ));
            }

            if d.hasher != key_hasher(d.blockchain) {
                errors.push(format!(
                    "{} uses {:?}, {:?} addresses are derived with {:?}",
                    d.name,
                    d.hasher,
                    d.blockchain,
                    key_hasher(d.blockchain)
                ));
            }

            // 验证地址格式所需参数
            let missing = match d.address_format {
                AddressFormat::Segwit => d.hrp.is_none() || d.p2pkh_prefix.is_empty(),
                AddressFormat::Bech32 | AddressFormat::CashAddr => d.hrp.is_none(),
                AddressFormat::Base58Check => d.p2pkh_prefix.is_empty(),
                AddressFormat::SS58 => d.ss58_prefix.is_none(),
                AddressFormat::Hex
                | AddressFormat::Base58
                | AddressFormat::StrKey
                | AddressFormat::Nano => false,
            };
            if missing {
                errors.push(format!(
                    "{} is missing parameters for {:?} addresses",
                    d.name, d.address_format
                ));
            }

            // 验证派生路径模板
            match d.default_derivation_path() {
                Some(path) => {
                    if path.purpose() != Some(d.derivation.purpose()) {
                        errors.push(format!(
                            "{} path {} does not follow {:?}",
                            d.name, d.derivation_path_template, d.derivation
                        ));
                    }
                    if path.coin() != Some(d.slip44) {
                        errors.push(format!(
                            "{} path {} does not use coin type {}",
                            d.name, d.derivation_path_template, d.slip44
                        ));
                    }
                }
                None => errors.push(format!(
                    "{} has invalid derivation_path_template {}",
                    d.name, d.derivation_path_template
                )),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for CoinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 各链族由公钥计算地址负载的摘要
pub(crate) fn key_hasher(blockchain: Blockchain) -> Hasher {
    match blockchain {
        Blockchain::Bitcoin
        | Blockchain::BitcoinCash
        | Blockchain::Ripple
        | Blockchain::Cosmos
        | Blockchain::Neo => Hasher::Hash160,
        Blockchain::Decred => Hasher::Blake256Ripemd160,
        Blockchain::Ethereum | Blockchain::Ronin | Blockchain::Tron => Hasher::Keccak256,
        Blockchain::Zilliqa => Hasher::Sha256,
        Blockchain::Cardano => Hasher::Blake2b224,
        Blockchain::Stellar
        | Blockchain::Solana
        | Blockchain::Polkadot
        | Blockchain::Nano
        | Blockchain::MultiversX => Hasher::Identity,
    }
}

/// 币种 → 静态参数（穷尽匹配，新增币种未登记时编译失败）
pub fn descriptor_for(coin: CoinType) -> &'static CoinDescriptor {
    match coin {
        CoinType::Bitcoin => &BITCOIN,
        CoinType::Litecoin => &LITECOIN,
        CoinType::Dogecoin => &DOGECOIN,
        CoinType::Dash => &DASH,
        CoinType::Decred => &DECRED,
        CoinType::Ethereum => &ETHEREUM,
        CoinType::EthereumClassic => &ETHEREUM_CLASSIC,
        CoinType::Cosmos => &COSMOS,
        CoinType::Zcash => &ZCASH,
        CoinType::Ripple => &RIPPLE,
        CoinType::BitcoinCash => &BITCOIN_CASH,
        CoinType::Stellar => &STELLAR,
        CoinType::Nano => &NANO,
        CoinType::Tron => &TRON,
        CoinType::Zilliqa => &ZILLIQA,
        CoinType::Polkadot => &POLKADOT,
        CoinType::Kusama => &KUSAMA,
        CoinType::Solana => &SOLANA,
        CoinType::MultiversX => &MULTIVERSX,
        CoinType::Binance => &BINANCE,
        CoinType::Neo => &NEO,
        CoinType::ECash => &ECASH,
        CoinType::Polygon => &POLYGON,
        CoinType::Cardano => &CARDANO,
        CoinType::Kin => &KIN,
        CoinType::Optimism => &OPTIMISM,
        CoinType::Ronin => &RONIN,
        CoinType::AvalancheCChain => &AVALANCHE_C_CHAIN,
        CoinType::Arbitrum => &ARBITRUM,
        CoinType::SmartChain => &SMART_CHAIN,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 描述表
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

static BITCOIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Bitcoin,
    id: "bitcoin",
    name: "Bitcoin",
    symbol: "BTC",
    decimals: 8,
    blockchain: Blockchain::Bitcoin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Segwit,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x00],
    p2sh_prefix: &[0x05],
    hrp: Some("bc"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP84,
    slip44: 0,
    derivation_path_template: "m/84'/0'/0'/0/0",
};

static LITECOIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Litecoin,
    id: "litecoin",
    name: "Litecoin",
    symbol: "LTC",
    decimals: 8,
    blockchain: Blockchain::Bitcoin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Segwit,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x30],
    p2sh_prefix: &[0x32],
    hrp: Some("ltc"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP84,
    slip44: 2,
    derivation_path_template: "m/84'/2'/0'/0/0",
};

static DOGECOIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Dogecoin,
    id: "dogecoin",
    name: "Dogecoin",
    symbol: "DOGE",
    decimals: 8,
    blockchain: Blockchain::Bitcoin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x1e],
    p2sh_prefix: &[0x16],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 3,
    derivation_path_template: "m/44'/3'/0'/0/0",
};

static DASH: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Dash,
    id: "dash",
    name: "Dash",
    symbol: "DASH",
    decimals: 8,
    blockchain: Blockchain::Bitcoin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x4c],
    p2sh_prefix: &[0x10],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 5,
    derivation_path_template: "m/44'/5'/0'/0/0",
};

static DECRED: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Decred,
    id: "decred",
    name: "Decred",
    symbol: "DCR",
    decimals: 8,
    blockchain: Blockchain::Decred,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Blake256Ripemd160,
    p2pkh_prefix: &[0x07, 0x3f],
    p2sh_prefix: &[0x07, 0x1a],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 42,
    derivation_path_template: "m/44'/42'/0'/0/0",
};

static ETHEREUM: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Ethereum,
    id: "ethereum",
    name: "Ethereum",
    symbol: "ETH",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static ETHEREUM_CLASSIC: CoinDescriptor = CoinDescriptor {
    coin: CoinType::EthereumClassic,
    id: "classic",
    name: "Ethereum Classic",
    symbol: "ETC",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 61,
    derivation_path_template: "m/44'/61'/0'/0/0",
};

static COSMOS: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Cosmos,
    id: "cosmos",
    name: "Cosmos Hub",
    symbol: "ATOM",
    decimals: 6,
    blockchain: Blockchain::Cosmos,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Bech32,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: Some("cosmos"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 118,
    derivation_path_template: "m/44'/118'/0'/0/0",
};

static ZCASH: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Zcash,
    id: "zcash",
    name: "Zcash",
    symbol: "ZEC",
    decimals: 8,
    blockchain: Blockchain::Bitcoin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x1c, 0xb8],
    p2sh_prefix: &[0x1c, 0xbd],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 133,
    derivation_path_template: "m/44'/133'/0'/0/0",
};

static RIPPLE: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Ripple,
    id: "ripple",
    name: "XRP",
    symbol: "XRP",
    decimals: 6,
    blockchain: Blockchain::Ripple,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x00],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 144,
    derivation_path_template: "m/44'/144'/0'/0/0",
};

static BITCOIN_CASH: CoinDescriptor = CoinDescriptor {
    coin: CoinType::BitcoinCash,
    id: "bitcoincash",
    name: "Bitcoin Cash",
    symbol: "BCH",
    decimals: 8,
    blockchain: Blockchain::BitcoinCash,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::CashAddr,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x00],
    p2sh_prefix: &[0x05],
    hrp: Some("bitcoincash"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 145,
    derivation_path_template: "m/44'/145'/0'/0/0",
};

static STELLAR: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Stellar,
    id: "stellar",
    name: "Stellar",
    symbol: "XLM",
    decimals: 7,
    blockchain: Blockchain::Stellar,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::StrKey,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::SLIP0010,
    slip44: 148,
    derivation_path_template: "m/44'/148'/0'",
};

static NANO: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Nano,
    id: "nano",
    name: "Nano",
    symbol: "XNO",
    decimals: 30,
    blockchain: Blockchain::Nano,
    curve: CurveType::Ed25519Blake2bNano,
    public_key_type: PublicKeyType::Ed25519Blake2b,
    address_format: AddressFormat::Nano,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::SLIP0010,
    slip44: 165,
    derivation_path_template: "m/44'/165'/0'",
};

static TRON: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Tron,
    id: "tron",
    name: "Tron",
    symbol: "TRX",
    decimals: 6,
    blockchain: Blockchain::Tron,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[0x41],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 195,
    derivation_path_template: "m/44'/195'/0'/0/0",
};

static ZILLIQA: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Zilliqa,
    id: "zilliqa",
    name: "Zilliqa",
    symbol: "ZIL",
    decimals: 12,
    blockchain: Blockchain::Zilliqa,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Bech32,
    hasher: Hasher::Sha256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: Some("zil"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 313,
    derivation_path_template: "m/44'/313'/0'/0/0",
};

static POLKADOT: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Polkadot,
    id: "polkadot",
    name: "Polkadot",
    symbol: "DOT",
    decimals: 10,
    blockchain: Blockchain::Polkadot,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::SS58,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: Some(0),
    derivation: DerivationStandard::SLIP0010,
    slip44: 354,
    derivation_path_template: "m/44'/354'/0'/0'/0'",
};

static KUSAMA: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Kusama,
    id: "kusama",
    name: "Kusama",
    symbol: "KSM",
    decimals: 12,
    blockchain: Blockchain::Polkadot,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::SS58,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: Some(2),
    derivation: DerivationStandard::SLIP0010,
    slip44: 434,
    derivation_path_template: "m/44'/434'/0'/0'/0'",
};

static SOLANA: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Solana,
    id: "solana",
    name: "Solana",
    symbol: "SOL",
    decimals: 9,
    blockchain: Blockchain::Solana,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::Base58,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::SLIP0010,
    slip44: 501,
    derivation_path_template: "m/44'/501'/0'/0'",
};

static MULTIVERSX: CoinDescriptor = CoinDescriptor {
    coin: CoinType::MultiversX,
    id: "elrond",
    name: "MultiversX",
    symbol: "EGLD",
    decimals: 18,
    blockchain: Blockchain::MultiversX,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::Bech32,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: Some("erd"),
    ss58_prefix: None,
    derivation: DerivationStandard::SLIP0010,
    slip44: 508,
    derivation_path_template: "m/44'/508'/0'/0'/0'",
};

static BINANCE: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Binance,
    id: "binance",
    name: "BNB Beacon Chain",
    symbol: "BNB",
    decimals: 8,
    blockchain: Blockchain::Cosmos,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::Bech32,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: Some("bnb"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 714,
    derivation_path_template: "m/44'/714'/0'/0/0",
};

static NEO: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Neo,
    id: "neo",
    name: "NEO",
    symbol: "NEO",
    decimals: 8,
    blockchain: Blockchain::Neo,
    curve: CurveType::Nist256p1,
    public_key_type: PublicKeyType::Nist256p1,
    address_format: AddressFormat::Base58Check,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x17],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 888,
    derivation_path_template: "m/44'/888'/0'/0/0",
};

static ECASH: CoinDescriptor = CoinDescriptor {
    coin: CoinType::ECash,
    id: "ecash",
    name: "eCash",
    symbol: "XEC",
    decimals: 2,
    blockchain: Blockchain::BitcoinCash,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1,
    address_format: AddressFormat::CashAddr,
    hasher: Hasher::Hash160,
    p2pkh_prefix: &[0x00],
    p2sh_prefix: &[0x05],
    hrp: Some("ecash"),
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 899,
    derivation_path_template: "m/44'/899'/0'/0/0",
};

static POLYGON: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Polygon,
    id: "polygon",
    name: "Polygon",
    symbol: "POL",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static CARDANO: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Cardano,
    id: "cardano",
    name: "Cardano",
    symbol: "ADA",
    decimals: 6,
    blockchain: Blockchain::Cardano,
    curve: CurveType::Ed25519ExtendedCardano,
    public_key_type: PublicKeyType::Ed25519Cardano,
    address_format: AddressFormat::Bech32,
    hasher: Hasher::Blake2b224,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: Some("addr"),
    ss58_prefix: None,
    derivation: DerivationStandard::CIP1852,
    slip44: 1815,
    derivation_path_template: "m/1852'/1815'/0'/0/0",
};

static KIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Kin,
    id: "kin",
    name: "Kin",
    symbol: "KIN",
    decimals: 5,
    blockchain: Blockchain::Stellar,
    curve: CurveType::Ed25519,
    public_key_type: PublicKeyType::Ed25519,
    address_format: AddressFormat::StrKey,
    hasher: Hasher::Identity,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::SLIP0010,
    slip44: 2017,
    derivation_path_template: "m/44'/2017'/0'",
};

static OPTIMISM: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Optimism,
    id: "optimism",
    name: "Optimism",
    symbol: "ETH",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static RONIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Ronin,
    id: "ronin",
    name: "Ronin",
    symbol: "RON",
    decimals: 18,
    blockchain: Blockchain::Ronin,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static AVALANCHE_C_CHAIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::AvalancheCChain,
    id: "avalanchec",
    name: "Avalanche C-Chain",
    symbol: "AVAX",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static ARBITRUM: CoinDescriptor = CoinDescriptor {
    coin: CoinType::Arbitrum,
    id: "arbitrum",
    name: "Arbitrum",
    symbol: "ETH",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

static SMART_CHAIN: CoinDescriptor = CoinDescriptor {
    coin: CoinType::SmartChain,
    id: "smartchain",
    name: "BNB Smart Chain",
    symbol: "BNB",
    decimals: 18,
    blockchain: Blockchain::Ethereum,
    curve: CurveType::Secp256k1,
    public_key_type: PublicKeyType::Secp256k1Extended,
    address_format: AddressFormat::Hex,
    hasher: Hasher::Keccak256,
    p2pkh_prefix: &[],
    p2sh_prefix: &[],
    hrp: None,
    ss58_prefix: None,
    derivation: DerivationStandard::BIP44,
    slip44: 60,
    derivation_path_template: "m/44'/60'/0'/0/0",
};

#[cfg(test)]
mod tests;
