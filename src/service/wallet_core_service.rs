//! 钱包核心服务
//!
//! 非托管模式：服务只接收客户端派生好的公钥与地址，私钥仅在 JSON 签名时短暂经过并立即清零

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::any_address::AnyAddress;
use crate::coin::{self, TransactionSigner, UnconfiguredSigner};
use crate::config::CoreConfig;
use crate::domain::{CoinDescriptor, CoinRegistry, CoinType, CurveType, PublicKey, PublicKeyType};
use crate::utils::chain_normalizer;

/// 币种信息
#[derive(Debug, Clone, Serialize)]
pub struct CoinInfo {
    pub coin: CoinType,
    pub coin_id: u32,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub curve_type: String,
    pub derivation_path: String,
}

impl From<&CoinDescriptor> for CoinInfo {
    fn from(descriptor: &CoinDescriptor) -> Self {
        Self {
            coin: descriptor.coin,
            coin_id: descriptor.coin.value(),
            id: descriptor.id.to_string(),
            name: descriptor.name.to_string(),
            symbol: descriptor.symbol.to_string(),
            decimals: descriptor.decimals,
            curve_type: format!("{:?}", descriptor.curve),
            derivation_path: descriptor.derivation_path_template.to_string(),
        }
    }
}

/// 地址派生请求
#[derive(Debug, Clone)]
pub struct DeriveAddressRequest {
    /// 链标识 (id、symbol 或 coin_id)
    pub chain: String,
    /// 客户端派生的公钥 (hex)
    pub public_key: String,
    /// 账户索引 (默认 0)
    pub account: Option<u32>,
    /// 地址索引 (默认 0)
    pub index: Option<u32>,
}

/// 派生结果
#[derive(Debug, Clone, Serialize)]
pub struct DerivedAddress {
    pub coin: CoinInfo,
    pub address: AnyAddress,
    /// 派生路径
    pub derivation_path: String,
}

/// 钱包核心服务
pub struct WalletCoreService {
    registry: CoinRegistry,
    enabled: Vec<CoinType>,
    signer: Arc<dyn TransactionSigner>,
}

impl Default for WalletCoreService {
    fn default() -> Self {
        Self::new(Arc::new(UnconfiguredSigner))
    }
}

impl WalletCoreService {
    /// 创建服务实例，启用全部币种
    pub fn new(signer: Arc<dyn TransactionSigner>) -> Self {
        Self {
            registry: CoinRegistry::new(),
            enabled: CoinType::ALL.to_vec(),
            signer,
        }
    }

    /// 按配置创建服务实例
    pub fn from_config(config: &CoreConfig, signer: Arc<dyn TransactionSigner>) -> Result<Self> {
        let enabled = config
            .service
            .resolve_enabled_coins()
            .context("Failed to resolve enabled coins")?;

        tracing::info!(enabled = enabled.len(), "wallet core service initialized");

        Ok(Self {
            registry: CoinRegistry::new(),
            enabled,
            signer,
        })
    }

    /// 验证地址格式
    pub fn validate_address(&self, chain: &str, address: &str) -> Result<bool> {
        let coin = self.resolve(chain)?;
        Ok(coin::validate_address(coin, address))
    }

    /// 规范化地址；无效地址返回错误
    pub fn normalize_address(&self, chain: &str, address: &str) -> Result<String> {
        let coin = self.resolve(chain)?;
        coin::parse_address(coin, address)
            .with_context(|| format!("Invalid {} address", coin))
    }

    /// 解析地址得到地址数据
    pub fn address_data(&self, chain: &str, address: &str) -> Result<Vec<u8>> {
        let coin = self.resolve(chain)?;
        AnyAddress::create_from_string(address, coin)
            .map(|addr| addr.data().to_vec())
            .ok_or_else(|| anyhow::anyhow!("Invalid {} address: {}", coin, address))
    }

    /// 由客户端公钥派生地址
    ///
    /// # 流程
    /// 1. 解析链标识
    /// 2. 按币种曲线与公钥长度确定公钥类型
    /// 3. 派生地址并计算地址数据
    /// 4. 按账户/地址索引生成派生路径
    pub fn derive_address(&self, request: DeriveAddressRequest) -> Result<DerivedAddress> {
        let coin = self.resolve(&request.chain)?;
        let descriptor = self.registry.get(coin);

        let bytes = hex::decode(request.public_key.trim_start_matches("0x"))
            .context("Public key must be hex encoded")?;
        let key_type = key_type_for(descriptor.curve, bytes.len()).ok_or_else(|| {
            anyhow::anyhow!(
                "Unexpected {}-byte public key for {} ({:?})",
                bytes.len(),
                coin,
                descriptor.curve
            )
        })?;
        let public_key = PublicKey::new(&bytes, key_type).context("Invalid public key")?;

        let address = AnyAddress::create_from_public_key(&public_key, coin)
            .with_context(|| format!("Failed to derive {} address", coin))?;

        let account = request.account.unwrap_or(0);
        let index = request.index.unwrap_or(0);
        let derivation_path = descriptor
            .derivation_path(account, 0, index)
            .map(|path| path.to_string())
            .unwrap_or_else(|| descriptor.derivation_path_template.to_string());

        Ok(DerivedAddress {
            coin: CoinInfo::from(descriptor),
            address,
            derivation_path,
        })
    }

    /// 签名序列化交易
    pub fn sign(&self, chain: &str, input: &[u8]) -> Result<Vec<u8>> {
        let coin = self.resolve(chain)?;
        Ok(coin::sign(coin, input, self.signer.as_ref())?)
    }

    /// 签名 JSON 交易
    ///
    /// 私钥 hex 解码后放入 Zeroizing 缓冲，返回前清零
    pub fn sign_json(&self, chain: &str, json: &str, private_key_hex: &str) -> Result<String> {
        let coin = self.resolve(chain)?;
        let private_key = Zeroizing::new(
            hex::decode(private_key_hex.trim_start_matches("0x"))
                .map_err(|_| anyhow::anyhow!("Private key must be hex encoded"))?,
        );
        Ok(coin::sign_json(coin, json, &private_key, self.signer.as_ref())?)
    }

    /// 列出所有启用的币种
    pub fn list_supported_coins(&self) -> Vec<CoinInfo> {
        self.enabled
            .iter()
            .map(|coin| CoinInfo::from(self.registry.get(*coin)))
            .collect()
    }

    /// 按曲线类型分组列出币种
    pub fn list_coins_by_curve(&self) -> HashMap<String, Vec<CoinInfo>> {
        let mut grouped: HashMap<String, Vec<CoinInfo>> = HashMap::new();

        for info in self.list_supported_coins() {
            grouped.entry(info.curve_type.clone()).or_default().push(info);
        }

        grouped
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 私有辅助方法
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 解析链标识并检查是否启用
    fn resolve(&self, chain: &str) -> Result<CoinType> {
        let coin = chain_normalizer::resolve_coin(chain)?;
        if !self.enabled.contains(&coin) {
            anyhow::bail!("Chain {} is not enabled", coin);
        }
        Ok(coin)
    }
}

/// 同一曲线下按长度区分压缩/扩展形式
fn key_type_for(curve: CurveType, len: usize) -> Option<PublicKeyType> {
    let candidates: &[PublicKeyType] = match curve {
        CurveType::Secp256k1 => &[PublicKeyType::Secp256k1, PublicKeyType::Secp256k1Extended],
        CurveType::Nist256p1 => &[PublicKeyType::Nist256p1, PublicKeyType::Nist256p1Extended],
        CurveType::Ed25519 => &[PublicKeyType::Ed25519],
        CurveType::Ed25519Blake2bNano => &[PublicKeyType::Ed25519Blake2b],
        CurveType::Ed25519ExtendedCardano => &[PublicKeyType::Ed25519Cardano],
    };
    candidates.iter().copied().find(|t| t.len() == len)
}
