//! 交易签名协作方
//!
//! 交易构造与签名由外部组件完成，这里只定义注入接口

use anyhow::Result;

use crate::domain::CoinType;

/// 交易签名器
///
/// 输入输出都是不透明字节/字符串；失败原样交给调用方
pub trait TransactionSigner: Send + Sync {
    /// 签名序列化后的交易输入
    fn sign(&self, coin: CoinType, input: &[u8]) -> Result<Vec<u8>>;

    /// 使用私钥签名 JSON 描述的交易
    fn sign_json(&self, coin: CoinType, json: &str, private_key: &[u8]) -> Result<String>;
}

/// 未配置签名器时的默认实现，所有调用都失败
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredSigner;

impl TransactionSigner for UnconfiguredSigner {
    fn sign(&self, coin: CoinType, _input: &[u8]) -> Result<Vec<u8>> {
        anyhow::bail!("no transaction signer configured for {}", coin)
    }

    fn sign_json(&self, coin: CoinType, _json: &str, _private_key: &[u8]) -> Result<String> {
        anyhow::bail!("no transaction signer configured for {}", coin)
    }
}
