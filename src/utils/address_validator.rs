//! 地址验证模块
//!
//! 以链标识符字符串为入口的地址校验，链标识符先经 chain_normalizer 标准化

use anyhow::Result;

use crate::coin;
use crate::utils::chain_normalizer;

/// 地址验证器
pub struct AddressValidator;

impl AddressValidator {
    /// 验证地址格式
    ///
    /// # 参数
    /// - `chain`: 链标识符（会自动标准化）
    /// - `address`: 待验证的地址
    ///
    /// # 返回
    /// - Ok(true): 地址有效
    /// - Ok(false): 地址无效
    /// - Err: 不支持的链
    pub fn validate(chain: &str, address: &str) -> Result<bool> {
        let coin = chain_normalizer::resolve_coin(chain)?;
        Ok(coin::validate_address(coin, address))
    }

    /// 验证并返回规范化地址
    ///
    /// 地址无效时返回 Err，错误信息包含具体原因
    pub fn normalize(chain: &str, address: &str) -> Result<String> {
        let coin = chain_normalizer::resolve_coin(chain)?;
        coin::parse_address(coin, address)
            .map_err(|e| anyhow::anyhow!("Invalid {} address: {}", coin, e))
    }
}
