//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::CoinType;
use crate::utils::chain_normalizer;

/// 钱包核心配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 服务层配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// 启用的链标识符；为空表示全部启用
    #[serde(default)]
    pub enabled_coins: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl ServiceConfig {
    fn from_env() -> Self {
        let enabled_coins = std::env::var("WALLET_CORE_ENABLED_COINS")
            .ok()
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self { enabled_coins }
    }

    /// 解析启用的币种；为空时返回全部币种
    pub fn resolve_enabled_coins(&self) -> Result<Vec<CoinType>> {
        if self.enabled_coins.is_empty() {
            return Ok(CoinType::ALL.to_vec());
        }

        let mut coins = Vec::with_capacity(self.enabled_coins.len());
        for id in &self.enabled_coins {
            let coin = chain_normalizer::resolve_coin(id)
                .with_context(|| format!("Invalid entry in enabled_coins: {}", id))?;
            if !coins.contains(&coin) {
                coins.push(coin);
            }
        }
        Ok(coins)
    }
}

impl CoreConfig {
    /// 从环境变量加载配置（先读取 .env）
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logging: LoggingConfig::default(),
            service: ServiceConfig::from_env(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: CoreConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        self.service.resolve_enabled_coins()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config(level: &str, format: &str) -> CoreConfig {
        CoreConfig {
            logging: LoggingConfig {
                level: level.into(),
                format: format.into(),
            },
            service: ServiceConfig::default(),
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "debug"
format = "json"

[service]
enabled_coins = ["btc", "ethereum", "501"]
"#
        )
        .unwrap();

        let config = CoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(
            config.service.resolve_enabled_coins().unwrap(),
            vec![CoinType::Bitcoin, CoinType::Ethereum, CoinType::Solana]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_env() {
        let config = CoreConfig::from_env_and_file(Some("/nonexistent/wallet-core.toml")).unwrap();
        assert!(!config.logging.level.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging\nlevel = ").unwrap();
        assert!(CoreConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(config("info", "text").validate().is_ok());
        assert!(config("WARN", "json").validate().is_ok());
        assert!(config("verbose", "text").validate().is_err());
        assert!(config("info", "yaml").validate().is_err());

        let mut bad_coin = config("info", "text");
        bad_coin.service.enabled_coins = vec!["dogecoin".into(), "ton".into()];
        let err = bad_coin.validate().unwrap_err();
        assert!(err.to_string().contains("ton"));
    }

    #[test]
    fn test_empty_enabled_coins_means_all() {
        let coins = ServiceConfig::default().resolve_enabled_coins().unwrap();
        assert_eq!(coins.len(), CoinType::ALL.len());
    }
}
