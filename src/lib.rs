//! IronCore Wallet Core - 多链钱包地址核心
//!
//! 非托管模式：只处理公钥与地址，私钥仅在签名协作方中出现

pub mod any_address;
pub mod codec;
pub mod coin;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use any_address::AnyAddress;
pub use error::{AddressError, CoinError, ErrorCode, KeyError};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        any_address::AnyAddress,
        coin::{CoinEntry, TransactionSigner},
        domain::{CoinDescriptor, CoinRegistry, CoinType, CurveType, PublicKey, PublicKeyType},
        error::{AddressError, CoinError, ErrorCode},
        service::WalletCoreService,
    };
}
