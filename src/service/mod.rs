//! 服务层
//!
//! 以链标识符字符串为入口的钱包核心服务

pub mod wallet_core_service;

pub use wallet_core_service::{CoinInfo, DeriveAddressRequest, DerivedAddress, WalletCoreService};
