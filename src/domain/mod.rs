//! Domain 模块
//!
//! 币种标识、币种描述表、公钥、派生路径与账户

pub mod account;
pub mod coin_descriptor;
pub mod coin_type;
pub mod derivation_path;
pub mod public_key;

// 重新导出常用类型
pub use account::Account;
pub use coin_descriptor::{
    descriptor_for, AddressFormat, Blockchain, CoinDescriptor, CoinRegistry, CurveType,
    DerivationStandard,
};
pub use coin_type::CoinType;
pub use derivation_path::{DerivationIndex, DerivationPath};
pub use public_key::{PublicKey, PublicKeyType};
