//! 统一错误类型
//!
//! 地址解析、公钥校验、链适配器调用三层错误，以及供 C-ABI 层使用的数字错误码

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CoinType, PublicKeyType};

/// 地址解码失败原因
///
/// 所有编解码器共用同一组失败类型，调用方只需区分“格式/校验和/网络”几类
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid address format: {0}")]
    InvalidFormat(String),

    #[error("address checksum mismatch")]
    InvalidChecksum,

    #[error("human-readable part mismatch: expected {expected}, found {found}")]
    InvalidHrp { expected: String, found: String },

    #[error("address belongs to a different network: {0}")]
    WrongNetwork(String),

    #[error("invalid witness program: {0}")]
    InvalidWitnessProgram(String),

    #[error("invalid payload length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

impl AddressError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        AddressError::InvalidFormat(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AddressError::InvalidFormat(_) => ErrorCode::InvalidAddressFormat,
            AddressError::InvalidChecksum => ErrorCode::InvalidAddressChecksum,
            AddressError::InvalidHrp { .. } => ErrorCode::InvalidAddressPrefix,
            AddressError::WrongNetwork(_) => ErrorCode::WrongNetwork,
            AddressError::InvalidWitnessProgram(_) => ErrorCode::InvalidWitnessProgram,
            AddressError::InvalidLength { .. } => ErrorCode::InvalidAddressFormat,
        }
    }
}

/// 公钥构造/转换失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid {key_type:?} public key length: expected {expected}, found {found}")]
    InvalidLength {
        key_type: PublicKeyType,
        expected: usize,
        found: usize,
    },

    #[error("bytes are not a valid {0:?} public key")]
    InvalidPoint(PublicKeyType),

    #[error("{0:?} public key is not valid hex")]
    InvalidEncoding(PublicKeyType),

    #[error("cannot convert {from:?} public key to {to:?}")]
    UnsupportedConversion {
        from: PublicKeyType,
        to: PublicKeyType,
    },
}

/// 派生路径解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationPathError {
    #[error("derivation path is empty")]
    Empty,

    #[error("derivation path must start with 'm'")]
    MissingRoot,

    #[error("invalid derivation path component: {0}")]
    InvalidComponent(String),

    #[error("derivation index out of range: {0}")]
    IndexOutOfRange(String),
}

/// 链适配器操作错误
#[derive(Debug, Error)]
pub enum CoinError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    DerivationPath(#[from] DerivationPathError),

    #[error("{coin} expects a {expected:?} public key, got {actual:?}")]
    KeyTypeMismatch {
        coin: CoinType,
        expected: PublicKeyType,
        actual: PublicKeyType,
    },

    #[error("{operation} is not supported for {coin}")]
    UnsupportedOperation {
        coin: CoinType,
        operation: &'static str,
    },

    /// 签名协作方返回的错误，原样透传
    #[error(transparent)]
    Signing(anyhow::Error),
}

impl CoinError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoinError::Address(e) => e.code(),
            CoinError::Key(_) => ErrorCode::InvalidPublicKey,
            CoinError::DerivationPath(_) => ErrorCode::InvalidDerivationPath,
            CoinError::KeyTypeMismatch { .. } => ErrorCode::KeyTypeMismatch,
            CoinError::UnsupportedOperation { .. } => ErrorCode::UnsupportedOperation,
            CoinError::Signing(_) => ErrorCode::SigningFailed,
        }
    }
}

/// 标准错误代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ErrorCode {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 客户端错误（1xxx）
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// 交易格式错误
    InvalidTransactionFormat = 1005,
    /// 地址格式错误
    InvalidAddressFormat = 1006,
    /// 地址校验和错误
    InvalidAddressChecksum = 1007,
    /// 地址前缀（hrp）错误
    InvalidAddressPrefix = 1008,
    /// 地址属于其他网络
    WrongNetwork = 1009,
    /// 隔离见证程序无效
    InvalidWitnessProgram = 1010,
    /// 公钥无效
    InvalidPublicKey = 1011,
    /// 公钥类型与链不匹配
    KeyTypeMismatch = 1012,
    /// 派生路径无效
    InvalidDerivationPath = 1013,

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 后端错误（3xxx）
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// 配置错误
    ConfigurationError = 3005,
    /// 签名服务失败
    SigningFailed = 3007,

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 业务错误（4xxx）
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    /// 不支持的链
    UnsupportedChain = 4008,
    /// 链不支持该操作
    UnsupportedOperation = 4011,
}

impl ErrorCode {
    /// 数字错误码（跨语言边界使用）
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// 获取错误消息（英文）
    pub fn message_en(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTransactionFormat => "Invalid transaction format",
            ErrorCode::InvalidAddressFormat => "Invalid address format",
            ErrorCode::InvalidAddressChecksum => "Address checksum mismatch",
            ErrorCode::InvalidAddressPrefix => "Address prefix does not match the chain",
            ErrorCode::WrongNetwork => "Address belongs to another network",
            ErrorCode::InvalidWitnessProgram => "Invalid segwit witness program",
            ErrorCode::InvalidPublicKey => "Invalid public key",
            ErrorCode::KeyTypeMismatch => "Public key type does not match the chain",
            ErrorCode::InvalidDerivationPath => "Invalid derivation path",
            ErrorCode::ConfigurationError => "Configuration error",
            ErrorCode::SigningFailed => "Signing service failed",
            ErrorCode::UnsupportedChain => "Chain not supported",
            ErrorCode::UnsupportedOperation => "Operation not supported for this chain",
        }
    }

    /// 获取错误消息（中文）
    pub fn message_zh(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTransactionFormat => "交易格式错误",
            ErrorCode::InvalidAddressFormat => "地址格式错误",
            ErrorCode::InvalidAddressChecksum => "地址校验和错误",
            ErrorCode::InvalidAddressPrefix => "地址前缀与链不匹配",
            ErrorCode::WrongNetwork => "地址属于其他网络",
            ErrorCode::InvalidWitnessProgram => "隔离见证程序无效",
            ErrorCode::InvalidPublicKey => "公钥无效",
            ErrorCode::KeyTypeMismatch => "公钥类型与链不匹配",
            ErrorCode::InvalidDerivationPath => "派生路径无效",
            ErrorCode::ConfigurationError => "配置错误",
            ErrorCode::SigningFailed => "签名服务失败",
            ErrorCode::UnsupportedChain => "不支持的链",
            ErrorCode::UnsupportedOperation => "该链不支持此操作",
        }
    }
}
