//! 链上常用摘要函数

use bitcoin::hashes::{hash160 as btc_hash160, ripemd160, sha256d as btc_sha256d, Hash};
use blake_hash::Blake256;
use blake2::digest::consts::{U28, U32, U5};
use blake2::{Blake2b, Blake2b512, Digest};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Keccak256;

type Blake2b40 = Blake2b<U5>;
type Blake2b224 = Blake2b<U28>;
type Blake2b256 = Blake2b<U32>;

/// 公钥哈希算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hasher {
    /// 单次 SHA-256 (Zilliqa)
    Sha256,
    /// 双 SHA-256 (Base58Check 校验和)
    Sha256d,
    /// RIPEMD160(SHA256(x)) (Bitcoin 系列、Cosmos)
    Hash160,
    /// RIPEMD160(BLAKE256(x)) (Decred)
    Blake256Ripemd160,
    /// 双 BLAKE-256 (Decred Base58Check 校验和)
    Blake256d,
    /// Keccak-256 (Ethereum 系列、Tron)
    Keccak256,
    /// Blake2b-224 (Cardano)
    Blake2b224,
    /// Blake2b-256
    Blake2b256,
    /// 不做哈希，地址直接承载公钥 (Solana、Stellar、Polkadot ...)
    Identity,
}

impl Hasher {
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            Hasher::Sha256 => sha256(data).to_vec(),
            Hasher::Sha256d => sha256d(data).to_vec(),
            Hasher::Hash160 => hash160(data).to_vec(),
            Hasher::Blake256Ripemd160 => blake256_ripemd160(data).to_vec(),
            Hasher::Blake256d => blake256(&blake256(data)).to_vec(),
            Hasher::Keccak256 => keccak256(data).to_vec(),
            Hasher::Blake2b224 => blake2b_224(data).to_vec(),
            Hasher::Blake2b256 => Blake2b256::digest(data).to_vec(),
            Hasher::Identity => data.to_vec(),
        }
    }
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

pub fn sha256d(data: &[u8]) -> [u8; 32] {
    btc_sha256d::Hash::hash(data).to_byte_array()
}

pub fn hash160(data: &[u8]) -> [u8; 20] {
    btc_hash160::Hash::hash(data).to_byte_array()
}

pub fn blake256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&<Blake256 as blake_hash::Digest>::digest(data));
    out
}

pub fn blake256_ripemd160(data: &[u8]) -> [u8; 20] {
    ripemd160::Hash::hash(&blake256(data)).to_byte_array()
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

pub fn blake2b_224(data: &[u8]) -> [u8; 28] {
    let mut out = [0u8; 28];
    out.copy_from_slice(&Blake2b224::digest(data));
    out
}

pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Blake2b512::digest(data));
    out
}

pub fn blake2b_40(data: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    out.copy_from_slice(&Blake2b40::digest(data));
    out
}
