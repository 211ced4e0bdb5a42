//! 测试辅助模块
//! 提供随机公钥与签名器桩

#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::Result;
use ironcore_wallet_core::coin::TransactionSigner;
use ironcore_wallet_core::domain::{CoinType, PublicKey, PublicKeyType};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{Rng, RngCore};

/// 固定 secp256k1 压缩公钥
pub const SECP256K1_PUBKEY: &str =
    "02753f5c275e1847ba4d2fd3df36ad00af2e165650b35fe3991e9c9c46f68b12bc";

fn random_ed25519<R: RngCore>(rng: &mut R) -> [u8; 32] {
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);
    ed25519_dalek::SigningKey::from_bytes(&seed)
        .verifying_key()
        .to_bytes()
}

/// 生成指定类型的随机公钥
pub fn random_public_key<R: RngCore + rand::CryptoRng>(rng: &mut R, key_type: PublicKeyType) -> PublicKey {
    let bytes = match key_type {
        PublicKeyType::Secp256k1 | PublicKeyType::Secp256k1Extended => {
            let secret = k256::SecretKey::random(rng);
            secret
                .public_key()
                .to_encoded_point(key_type == PublicKeyType::Secp256k1)
                .as_bytes()
                .to_vec()
        }
        PublicKeyType::Nist256p1 => {
            let mut bytes = vec![if rng.gen::<bool>() { 0x02 } else { 0x03 }];
            bytes.extend_from_slice(&rng.gen::<[u8; 32]>());
            bytes
        }
        PublicKeyType::Nist256p1Extended => {
            let mut bytes = vec![0x04];
            bytes.extend_from_slice(&rng.gen::<[u8; 32]>());
            bytes.extend_from_slice(&rng.gen::<[u8; 32]>());
            bytes
        }
        PublicKeyType::Ed25519 | PublicKeyType::Ed25519Blake2b => random_ed25519(rng).to_vec(),
        PublicKeyType::Ed25519Cardano => {
            let mut bytes = Vec::with_capacity(128);
            bytes.extend_from_slice(&random_ed25519(rng));
            bytes.extend_from_slice(&rng.gen::<[u8; 32]>());
            bytes.extend_from_slice(&random_ed25519(rng));
            bytes.extend_from_slice(&rng.gen::<[u8; 32]>());
            bytes
        }
    };

    PublicKey::new(&bytes, key_type).expect("generated key must be valid")
}

/// 为币种生成随机公钥
pub fn random_key_for<R: RngCore + rand::CryptoRng>(rng: &mut R, coin: CoinType) -> PublicKey {
    random_public_key(rng, coin.descriptor().public_key_type)
}

/// 记录所有调用的签名器
#[derive(Default)]
pub struct RecordingSigner {
    pub calls: Mutex<Vec<(CoinType, String)>>,
}

impl TransactionSigner for RecordingSigner {
    fn sign(&self, coin: CoinType, input: &[u8]) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((coin, format!("sign:{}", hex::encode(input))));
        let mut out = b"signed:".to_vec();
        out.extend_from_slice(input);
        Ok(out)
    }

    fn sign_json(&self, coin: CoinType, json: &str, private_key: &[u8]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((coin, format!("sign_json:{}", json)));
        Ok(format!("{{\"signed\":{},\"key_len\":{}}}", json, private_key.len()))
    }
}

/// 总是失败的签名器
pub struct FailingSigner;

impl TransactionSigner for FailingSigner {
    fn sign(&self, _coin: CoinType, _input: &[u8]) -> Result<Vec<u8>> {
        anyhow::bail!("hardware wallet disconnected")
    }

    fn sign_json(&self, _coin: CoinType, _json: &str, _private_key: &[u8]) -> Result<String> {
        anyhow::bail!("hardware wallet disconnected")
    }
}
