//! 地址性能基准测试
//! 使用criterion进行性能测试

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ironcore_wallet_core::coin;
use ironcore_wallet_core::domain::{CoinType, PublicKey, PublicKeyType};
use ironcore_wallet_core::AnyAddress;

const PUBKEY: &str = "02753f5c275e1847ba4d2fd3df36ad00af2e165650b35fe3991e9c9c46f68b12bc";

fn bench_validate(c: &mut Criterion) {
    let cases = [
        (CoinType::Bitcoin, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"),
        (CoinType::Ethereum, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        (CoinType::Polkadot, "16fir1SPRAaWGtF4ZkKNDq3S6LnD9mbphGXqL923DoH85Exz"),
        (CoinType::BitcoinCash, "bitcoincash:qzxf0wl63ahx6jsxu8uuldcw7n5aatwppvnteraqaw"),
    ];

    for (coin, address) in cases {
        c.bench_function(&format!("validate_{}", coin.descriptor().id), |b| {
            b.iter(|| coin::validate_address(black_box(coin), black_box(address)))
        });
    }
}

fn bench_derive(c: &mut Criterion) {
    let key = PublicKey::from_hex(PUBKEY, PublicKeyType::Secp256k1).unwrap();

    c.bench_function("derive_bitcoin", |b| {
        b.iter(|| AnyAddress::create_from_public_key(black_box(&key), CoinType::Bitcoin))
    });
    c.bench_function("derive_ethereum", |b| {
        b.iter(|| AnyAddress::create_from_public_key(black_box(&key), CoinType::Ethereum))
    });
}

criterion_group!(benches, bench_validate, bench_derive);
criterion_main!(benches);
