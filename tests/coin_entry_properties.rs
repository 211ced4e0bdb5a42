//! 适配器通用性质测试
//!
//! 对每个币种使用随机公钥：派生结果必须可验证、规范化幂等、地址数据确定且不跨链

mod common;

use ironcore_wallet_core::coin;
use ironcore_wallet_core::domain::{Blockchain, CoinType};
use ironcore_wallet_core::AnyAddress;

const ROUNDS: usize = 8;

/// 同一链族共享地址格式；Ronin 兼容 0x 前缀的以太坊地址
fn may_share_addresses(from: CoinType, to: CoinType) -> bool {
    let (a, b) = (from.descriptor().blockchain, to.descriptor().blockchain);
    a == b || (a == Blockchain::Ethereum && b == Blockchain::Ronin)
}

#[test]
fn test_derived_addresses_validate() {
    let mut rng = rand::thread_rng();

    for coin in CoinType::ALL {
        for _ in 0..ROUNDS {
            let key = common::random_key_for(&mut rng, coin);
            let address = coin::derive_address(coin, &key)
                .unwrap_or_else(|e| panic!("{} derive failed: {}", coin, e));

            assert!(coin::validate_address(coin, &address), "{}: {}", coin, address);

            let from_key = AnyAddress::create_from_public_key(&key, coin).unwrap();
            let parsed = AnyAddress::create_from_string(&address, coin).unwrap();
            assert_eq!(from_key, parsed, "{}", coin);
        }
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let mut rng = rand::thread_rng();

    for coin in CoinType::ALL {
        let key = common::random_key_for(&mut rng, coin);
        let address = coin::derive_address(coin, &key).unwrap();

        let once = coin::normalize_address(coin, &address).unwrap();
        let twice = coin::normalize_address(coin, &once).unwrap();
        assert_eq!(once, twice, "{}", coin);
        assert_eq!(once, address, "{} derives a non-canonical address", coin);
    }
}

#[test]
fn test_address_data_is_deterministic() {
    let mut rng = rand::thread_rng();

    for coin in CoinType::ALL {
        let key = common::random_key_for(&mut rng, coin);
        let address = coin::derive_address(coin, &key).unwrap();

        let first = coin::address_to_data(coin, &address).unwrap();
        let second = coin::address_to_data(coin, &address).unwrap();
        assert_eq!(first, second, "{}", coin);
        assert!(!first.is_empty(), "{}", coin);
    }
}

#[test]
fn test_addresses_do_not_cross_chains() {
    let mut rng = rand::thread_rng();

    for from in CoinType::ALL {
        let key = common::random_key_for(&mut rng, from);
        let address = coin::derive_address(from, &key).unwrap();

        for to in CoinType::ALL {
            if may_share_addresses(from, to) {
                continue;
            }
            assert!(
                !coin::validate_address(to, &address),
                "{} address {} accepted by {}",
                from,
                address,
                to
            );
        }
    }
}

#[test]
fn test_same_family_different_network_is_rejected() {
    let mut rng = rand::thread_rng();
    let pairs = [
        (CoinType::Bitcoin, CoinType::Litecoin),
        (CoinType::Dogecoin, CoinType::Dash),
        (CoinType::BitcoinCash, CoinType::ECash),
        (CoinType::Polkadot, CoinType::Kusama),
        (CoinType::Cosmos, CoinType::Binance),
    ];

    for (a, b) in pairs {
        let key = common::random_key_for(&mut rng, a);
        let address = coin::derive_address(a, &key).unwrap();
        assert!(!coin::validate_address(b, &address), "{} accepted {} address", b, a);
    }
}

#[test]
fn test_garbage_is_rejected_everywhere() {
    for coin in CoinType::ALL {
        for input in ["", " ", "0x", "not an address", "\u{1F600}"] {
            assert!(!coin::validate_address(coin, input), "{} accepted {:?}", coin, input);
            assert!(AnyAddress::create_from_string(input, coin).is_none());
        }
    }
}
