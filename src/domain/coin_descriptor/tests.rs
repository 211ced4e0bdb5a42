//! 描述表一致性测试

use super::*;

#[test]
fn test_descriptor_table_is_consistent() {
    let registry = CoinRegistry::new();
    if let Err(errors) = registry.validate_configs() {
        panic!("invalid descriptors: {:#?}", errors);
    }
}

#[test]
fn test_every_coin_has_descriptor() {
    for coin in CoinType::ALL {
        assert_eq!(descriptor_for(coin).coin, coin);
    }
}

#[test]
fn test_ids_are_unique() {
    let registry = CoinRegistry::new();
    for coin in CoinType::ALL {
        let d = descriptor_for(coin);
        assert_eq!(registry.get_by_id(d.id).map(|x| x.coin), Some(coin));
    }
}

#[test]
fn test_lookup_by_symbol() {
    let registry = CoinRegistry::new();

    let eth = registry.get_by_symbol("ETH").unwrap();
    assert_eq!(eth.coin, CoinType::Ethereum);
    assert_eq!(eth.slip44, 60);

    // BNB 同时是 Beacon Chain 与 Smart Chain 的符号，数值较小者优先
    assert_eq!(
        registry.get_by_symbol("bnb").map(|d| d.coin),
        Some(CoinType::Binance)
    );

    let sol = registry.get_by_symbol("SOL").unwrap();
    assert_eq!(sol.curve, CurveType::Ed25519);
    assert!(registry.get_by_symbol("NOPE").is_none());
}

#[test]
fn test_bip44_path_derivation() {
    let btc = descriptor_for(CoinType::Bitcoin);
    assert_eq!(
        btc.derivation_path(0, 0, 0).unwrap().to_string(),
        "m/84'/0'/0'/0/0"
    );

    let eth = descriptor_for(CoinType::Ethereum);
    assert_eq!(
        eth.derivation_path(1, 0, 3).unwrap().to_string(),
        "m/44'/60'/1'/0/3"
    );

    // BSC 使用与 ETH 相同的派生路径
    let bsc = descriptor_for(CoinType::SmartChain);
    assert_eq!(bsc.derivation_path_template, eth.derivation_path_template);

    let ada = descriptor_for(CoinType::Cardano);
    assert_eq!(
        ada.derivation_path(0, 2, 0).unwrap().to_string(),
        "m/1852'/1815'/0'/2/0"
    );
}

#[test]
fn test_slip10_paths_stay_hardened() {
    let sol = descriptor_for(CoinType::Solana);
    assert_eq!(
        sol.derivation_path(2, 0, 9).unwrap().to_string(),
        "m/44'/501'/2'/0'"
    );

    let xlm = descriptor_for(CoinType::Stellar);
    assert_eq!(
        xlm.derivation_path(4, 0, 0).unwrap().to_string(),
        "m/44'/148'/4'"
    );
}

#[test]
fn test_curve_grouping() {
    let registry = CoinRegistry::new();

    let secp256k1 = registry.get_by_curve_type(CurveType::Secp256k1);
    assert!(secp256k1.iter().any(|d| d.coin == CoinType::Bitcoin));
    assert!(secp256k1.iter().any(|d| d.coin == CoinType::Tron));

    let ed25519 = registry.get_by_curve_type(CurveType::Ed25519);
    assert!(ed25519.iter().any(|d| d.coin == CoinType::Polkadot));
    assert!(ed25519.iter().all(|d| d.public_key_type == PublicKeyType::Ed25519));

    assert_eq!(
        registry.get_by_curve_type(CurveType::Nist256p1)[0].coin,
        CoinType::Neo
    );
    assert_eq!(registry.list_all().len(), CoinType::ALL.len());
}

#[test]
fn test_blockchain_grouping() {
    let registry = CoinRegistry::new();
    let evm: Vec<CoinType> = registry
        .get_by_blockchain(Blockchain::Ethereum)
        .iter()
        .map(|d| d.coin)
        .collect();
    assert!(evm.contains(&CoinType::Polygon));
    assert!(evm.contains(&CoinType::SmartChain));
    assert!(!evm.contains(&CoinType::Ronin));
}

#[test]
fn test_address_parameters() {
    let zec = descriptor_for(CoinType::Zcash);
    assert_eq!(zec.p2pkh_prefix, &[0x1c, 0xb8]);
    assert_eq!(zec.p2sh_prefix, &[0x1c, 0xbd]);

    assert_eq!(descriptor_for(CoinType::Kusama).ss58_prefix, Some(2));
    assert_eq!(descriptor_for(CoinType::Litecoin).hrp, Some("ltc"));
    assert_eq!(descriptor_for(CoinType::Dogecoin).hrp, None);

    let dcr = descriptor_for(CoinType::Decred);
    assert_eq!(dcr.p2pkh_prefix, &[0x07, 0x3f]);
    assert_eq!(dcr.hasher, Hasher::Blake256Ripemd160);
}

#[test]
fn test_hasher_matches_blockchain() {
    for coin in CoinType::ALL {
        let d = descriptor_for(coin);
        assert_eq!(d.hasher, key_hasher(d.blockchain), "{}", d.name);
    }

    // 哈希与链族不一致的描述会被检查出来
    let mut drifted = descriptor_for(CoinType::Cosmos).clone();
    drifted.hasher = Hasher::Sha256;
    assert_ne!(drifted.hasher, key_hasher(drifted.blockchain));
}
