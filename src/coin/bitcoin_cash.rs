//! Bitcoin Cash / eCash
//!
//! 只接受 CashAddr；规范形式带前缀且全小写

use crate::codec::cashaddr::{self, CashAddrType};
use crate::coin::CoinEntry;
use crate::domain::{CoinType, PublicKey, PublicKeyType};
use crate::error::{AddressError, CoinError};

pub struct BitcoinCashEntry;

fn prefix(coin: CoinType) -> Result<&'static str, AddressError> {
    coin.descriptor()
        .hrp
        .ok_or_else(|| AddressError::format(format!("{} has no cashaddr prefix", coin)))
}

impl CoinEntry for BitcoinCashEntry {
    fn address_to_data(&self, coin: CoinType, address: &str) -> Result<Vec<u8>, AddressError> {
        let (_, hash) = cashaddr::decode(address, prefix(coin)?)?;
        Ok(hash)
    }

    fn normalize_address(&self, coin: CoinType, address: &str) -> String {
        let canonical = prefix(coin).and_then(|p| {
            let (kind, hash) = cashaddr::decode(address, p)?;
            cashaddr::encode(p, kind, &hash)
        });
        canonical.unwrap_or_else(|_| address.to_string())
    }

    fn derive_address(&self, coin: CoinType, public_key: &PublicKey) -> Result<String, CoinError> {
        let key = public_key.to_type(PublicKeyType::Secp256k1)?;
        let hash = coin.descriptor().hasher.hash(key.bytes());
        Ok(cashaddr::encode(prefix(coin)?, CashAddrType::P2pkh, &hash)?)
    }
}
