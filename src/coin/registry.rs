//! 币种 → 适配器
//!
//! 先查描述表得到区块链族，再映射到 `'static` 的无状态适配器；只读、无锁

use crate::coin::bitcoin::BitcoinEntry;
use crate::coin::bitcoin_cash::BitcoinCashEntry;
use crate::coin::cardano::CardanoEntry;
use crate::coin::cosmos::CosmosEntry;
use crate::coin::decred::DecredEntry;
use crate::coin::ethereum::EthereumEntry;
use crate::coin::multiversx::MultiversXEntry;
use crate::coin::nano::NanoEntry;
use crate::coin::neo::NeoEntry;
use crate::coin::polkadot::PolkadotEntry;
use crate::coin::ripple::RippleEntry;
use crate::coin::ronin::RoninEntry;
use crate::coin::solana::SolanaEntry;
use crate::coin::stellar::StellarEntry;
use crate::coin::tron::TronEntry;
use crate::coin::zilliqa::ZilliqaEntry;
use crate::coin::CoinEntry;
use crate::domain::{Blockchain, CoinType};

pub fn resolve(coin: CoinType) -> &'static dyn CoinEntry {
    match coin.descriptor().blockchain {
        Blockchain::Bitcoin => &BitcoinEntry,
        Blockchain::BitcoinCash => &BitcoinCashEntry,
        Blockchain::Decred => &DecredEntry,
        Blockchain::Ethereum => &EthereumEntry,
        Blockchain::Ronin => &RoninEntry,
        Blockchain::Tron => &TronEntry,
        Blockchain::Ripple => &RippleEntry,
        Blockchain::Stellar => &StellarEntry,
        Blockchain::Solana => &SolanaEntry,
        Blockchain::Polkadot => &PolkadotEntry,
        Blockchain::Cosmos => &CosmosEntry,
        Blockchain::Zilliqa => &ZilliqaEntry,
        Blockchain::Nano => &NanoEntry,
        Blockchain::Cardano => &CardanoEntry,
        Blockchain::Neo => &NeoEntry,
        Blockchain::MultiversX => &MultiversXEntry,
    }
}
