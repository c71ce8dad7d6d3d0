use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Config,
    Sarau(u32),
    SarauCode(u32),
    MintedBy(u32, Address),
}

/// Factory-wide configuration and oracle cache. One instance per deployment,
/// mutated only through the documented admin setters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MakerConfig {
    pub admin: Address,
    /// Price-feed asset identifier, left-aligned and zero-padded (e.g. "CELO").
    pub currency: BytesN<32>,
    /// Ed25519 public key trusted to sign price payloads. The zero key means
    /// the oracle is disabled and every price update fails.
    pub oracle_signer: BytesN<32>,
    /// Fixed-point exponent of the price feed.
    pub oracle_decimals: u32,
    /// Last verified price of the native currency, scaled by `oracle_decimals`.
    /// Zero until the first successful update.
    pub cached_price: u128,
    /// Fee charged per sarau creation, in 18-decimal USD units.
    pub creation_usd_fee: u128,
    /// Number of saraus created so far; valid indexes are `0..total_saraus`.
    pub total_saraus: u32,
    pub updated_at: u64,
}

/// One sarau: a time-boxed, capped mint campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SarauRecord {
    pub id: u32,
    pub creator: Address,
    pub max_mint: u64,
    pub minted_count: u64,
    pub start_date: u64,
    pub end_date: u64,
    pub uri: String,
    pub homepage: String,
    pub name: String,
    pub symbol: String,
    pub created_at: u64,
}

/// Signed price assertion pulled from the off-chain feed (pull-oracle model).
/// The message covered by `signature` is `currency || price` as big-endian bytes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceUpdate {
    pub price: u128,
    pub public_key: BytesN<32>,
    pub signature: BytesN<64>,
}

/// Mint-window state, derived from the ledger timestamp on every call.
/// Never stored; there is no transition step that could go stale.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SarauStatus {
    Pending = 0,
    Open = 1,
    Closed = 2,
}

impl SarauStatus {
    pub fn as_u32(&self) -> u32 {
        match self {
            SarauStatus::Pending => 0,
            SarauStatus::Open => 1,
            SarauStatus::Closed => 2,
        }
    }

    pub fn from_timestamps(now: u64, start_date: u64, end_date: u64) -> SarauStatus {
        if now < start_date {
            SarauStatus::Pending
        } else if now > end_date {
            SarauStatus::Closed
        } else {
            SarauStatus::Open
        }
    }
}
