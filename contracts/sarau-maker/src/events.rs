use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub currency: BytesN<32>,
    pub oracle_decimals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleSignerUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub signer: BytesN<32>,
}

// Default topic name would be 34 chars, over the 32-char Symbol limit.
#[contractevent(topics = ["oracle_decimals_updated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleDecimalsUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub decimals: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub usd_fee: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceUpdatedEventData {
    pub price: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SarauCreatedEventData {
    #[topic]
    pub index: u32,
    pub creator: Address,
    pub max_mint: u64,
    pub start_date: u64,
    pub end_date: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SarauCodeUpdatedEventData {
    #[topic]
    pub index: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEventData {
    #[topic]
    pub index: u32,
    pub minter: Address,
}
