use soroban_sdk::{Address, BytesN, Env};

use crate::types::{MakerConfig, SarauRecord, StorageKey};

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent entries (30 days)
const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

pub fn get_config(e: &Env) -> Option<MakerConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, MakerConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

pub fn set_config(e: &Env, config: &MakerConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn sarau_exists(e: &Env, index: u32) -> bool {
    e.storage().persistent().has(&StorageKey::Sarau(index))
}

pub fn get_sarau(e: &Env, index: u32) -> Option<SarauRecord> {
    let key = StorageKey::Sarau(index);
    let sarau = e.storage().persistent().get::<_, SarauRecord>(&key);
    if sarau.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    sarau
}

pub fn set_sarau(e: &Env, sarau: &SarauRecord) {
    let key = StorageKey::Sarau(sarau.id);
    e.storage().persistent().set(&key, sarau);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// The access-code hash lives beside the record so `get_sarau` never returns it.
/// Absent entry means the code was never set; the zero code is the only match then.
pub fn get_sarau_code(e: &Env, index: u32) -> Option<BytesN<32>> {
    let key = StorageKey::SarauCode(index);
    let code = e.storage().persistent().get::<_, BytesN<32>>(&key);
    if code.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    code
}

pub fn set_sarau_code(e: &Env, index: u32, code: &BytesN<32>) {
    let key = StorageKey::SarauCode(index);
    e.storage().persistent().set(&key, code);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn has_minted(e: &Env, index: u32, minter: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&StorageKey::MintedBy(index, minter.clone()))
}

pub fn set_minted(e: &Env, index: u32, minter: &Address) {
    let key = StorageKey::MintedBy(index, minter.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
