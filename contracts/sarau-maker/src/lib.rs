#![no_std]

mod errors;
mod events;
mod fees;
mod oracle;
mod sarau;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

use crate::errors::Error;
use crate::events::*;
use crate::oracle::OracleService;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Fixed-point scale of the price feed when none is supplied at initialization
const DEFAULT_ORACLE_DECIMALS: u32 = 8;

// ============================================================================
// Contract
// ============================================================================

/// Sarau factory and registry.
///
/// Issues limited-edition, time-boxed collectible tokens ("saraus"):
/// - Creates saraus and tracks them by sequential 0-based index
/// - Prices the creation fee in the native currency from a signed price feed
/// - Gates minting behind a per-sarau access code, a per-address dedup ledger
///   and a total supply cap
///
/// Every call is atomic: it either commits all of its state mutations or
/// returns a specific error with none applied.
#[contract]
pub struct SarauMaker;

#[contractimpl]
impl SarauMaker {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the sarau factory.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `currency` - Price-feed asset identifier, zero-padded (e.g. "CELO")
    /// * `oracle_decimals` - Fixed-point scale of the feed; defaults to 8
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: &Env,
        admin: Address,
        currency: BytesN<32>,
        oracle_decimals: Option<u32>,
    ) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let decimals = oracle_decimals.unwrap_or(DEFAULT_ORACLE_DECIMALS);
        let config = MakerConfig {
            admin: admin.clone(),
            currency: currency.clone(),
            oracle_signer: BytesN::from_array(e, &[0u8; 32]),
            oracle_decimals: decimals,
            cached_price: 0,
            creation_usd_fee: 0,
            total_saraus: 0,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            currency,
            oracle_decimals: decimals,
        }
        .publish(e);

        Ok(())
    }

    /// Get factory configuration
    pub fn get_config(e: &Env) -> Result<MakerConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    // ========================================================================
    // ORACLE ADMINISTRATION
    // ========================================================================

    /// Set the ed25519 key trusted to sign price payloads (admin only).
    /// The zero key disables price updates entirely.
    pub fn set_oracle_signer(e: &Env, admin: Address, signer: BytesN<32>) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::NotAuthorized);
        }

        config.oracle_signer = signer.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        OracleSignerUpdatedEventData {
            admin: admin.clone(),
            signer,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Set the fixed-point scale of the price feed (admin only)
    pub fn set_oracle_decimals(e: &Env, admin: Address, decimals: u32) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::NotAuthorized);
        }

        config.oracle_decimals = decimals;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        OracleDecimalsUpdatedEventData {
            admin: admin.clone(),
            decimals,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Set the per-creation fee in 18-decimal USD units (admin only)
    pub fn set_creation_usd_fee(e: &Env, admin: Address, usd_fee: u128) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::NotAuthorized);
        }

        config.creation_usd_fee = usd_fee;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        CreationFeeUpdatedEventData {
            admin: admin.clone(),
            usd_fee,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Verify a signed price payload and cache the embedded price.
    ///
    /// Open to any caller: the oracle signature is the authorization. Fee
    /// computation always reads the cached value, never the feed, so the
    /// cache is only as fresh as the last call to this entry point.
    ///
    /// # Errors
    /// * `Error::OracleVerificationFailed` - Signer unset or payload not
    ///   signed by the trusted key; the cached price is left unchanged
    pub fn update_price(e: &Env, update: PriceUpdate) -> Result<u128, Error> {
        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        let price =
            OracleService::verify_price_update(e, &config.oracle_signer, &config.currency, &update)?;

        config.cached_price = price;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        PriceUpdatedEventData { price }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(price)
    }

    /// Last cached price of the native currency, scaled by `oracle_decimals`
    pub fn get_price(e: &Env) -> Result<u128, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.cached_price)
    }

    /// Native-currency amount a creator must attach to `create_sarau` right now
    pub fn required_fee(e: &Env) -> Result<u128, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        fees::required_fee(
            config.cached_price,
            config.oracle_decimals,
            config.creation_usd_fee,
        )
    }

    // ========================================================================
    // SARAU CREATION
    // ========================================================================

    /// Create a new sarau.
    ///
    /// The attached amount must equal the required fee exactly, including the
    /// zero-fee case: attaching anything against a free creation fails too.
    /// The new sarau is allocated and initialized atomically and recorded
    /// under the next sequential index, which is returned.
    ///
    /// # Arguments
    /// * `creator` - Account paying for the creation
    /// * `max_mint` - Cap on total successful mints
    /// * `start_date` / `end_date` - Unix-timestamp mint window, inclusive
    /// * `uri`, `homepage`, `name`, `symbol` - Immutable display metadata
    /// * `attached_amount` - Native amount attached to the call
    ///
    /// # Errors
    /// * `Error::PriceUnavailable` - Nonzero fee but no price was ever cached
    /// * `Error::IncorrectFee` - Attached amount differs from the required fee
    /// * `Error::InvalidStartDate` / `InvalidEndDate` / `EndBeforeStart` -
    ///   Malformed schedule, first violation reported
    pub fn create_sarau(
        e: &Env,
        creator: Address,
        max_mint: u64,
        start_date: u64,
        end_date: u64,
        uri: String,
        homepage: String,
        name: String,
        symbol: String,
        attached_amount: u128,
    ) -> Result<u32, Error> {
        creator.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        let fee = fees::required_fee(
            config.cached_price,
            config.oracle_decimals,
            config.creation_usd_fee,
        )?;

        if attached_amount != fee {
            return Err(Error::IncorrectFee);
        }

        let id = config.total_saraus;
        sarau::initialize(
            e, id, &creator, max_mint, start_date, end_date, uri, homepage, name, symbol,
        )?;

        config.total_saraus += 1;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        SarauCreatedEventData {
            index: id,
            creator: creator.clone(),
            max_mint,
            start_date,
            end_date,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(id)
    }

    /// Overwrite a sarau's access-code hash (admin only)
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - Caller is not the factory admin
    /// * `Error::UnknownSarau` - No sarau at this index
    pub fn set_sarau_code(
        e: &Env,
        admin: Address,
        index: u32,
        code: BytesN<32>,
    ) -> Result<(), Error> {
        admin.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::NotAuthorized);
        }

        if !sarau_exists(e, index) {
            return Err(Error::UnknownSarau);
        }

        set_sarau_code(e, index, &code);

        SarauCodeUpdatedEventData { index }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // MINTING
    // ========================================================================

    /// Mint one unit of a sarau's token to `minter`.
    ///
    /// Checks run in a fixed order and the first violated one is reported:
    /// mint window, per-address dedup, supply cap, access code. At most one
    /// unit per address per sarau, ever.
    ///
    /// # Errors
    /// * `Error::UnknownSarau` - No sarau at this index
    /// * `Error::OutsideMintWindow` - Before `start_date` or after `end_date`
    /// * `Error::AlreadyMinted` - `minter` already minted in this sarau
    /// * `Error::MaxMintReached` - Supply cap exhausted
    /// * `Error::InvalidMintCode` - Submitted code does not match the stored one
    pub fn mint(e: &Env, minter: Address, index: u32, code: BytesN<32>) -> Result<u64, Error> {
        minter.require_auth();

        let minted_count = sarau::mint(e, index, &minter, &code)?;

        MintedEventData { index, minter }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(minted_count)
    }

    // ========================================================================
    // READ SURFACE
    // ========================================================================

    /// Get a sarau record by creation index
    pub fn get_sarau(e: &Env, index: u32) -> Result<SarauRecord, Error> {
        get_sarau(e, index).ok_or(Error::UnknownSarau)
    }

    /// Number of saraus created so far
    pub fn get_sarau_count(e: &Env) -> Result<u32, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.total_saraus)
    }

    /// Mint-window state, derived from the current ledger timestamp
    pub fn get_status(e: &Env, index: u32) -> Result<SarauStatus, Error> {
        let record = get_sarau(e, index).ok_or(Error::UnknownSarau)?;
        Ok(sarau::status(e, &record))
    }

    /// Whether `owner` has minted in this sarau
    pub fn has_minted(e: &Env, index: u32, owner: Address) -> Result<bool, Error> {
        if !sarau_exists(e, index) {
            return Err(Error::UnknownSarau);
        }
        Ok(has_minted(e, index, &owner))
    }

    /// Units of this sarau's token held by `owner` (0 or 1)
    pub fn balance_of(e: &Env, index: u32, owner: Address) -> Result<u32, Error> {
        if !sarau_exists(e, index) {
            return Err(Error::UnknownSarau);
        }
        Ok(sarau::balance_of(e, index, &owner))
    }

    /// Metadata URI shared by every unit of this sarau's token
    pub fn token_uri(e: &Env, index: u32) -> Result<String, Error> {
        let record = get_sarau(e, index).ok_or(Error::UnknownSarau)?;
        Ok(record.uri)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
