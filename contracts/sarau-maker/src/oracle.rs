use soroban_sdk::{Bytes, BytesN, Env};

use crate::errors::Error;
use crate::types::PriceUpdate;

/// Oracle service for verifying signed price payloads (pull-oracle model).
/// The feed signs `currency || price` off-chain; callers relay the payload
/// and the contract checks it against the single trusted signer key.
/// No caching happens here; the factory caches the returned price.
pub struct OracleService;

impl OracleService {
    /// Verifies a price payload against the trusted signer and returns the
    /// embedded price.
    ///
    /// The trusted key being the zero key means the oracle is disabled and
    /// every verification fails. A payload claiming a different signer fails
    /// before any cryptography runs; a payload claiming the trusted signer
    /// with a forged signature traps in the host verifier.
    ///
    /// # Errors
    /// * `Error::OracleVerificationFailed` - Signer unset or signer mismatch
    pub fn verify_price_update(
        e: &Env,
        trusted_signer: &BytesN<32>,
        currency: &BytesN<32>,
        update: &PriceUpdate,
    ) -> Result<u128, Error> {
        if Self::is_signer_unset(e, trusted_signer) {
            return Err(Error::OracleVerificationFailed);
        }

        if update.public_key != *trusted_signer {
            return Err(Error::OracleVerificationFailed);
        }

        let message = Self::price_message(e, currency, update.price);
        e.crypto()
            .ed25519_verify(&update.public_key, &message, &update.signature);

        Ok(update.price)
    }

    /// Canonical signed message: 32 currency bytes followed by the price as
    /// 16 big-endian bytes. The off-chain feed must sign exactly these bytes.
    pub fn price_message(e: &Env, currency: &BytesN<32>, price: u128) -> Bytes {
        let mut message = Bytes::from_slice(e, &currency.to_array());
        message.extend_from_array(&price.to_be_bytes());
        message
    }

    pub fn is_signer_unset(e: &Env, signer: &BytesN<32>) -> bool {
        *signer == BytesN::from_array(e, &[0u8; 32])
    }
}
