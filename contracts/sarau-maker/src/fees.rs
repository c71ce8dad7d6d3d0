use crate::errors::Error;

/// Computes the native-currency amount required to cover `creation_usd_fee`
/// at the last cached oracle price.
///
/// `native = creation_usd_fee * 10^oracle_decimals / cached_price`, where
/// `creation_usd_fee` carries 18 decimals and `cached_price` carries
/// `oracle_decimals` decimals, so the result carries 18 decimals of the
/// native currency. Division truncates toward zero; the creation gate
/// requires an exact match against this value, never a tolerance band.
///
/// # Errors
/// * `Error::PriceUnavailable` - Fee is nonzero but no price was ever cached
/// * `Error::FeeOverflow` - Numerator does not fit in 128 bits
pub fn required_fee(
    cached_price: u128,
    oracle_decimals: u32,
    creation_usd_fee: u128,
) -> Result<u128, Error> {
    // A zero fee is free regardless of oracle state; never touches the price.
    if creation_usd_fee == 0 {
        return Ok(0);
    }

    if cached_price == 0 {
        return Err(Error::PriceUnavailable);
    }

    let scale = 10u128
        .checked_pow(oracle_decimals)
        .ok_or(Error::FeeOverflow)?;

    let fee = creation_usd_fee
        .checked_mul(scale)
        .ok_or(Error::FeeOverflow)?
        .checked_div(cached_price)
        .ok_or(Error::FeeOverflow)?;

    Ok(fee)
}
