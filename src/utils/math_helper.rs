use alloy::primitives::{I256, U256};
use anyhow::{Context, Result};

/// Computes the signed net position from raw deposit and debt amounts.
///
/// The subtraction happens in the raw integer domain; converting to f64 before
/// subtracting would lose precision on large balances. A negative result is a
/// valid position (debt exceeds deposit) and is preserved as-is.
pub fn net_position(deposit: U256, total_debt: U256) -> Result<I256> {
    let deposit = I256::try_from(deposit).context("Deposit balance exceeds the signed range")?;
    let total_debt = I256::try_from(total_debt).context("Debt balance exceeds the signed range")?;

    deposit
        .checked_sub(total_debt)
        .context("Net position underflowed the signed range")
}

/// Divides a raw amount by 10^precision into an f64 without converting the
/// full raw value to float first.
///
/// Errors instead of saturating when the scale or the scaled balance cannot
/// be represented; a token reporting an absurd `decimals` value lands here.
pub fn divide_by_precision_f64(value: U256, precision: u8) -> Result<f64> {
    let scale = U256::from(10)
        .checked_pow(U256::from(precision))
        .context("Decimal precision is too large to scale by")?;

    // Split into quotient and remainder so each part fits in f64 range
    let quotient = u128::try_from(value / scale)
        .context("Scaled balance exceeds the representable range")?;
    let remainder = u128::try_from(value % scale)
        .context("Scale remainder exceeds the representable range")?;
    let scale = u128::try_from(scale).context("Scale exceeds the representable range")?;

    Ok(quotient as f64 + (remainder as f64) / (scale as f64))
}

/// Sign-preserving variant of [`divide_by_precision_f64`].
pub fn divide_by_precision_signed_f64(value: I256, precision: u8) -> Result<f64> {
    let magnitude = divide_by_precision_f64(value.unsigned_abs(), precision)?;

    Ok(if value.is_negative() {
        -magnitude
    } else {
        magnitude
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_normalization() {
        let value = U256::from(150_000_000u64);
        assert_eq!(divide_by_precision_f64(value, 6).unwrap(), 150.0);
    }

    #[test]
    fn test_zero_precision_is_identity() {
        assert_eq!(divide_by_precision_f64(U256::from(42u64), 0).unwrap(), 42.0);
    }

    #[test]
    fn test_large_value_quotient_remainder_path() {
        // 2.5 * 10^18 with 18 decimals
        let value = U256::from(10).pow(U256::from(18)) * U256::from(25u64) / U256::from(10u64);
        assert_eq!(divide_by_precision_f64(value, 18).unwrap(), 2.5);
    }

    #[test]
    fn test_quotient_above_u128_is_an_error() {
        assert!(divide_by_precision_f64(U256::MAX, 18).is_err());
        assert!(divide_by_precision_signed_f64(I256::MAX, 0).is_err());
    }

    #[test]
    fn test_absurd_precision_is_an_error() {
        // 10^78 no longer fits in a U256
        assert!(divide_by_precision_f64(U256::from(1u64), 78).is_err());
        assert!(divide_by_precision_f64(U256::from(1u64), u8::MAX).is_err());
    }

    #[test]
    fn test_net_position_preserves_negative() {
        let net = net_position(U256::from(100u64), U256::from(130u64)).unwrap();
        assert_eq!(net, I256::try_from(-30i64).unwrap());
        assert_eq!(divide_by_precision_signed_f64(net, 0).unwrap(), -30.0);
    }

    #[test]
    fn test_net_position_positive() {
        let net = net_position(U256::from(500u64), U256::from(200u64)).unwrap();
        assert_eq!(divide_by_precision_signed_f64(net, 2).unwrap(), 3.0);
    }

    #[test]
    fn test_net_position_rejects_out_of_range_deposit() {
        assert!(net_position(U256::MAX, U256::ZERO).is_err());
    }
}
