use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Decimal places carried by every derived monetary value
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// This is the single rounding rule for loan terms, paid totals and balances.
pub fn round2(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Largest amount a DECIMAL(19, 2) column holds
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, MONEY_SCALE);

/// Decimal places kept for an interest rate, matching DECIMAL(9, 4)
pub const RATE_SCALE: u32 = 4;

/// Largest interest rate a DECIMAL(9, 4) column holds
pub const MAX_RATE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, RATE_SCALE);

/// Sums amounts exactly and rounds once at the end.
///
/// # Errors
/// `Internal` when the sum overflows `Decimal`
pub fn sum_rounded<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let total = amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| AppError::internal("Amount total overflows"))?;

    Ok(round2(total))
}

/// Validates a caller-supplied monetary amount: strictly positive, at most 2
/// decimal places and no larger than `MAX_AMOUNT`
pub fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(AppError::invalid_input(format!(
            "{} must be greater than 0, got {}",
            field, amount
        )));
    }

    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AppError::invalid_input(format!(
            "{} must have at most {} decimal places, got {}",
            field, MONEY_SCALE, amount
        )));
    }

    validate_max_amount(field, amount)
}

/// Rejects amounts above `MAX_AMOUNT`
pub fn validate_max_amount(field: &str, amount: Decimal) -> Result<()> {
    if amount > MAX_AMOUNT {
        return Err(AppError::invalid_input(format!(
            "{} must not exceed {}, got {}",
            field, MAX_AMOUNT, amount
        )));
    }

    Ok(())
}

/// Validates an annual interest rate in percent: non-negative, at most 4
/// decimal places and no larger than `MAX_RATE`
pub fn validate_rate(rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO {
        return Err(AppError::invalid_input(format!(
            "Interest rate must not be negative, got {}",
            rate
        )));
    }

    if rate.normalize().scale() > RATE_SCALE {
        return Err(AppError::invalid_input(format!(
            "Interest rate must have at most {} decimal places, got {}",
            RATE_SCALE, rate
        )));
    }

    if rate > MAX_RATE {
        return Err(AppError::invalid_input(format!(
            "Interest rate must not exceed {}, got {}",
            MAX_RATE, rate
        )));
    }

    Ok(())
}
