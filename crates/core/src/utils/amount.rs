//! Money arithmetic that reports overflow as an error instead of panicking.

use rust_decimal::Decimal;

use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

/// Rejects amounts above [`MAX_AMOUNT`]. `field` names the input in the message.
pub fn ensure_within_max(field: &str, amount: Decimal) -> Result<()> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidInput(format!(
            "{field} must not exceed {MAX_AMOUNT}"
        ))
        .into());
    }
    Ok(())
}

pub fn checked_add(total: Decimal, amount: Decimal) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| overflow(format!("{total} + {amount}")))
}

pub fn checked_sub(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_sub(right)
        .ok_or_else(|| overflow(format!("{left} - {right}")))
}

pub fn checked_div(dividend: Decimal, divisor: Decimal) -> Result<Decimal> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| overflow(format!("{dividend} / {divisor}")))
}

pub fn checked_mul(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_mul(right)
        .ok_or_else(|| overflow(format!("{left} * {right}")))
}

/// Sum of all amounts, or an error once the running total leaves the `Decimal` range.
pub fn checked_sum<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}

fn overflow(expression: String) -> Error {
    Error::Unexpected(format!("amount out of range: {expression}"))
}
