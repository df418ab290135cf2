//! Monetary helpers shared by the calculators.
//!
//! Percentages are percent numbers (`20` means 20%). Rounding is only applied
//! to presentation figures (shares, hourly cost); the breakdowns themselves
//! keep full precision.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// The largest amount accepted at the service boundary (10^15).
///
/// Keeps every intermediate product well inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Returns `pct` percent of `base`.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::percent_of;
/// use rust_decimal::Decimal;
///
/// let value = percent_of(Decimal::new(1000, 0), Decimal::new(833, 2));
/// assert_eq!(value, Decimal::new(833, 1));
/// ```
pub fn percent_of(base: Decimal, pct: Decimal) -> Decimal {
    base * pct / Decimal::ONE_HUNDRED
}

/// Rounds a figure to cents, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `value` as a percentage of `total`, rounded to two places.
///
/// A zero total yields zero.
pub fn share_percent(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    round_currency(value / total * Decimal::ONE_HUNDRED)
}

/// Checks that a monetary input is non-negative and within [`MAX_AMOUNT`].
///
/// The calculators accept any value; this is applied where input enters the
/// engine from outside.
pub fn validate_amount(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            value,
            message: "must not be negative".to_string(),
        });
    }

    if value > MAX_AMOUNT {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            value,
            message: format!("must not exceed {}", MAX_AMOUNT),
        });
    }

    Ok(value)
}
