//! Decimal parsing and display helpers.
//!
//! Two parsing flavours exist: the lenient one feeds live recomputation and
//! never fails, the strict one feeds submission validation.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Parses user-entered text as a decimal, accepting plain and scientific notation.
///
/// Returns `None` for blank or unparseable input.
pub fn parse_decimal_strict(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses an optional text field as a decimal, falling back to zero.
pub fn parse_decimal_lenient(value: Option<&str>, field_name: &str) -> Decimal {
    let Some(raw) = value else {
        return Decimal::ZERO;
    };
    match parse_decimal_strict(raw) {
        Some(d) => d,
        None => {
            if !raw.trim().is_empty() {
                log::debug!(
                    "Could not parse {} '{}' as a number. Falling back to ZERO.",
                    field_name,
                    raw
                );
            }
            Decimal::ZERO
        }
    }
}

/// Parses an optional text field as a whole month count, falling back to zero.
///
/// Fractional input is truncated toward zero, negative input becomes zero and
/// values beyond `u32::MAX` saturate.
pub fn parse_months_lenient(value: Option<&str>) -> u32 {
    let Some(raw) = value else {
        return 0;
    };
    let trimmed = raw.trim();
    if let Ok(months) = trimmed.parse::<i64>() {
        return months.clamp(0, u32::MAX as i64) as u32;
    }
    match parse_decimal_strict(trimmed) {
        Some(d) if d.is_sign_positive() => d.trunc().to_u32().unwrap_or(u32::MAX),
        Some(_) => 0,
        None => {
            if !trimmed.is_empty() {
                log::debug!("Could not parse duration '{}'. Falling back to 0.", raw);
            }
            0
        }
    }
}

/// Parses text as a strictly positive whole number of months.
pub fn parse_months_strict(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|months| *months > 0)
}

/// Rounds a value to two decimals for presentation.
///
/// Only call this at the display boundary. Internal values keep full precision.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats a value with exactly two decimals, e.g. `1240` -> `"1240.00"`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_for_display(value);
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    rounded.to_string()
}
