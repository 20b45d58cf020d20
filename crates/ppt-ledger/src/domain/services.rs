//! # Domain Services
//!
//! Pure conversion between human-readable decimal amounts and base units.
//! Deterministic, no side effects.
//!
//! One whole token is 10^decimals base units; the default PPT scale is 18,
//! so `parse_units("1000000", 18)` is the one-million-token supply the
//! deployment tooling uses.

use super::errors::AmountError;
use med_types::U256;

// =============================================================================
// DECIMAL → BASE UNITS
// =============================================================================

/// Parses a decimal token amount into base units.
///
/// Accepts an optional fractional part of at most `decimals` digits:
/// `parse_units("50", 18)` is fifty whole tokens, `parse_units("0.5", 18)`
/// is 5 × 10^17 base units.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountError::InvalidDecimal(amount.to_string()));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::InvalidDecimal(amount.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            digits: fraction.len(),
            decimals,
        });
    }

    // Shift the decimal point right by `decimals` digits, then parse once.
    let mut base_units = String::with_capacity(whole.len() + decimals as usize);
    base_units.push_str(whole);
    base_units.push_str(fraction);
    for _ in fraction.len()..decimals as usize {
        base_units.push('0');
    }

    U256::from_dec_str(&base_units).map_err(|_| AmountError::TooLarge)
}

// =============================================================================
// BASE UNITS → DECIMAL
// =============================================================================

/// Formats base units as a decimal string, trimming trailing fractional
/// zeros.
///
/// Inverse of [`parse_units`] for displayable values:
/// `format_units(5 × 10^17, 18)` is `"0.5"`, one whole token is `"1"`.
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let formatted = if digits.len() <= decimals {
        format!("0.{}{digits}", "0".repeat(decimals - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        format!("{whole}.{fraction}")
    };

    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// =============================================================================
// TESTS
// =============================================================================
