//! Adapters from free-form text fields to estimator inputs
//!
//! The strict parsers reject anything that is not a clean number. The lenient
//! parser reproduces digit-masking form behavior and never fails; callers opt
//! into it explicitly.

use crate::types::*;
use std::borrow::Cow;

/// Parse a non-negative whole count, rejecting anything malformed.
pub fn parse_count(field: &'static str, text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::invalid(field, InvalidReason::Missing));
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EstimateError::invalid(field, InvalidReason::Negative));
        }
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EstimateError::invalid(field, InvalidReason::NotANumber));
    }

    // Only digits remain, so the only possible failure is overflow
    trimmed
        .parse::<u64>()
        .map_err(|_| EstimateError::invalid(field, InvalidReason::Overflow))
}

/// Parse a non-negative decimal amount such as `49.90` or `49,90`.
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::invalid(field, InvalidReason::Missing));
    }

    let normalized: Cow<'_, str> = if !trimmed.contains('.') && trimmed.matches(',').count() == 1
    {
        Cow::Owned(trimmed.replace(',', "."))
    } else {
        Cow::Borrowed(trimmed)
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| EstimateError::invalid(field, InvalidReason::NotANumber))?;

    if !value.is_finite() {
        return Err(EstimateError::invalid(field, InvalidReason::NotFinite));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid(field, InvalidReason::Negative));
    }

    // Normalize -0.0
    Ok(value + 0.0)
}

/// Keep only the digits of `text`; no digits means zero.
///
/// `"12.500"` becomes 12500 and `"abc"` becomes 0. Saturates at `u64::MAX`.
pub fn parse_lenient(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}
