// crates/stress-module-items/src/handlers.rs
// ============================================================================
// Module: Stress Item Handlers
// Description: Handler functions for the built-in stress items.
// Purpose: Validate item parameters and produce typed item values.
// Dependencies: stress-module-core, tracing
// ============================================================================

//! ## Overview
//! Each handler receives the raw parameter list plus an [`ItemContext`] and
//! returns a typed value or an item failure. Handlers that ignore their
//! parameters accept any count. Numeric parameters use lenient integer parsing:
//! malformed input reads as `0` instead of failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use stress_module_core::ItemError;
use stress_module_core::ItemValue;

use crate::random::RandomGenerator;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of `stress.random.str` results (short text).
pub const STR_RESULT_LEN: usize = 249;
/// Length of `stress.random.txt` results (long text).
pub const TEXT_RESULT_LEN: usize = 506;
/// Lower bound of `stress.random.int`.
pub const RANDOM_INT_LOW: i32 = 0;
/// Upper bound of `stress.random.int` (inclusive).
pub const RANDOM_INT_HIGH: i32 = 2000;
/// Lower bound passed to the real formula for `stress.random.double`.
pub const RANDOM_DOUBLE_LOW: f64 = 1.0;
/// Upper bound passed to the real formula for `stress.random.double`.
pub const RANDOM_DOUBLE_HIGH: f64 = 2000.0;

// ============================================================================
// SECTION: Handler Context
// ============================================================================

/// Shared collaborators available to every handler.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    /// Generator used by the random items.
    pub random: &'a RandomGenerator,
    /// Path checked by `stress.file`.
    pub sentinel_path: &'a Path,
}

impl<'a> ItemContext<'a> {
    /// Creates a handler context.
    #[must_use]
    pub const fn new(random: &'a RandomGenerator, sentinel_path: &'a Path) -> Self {
        Self {
            random,
            sentinel_path,
        }
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// `stress.ping`: always `1`.
///
/// # Errors
///
/// Never fails.
pub fn ping(_params: &[String], _ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Unsigned(1))
}

/// `stress.echo`: returns its single parameter verbatim.
///
/// # Errors
///
/// Returns [`ItemError::InvalidParameterCount`] unless exactly one parameter is given.
pub fn echo(params: &[String], _ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    let [message] = params else {
        return Err(ItemError::InvalidParameterCount);
    };
    Ok(ItemValue::Str(message.clone()))
}

/// `stress.file`: `1` when the sentinel path exists, else `0`.
///
/// Any stat failure, including permission errors, reads as absent.
///
/// # Errors
///
/// Never fails.
pub fn file_exists(_params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    match fs::metadata(ctx.sentinel_path) {
        Ok(_) => Ok(ItemValue::Unsigned(1)),
        Err(err) => {
            tracing::debug!(
                path = %ctx.sentinel_path.display(),
                error = %err,
                "sentinel path not readable"
            );
            Ok(ItemValue::Unsigned(0))
        }
    }
}

/// `stress.random`: uniform integer in `[from, to]`.
///
/// Negative draws are reported as their two's complement unsigned value.
///
/// # Errors
///
/// Returns [`ItemError::InvalidParameterCount`] unless exactly two parameters
/// are given, and [`ItemError::InvalidRange`] when `from > to`.
pub fn random_range(params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    let [from, to] = params else {
        return Err(ItemError::InvalidParameterCount);
    };
    let from = parse_lenient_int(from);
    let to = parse_lenient_int(to);
    if from > to {
        return Err(ItemError::InvalidRange);
    }
    Ok(ItemValue::Unsigned(ctx.random.uniform_int(from, to).cast_unsigned()))
}

/// `stress.random.int`: uniform integer in `[0, 2000]`.
///
/// # Errors
///
/// Never fails.
pub fn random_int(_params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    let value = ctx.random.uniform_int(RANDOM_INT_LOW, RANDOM_INT_HIGH);
    Ok(ItemValue::Unsigned(value.cast_unsigned()))
}

/// `stress.random.double`: `1.0 + raw / 2000.0`.
///
/// # Errors
///
/// Never fails.
pub fn random_double(_params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Float(ctx.random.uniform_real(RANDOM_DOUBLE_LOW, RANDOM_DOUBLE_HIGH)))
}

/// `stress.random.str`: 249 random alphanumeric characters as short text.
///
/// # Errors
///
/// Never fails.
pub fn random_str(_params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Str(ctx.random.random_string(STR_RESULT_LEN)))
}

/// `stress.random.txt`: 506 random alphanumeric characters as long text.
///
/// # Errors
///
/// Never fails.
pub fn random_txt(_params: &[String], ctx: &ItemContext<'_>) -> Result<ItemValue, ItemError> {
    Ok(ItemValue::Text(ctx.random.random_string(TEXT_RESULT_LEN)))
}

// ============================================================================
// SECTION: Parameter Parsing
// ============================================================================

/// Parses a decimal integer the way C `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, and digits
/// are consumed up to the first non-digit. Input without digits yields `0`;
/// out-of-range values saturate at the `i32` bounds.
#[must_use]
pub fn parse_lenient_int(text: &str) -> i32 {
    let trimmed =
        text.trim_start_matches(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let limit = i64::from(i32::MAX) + 1;
    let mut magnitude: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        magnitude = (magnitude * 10 + i64::from(byte - b'0')).min(limit);
    }
    let signed = if negative { -magnitude } else { magnitude };
    let clamped = signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    i32::try_from(clamped).unwrap_or_default()
}
