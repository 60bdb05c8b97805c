use super::Params;
use crate::error::{CmcError, CmcResult};
use serde_json::Value;

/// Largest page size the API serves.
pub const MAX_LIMIT: i64 = 5000;
/// Largest number of historical data points per request.
pub const MAX_COUNT: i64 = 10_000;
/// Smallest amount the conversion tool accepts.
pub const MIN_AMOUNT: f64 = 1e-8;
/// Largest amount the conversion tool accepts.
pub const MAX_AMOUNT: f64 = 1e9;

/// Pagination arguments. Either may be omitted; `start` is 1-based.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination<'a> {
    pub start: Option<&'a Value>,
    pub limit: Option<&'a Value>,
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a fractional number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads an integer argument. Integral floats (`10.0`) are accepted; anything
/// else is a type error.
fn integer(name: &'static str, value: &Value) -> CmcResult<i64> {
    let mismatch = || CmcError::TypeMismatch {
        name,
        expected: "an integer",
        found: kind(value),
    };

    let Value::Number(number) = value else {
        return Err(mismatch());
    };

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.is_u64() {
        // Above i64::MAX; every caller clamps well below that.
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(mismatch()),
    }
}

pub fn clamp_start(value: &Value) -> CmcResult<i64> {
    Ok(integer("start", value)?.max(1))
}

pub fn clamp_limit(value: &Value) -> CmcResult<i64> {
    Ok(integer("limit", value)?.clamp(1, MAX_LIMIT))
}

pub fn clamp_count(value: &Value) -> CmcResult<i64> {
    Ok(integer("count", value)?.clamp(1, MAX_COUNT))
}

/// Type-checks and clamps `start`/`limit`, writing the ones supplied.
pub fn apply_pagination(params: &mut Params, pagination: Pagination<'_>) -> CmcResult<()> {
    if let Some(start) = pagination.start {
        params.insert("start".into(), clamp_start(start)?.to_string());
    }
    if let Some(limit) = pagination.limit {
        params.insert("limit".into(), clamp_limit(limit)?.to_string());
    }
    Ok(())
}

pub fn apply_count(params: &mut Params, count: Option<&Value>) -> CmcResult<()> {
    if let Some(count) = count {
        params.insert("count".into(), clamp_count(count)?.to_string());
    }
    Ok(())
}

/// Checks a conversion amount: it must be a number (booleans are rejected)
/// within `[MIN_AMOUNT, MAX_AMOUNT]`.
pub fn validate_amount(value: &Value) -> CmcResult<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
    .ok_or(CmcError::TypeMismatch {
        name: "amount",
        expected: "a number",
        found: kind(value),
    })?;

    if amount < MIN_AMOUNT {
        return Err(CmcError::OutOfRange {
            name: "amount",
            reason: format!("must be at least {MIN_AMOUNT:e}, got {amount:e}"),
        });
    }
    if amount > MAX_AMOUNT {
        return Err(CmcError::OutOfRange {
            name: "amount",
            reason: format!("must be at most {MAX_AMOUNT:e}, got {amount:e}"),
        });
    }
    Ok(amount)
}
