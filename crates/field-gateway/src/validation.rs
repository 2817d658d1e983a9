//! Request validation: coerces an untyped JSON payload into a
//! [`CalculationRequest`] or reports the first violated rule.
//!
//! The rules form an ordered chain; validation short-circuits on the
//! first failure and never returns partial results. Distance elements
//! are converted and positivity-checked one at a time, in sequence
//! order.

use crate::domain::error::ApiError;
use crate::domain::types::CalculationRequest;
use serde_json::Value;

/// Parse a raw request body.
///
/// A body that is absent, malformed JSON, `null`, a non-object, or an
/// empty object all count as "no data sent".
pub fn parse_body(body: &str) -> Result<CalculationRequest, ApiError> {
    let payload: Value = serde_json::from_str(body).map_err(|_| ApiError::no_data())?;
    parse_request(&payload)
}

/// Validate an already-parsed payload against the rule chain.
pub fn parse_request(payload: &Value) -> Result<CalculationRequest, ApiError> {
    let object = match payload.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ApiError::no_data()),
    };

    let raw_current = object.get("I").ok_or_else(ApiError::missing_current)?;
    let raw_distances = object
        .get("distances")
        .ok_or_else(ApiError::missing_distances)?;

    let current = coerce_number(raw_current)
        .ok_or_else(|| ApiError::current_not_numeric(json_type_name(raw_current)))?;

    let elements = raw_distances
        .as_array()
        .ok_or_else(|| ApiError::distances_not_array(json_type_name(raw_distances)))?;

    if elements.is_empty() {
        return Err(ApiError::empty_distances());
    }

    // NaN is not > 0, so it fails here rather than reaching the calculator.
    if !(current > 0.0) {
        return Err(ApiError::non_positive_current(current));
    }

    let mut distances = Vec::with_capacity(elements.len());
    for (index, raw) in elements.iter().enumerate() {
        let distance =
            coerce_number(raw).ok_or_else(|| ApiError::distance_not_numeric(index, raw))?;
        if !(distance > 0.0) {
            return Err(ApiError::non_positive_distance(index, distance));
        }
        distances.push(distance);
    }

    Ok(CalculationRequest { current, distances })
}

/// Coerce a JSON value to f64: numbers directly, strings via float
/// parsing. Booleans, null, and containers are not numbers.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// JSON type name for error details.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
