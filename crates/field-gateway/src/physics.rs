//! Field calculator: Biot-Savart law for a long straight wire.
//!
//! B = (μ₀ · I) / (2π · d), with μ₀ = 4π × 10⁻⁷ T·m/A exact. Pure
//! functions of their inputs; no state survives a call.

use crate::domain::types::{CalculationRequest, FieldSample};

/// Vacuum permeability μ₀ in T·m/A, exactly 4π × 10⁻⁷.
pub const MU_0: f64 = 4.0 * std::f64::consts::PI * 1e-7;

/// Domain errors from the calculator itself.
///
/// The HTTP validator already rejects non-positive inputs; these checks
/// keep the function safe for direct programmatic use.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Current must be strictly positive
    #[error("current must be greater than zero (got {0} A)")]
    NonPositiveCurrent(f64),

    /// Distance must be strictly positive
    #[error("distance must be greater than zero (got {0} m)")]
    NonPositiveDistance(f64),
}

/// Field magnitude in tesla at perpendicular distance `distance` from
/// an infinite straight wire carrying `current`.
///
/// Standard f64 semantics; no bounds on input magnitude.
pub fn magnetic_field(current: f64, distance: f64) -> Result<f64, FieldError> {
    if !(distance > 0.0) {
        return Err(FieldError::NonPositiveDistance(distance));
    }
    if !(current > 0.0) {
        return Err(FieldError::NonPositiveCurrent(current));
    }

    Ok((MU_0 * current) / (2.0 * std::f64::consts::PI * distance))
}

/// Evaluate the formula once per requested distance, preserving input
/// order.
pub fn evaluate(request: &CalculationRequest) -> Result<Vec<FieldSample>, FieldError> {
    request
        .distances
        .iter()
        .map(|&distance| {
            magnetic_field(request.current, distance).map(|field| FieldSample { distance, field })
        })
        .collect()
}
