//! Wire types for the calculation endpoint.
//!
//! All entities are transient: built per request, dropped once the
//! response is sent.

use serde::{Deserialize, Serialize};

/// A validated calculation request.
///
/// Invariants (enforced by [`crate::validation::parse_request`]):
/// `current > 0`, `distances` non-empty, every distance `> 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// Current through the wire, in amperes.
    pub current: f64,
    /// Perpendicular distances from the wire, in meters.
    pub distances: Vec<f64>,
}

/// One field sample: the field magnitude at a given distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    /// Distance from the wire, in meters.
    #[serde(rename = "d")]
    pub distance: f64,
    /// Magnetic field magnitude, in tesla.
    #[serde(rename = "B")]
    pub field: f64,
}

/// Response body for `POST /calculate`.
///
/// `results` has the same length and order as the input distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub results: Vec<FieldSample>,
}

/// Response body for the `GET /` status route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub description: String,
}

impl StatusResponse {
    pub fn current() -> Self {
        Self {
            status: "magnetic field API running".to_string(),
            version: crate::VERSION.to_string(),
            description: "Biot-Savart law for a long straight wire".to_string(),
        }
    }
}
