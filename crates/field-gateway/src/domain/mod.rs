//! Domain layer: configuration, error taxonomy, and wire types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult, GatewayError};
pub use types::{CalculationRequest, CalculationResponse, FieldSample, StatusResponse};
