//! WireField gateway - HTTP JSON API for the magnetic field of a long
//! straight current-carrying wire.
//!
//! The service computes B = (μ₀ · I) / (2π · d) per the Biot-Savart
//! law for this geometry, for each requested distance.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              FIELD GATEWAY                      │
//! ├─────────────────────────────────────────────────┤
//! │  GET /            POST /calculate               │
//! │      │                  │                       │
//! │  ┌───┴──────────────────┴───┐                   │
//! │  │   Middleware Stack       │                   │
//! │  │   CORS → Trace → Limit   │                   │
//! │  └──────────┬───────────────┘                   │
//! │             │                                   │
//! │  ┌──────────┴───────────┐                       │
//! │  │  Request Validator   │  (ordered rule chain) │
//! │  └──────────┬───────────┘                       │
//! │             │                                   │
//! │  ┌──────────┴───────────┐                       │
//! │  │  Field Calculator    │  (pure function)      │
//! │  └──────────────────────┘                       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use field_gateway::{FieldGatewayService, GatewayConfig};
//!
//! let service = FieldGatewayService::new(GatewayConfig::default())?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod physics;
pub mod service;
pub mod validation;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::{CalculationRequest, CalculationResponse, FieldSample, StatusResponse};
pub use physics::{magnetic_field, FieldError, MU_0};
pub use service::{build_router, FieldGatewayService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
