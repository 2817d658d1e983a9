//! # WireField Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! ├── integration/
//! │   ├── http_api.rs   # Full HTTP surface over a real server
//! │   └── pipeline.rs   # Validator → calculator flow without HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p field-tests
//! ```

#![allow(dead_code)]

pub mod integration;
