//! Integration tests for the field gateway.

pub mod pipeline;
