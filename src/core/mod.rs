//! Core building blocks shared by the resolver and the materializer
//!
//! - **config**: decomposer.toml parsing and validation
//! - **error**: error types with contextual help messages

pub mod config;
pub mod error;
