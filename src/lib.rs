//! `airgate` - Airport gate model configuration
//!
//! This library loads airport gate-assignment configurations from YAML and
//! validates them into typed, immutable values for downstream schedulers.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
