//! Command-line interface
//!
//! Argument definitions and command handlers for the `airgate` binary.

pub mod args;
pub mod commands;
