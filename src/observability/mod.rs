//! Observability module
//!
//! Logging infrastructure for the `airgate` command-line tool. The
//! validation core itself never logs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
