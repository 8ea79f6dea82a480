//! Error types for `airgate`
//!
//! `ConfigError` covers every way an airport configuration can be rejected.
//! `AirgateError` wraps it together with the I/O and rendering failures of
//! the command-line front end and maps each to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `airgate` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, broken pipe)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `airgate` operations.
#[derive(Debug, Error)]
pub enum AirgateError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Warnings were reported while running with `--strict`
    #[error("{count} warning(s) in {path} (strict mode)")]
    StrictWarnings {
        /// File that produced the warnings
        path: PathBuf,
        /// Number of warnings reported
        count: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AirgateError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::StrictWarnings { .. } => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// Every variant aborts the load; there is no partial configuration.
/// Messages name the offending field and its structural context
/// (e.g. `gates[2]`) so they are stable across runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("config file not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The configuration file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exceeds the size limit
    #[error("{path} is {size} bytes, limit is {limit} bytes")]
    FileTooLarge {
        /// Path to the configuration file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// YAML parsing failed or the document is empty
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// A required key is absent from a mapping
    #[error("missing key '{key}' in {context}")]
    MissingKey {
        /// Name of the missing key
        key: String,
        /// Enclosing section (e.g. `airport`, `gates[3]`)
        context: String,
    },

    /// A value is present but cannot be coerced to the required type
    #[error("{} must be {expected}", field_path(.context, .field))]
    TypeError {
        /// Name of the offending field
        field: String,
        /// Enclosing section
        context: String,
        /// Description of the required type
        expected: String,
    },

    /// One or more values fall outside an enumerated set
    #[error(
        "{} contains invalid values: {offending:?} (allowed: {allowed:?})",
        field_path(.context, .field)
    )]
    InvalidEnum {
        /// Name of the offending field
        field: String,
        /// Enclosing section
        context: String,
        /// Offending values, sorted
        offending: Vec<String>,
        /// Allowed values, sorted
        allowed: Vec<String>,
    },

    /// A gate identifier is repeated
    #[error("duplicate gate_id '{gate_id}' in {context}")]
    DuplicateKey {
        /// The repeated identifier
        gate_id: String,
        /// Zero-based index of the repeating entry
        index: usize,
        /// Context of the repeating entry (`gates[index]`)
        context: String,
    },

    /// A numeric field violates a bound
    #[error("{field}: {constraint}")]
    RangeError {
        /// Dotted path of the offending field
        field: String,
        /// The violated constraint (e.g. `must be > 0`)
        constraint: String,
    },
}

/// Joins a context and a field into a dotted path, skipping empty parts.
fn field_path(context: &str, field: &str) -> String {
    match (context.is_empty(), field.is_empty()) {
        (true, _) => field.to_string(),
        (false, true) => context.to_string(),
        (false, false) => format!("{context}.{field}"),
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `airgate` operations.
pub type Result<T> = std::result::Result<T, AirgateError>;

// ============================================================================
// Tests
// ============================================================================
