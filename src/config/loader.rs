//! Configuration loader
//!
//! This module implements the file boundary around the validator:
//! 1. Existence and size checks
//! 2. Read raw text, strip a UTF-8 BOM
//! 3. YAML parsing into a generic document
//! 4. Validation into a typed `AirportConfig`

use crate::config::schema::AirportConfig;
use crate::config::validation::{ValidationWarning, Validator};
use crate::error::ConfigError;

use serde_yaml::Value;
use std::io;
use std::path::{Path, PathBuf};

/// Origin label used for in-memory documents.
const INLINE_ORIGIN: &str = "<inline>";

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Limits for configuration size.
    pub config_limits: ConfigLimits,
}

/// Limits for configuration size to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum configuration file size in bytes.
    pub max_config_size: u64,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("AIRGATE_MAX_CONFIG_SIZE", 1024 * 1024),
        }
    }
}

/// Result of loading a configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: AirportConfig,

    /// Warnings encountered during validation.
    pub warnings: Vec<ValidationWarning>,
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds the configured size limit
    /// - YAML parsing fails or the document is empty
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let limit = self.options.config_limits.max_config_size;
        if metadata.len() > limit {
            return Err(ConfigError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = raw_content.len(), "read configuration");

        let result = Self::load_text(&raw_content, path)?;
        tracing::debug!(
            path = %path.display(),
            model_id = %result.config.model_id,
            gates = result.config.gates.len(),
            warnings = result.warnings.len(),
            "configuration loaded"
        );
        Ok(result)
    }

    /// Loads and validates a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML parsing fails, the document is empty, or
    /// validation fails.
    pub fn load_from_str(&self, content: &str) -> Result<LoadResult, ConfigError> {
        let limit = self.options.config_limits.max_config_size;
        let size = u64::try_from(content.len()).unwrap_or(u64::MAX);
        if size > limit {
            return Err(ConfigError::FileTooLarge {
                path: PathBuf::from(INLINE_ORIGIN),
                size,
                limit,
            });
        }
        Self::load_text(content, Path::new(INLINE_ORIGIN))
    }

    fn load_text(content: &str, origin: &Path) -> Result<LoadResult, ConfigError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let document: Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        if document.is_null() {
            return Err(ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: None,
                message: "configuration file is empty".to_string(),
            });
        }

        let result = Validator::new().validate(&document)?;
        Ok(LoadResult {
            config: result.config,
            warnings: result.warnings,
        })
    }
}

/// Loads an airport configuration file with default options.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_airport_config(path: impl AsRef<Path>) -> Result<AirportConfig, ConfigError> {
    ConfigLoader::with_defaults()
        .load(path.as_ref())
        .map(|result| result.config)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
