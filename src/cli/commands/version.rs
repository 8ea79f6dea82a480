//! `version` command handler
//!
//! Reports the package version together with the limits the loader applies,
//! so a report can be matched to the validator that produced it.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::config::{AircraftClass, ConfigLimits};
use crate::error::AirgateError;

/// Version and validator facts.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    /// Package name.
    pub name: &'static str,
    /// Package version.
    pub version: &'static str,
    /// Aircraft class codes accepted in configurations.
    pub aircraft_classes: Vec<String>,
    /// Effective maximum configuration size in bytes.
    pub max_config_size: u64,
}

impl VersionInfo {
    /// Collects version information for this build.
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            aircraft_classes: AircraftClass::allowed_codes(),
            max_config_size: ConfigLimits::default().max_config_size,
        }
    }
}

/// Print version information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), AirgateError> {
    let info = VersionInfo::current();
    match args.format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("aircraft classes: {}", info.aircraft_classes.join(", "));
            println!("max config size: {} bytes", info.max_config_size);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }
    Ok(())
}
