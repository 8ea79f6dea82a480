//! `show` command handler
//!
//! Loads a configuration file and prints the resulting model.

use std::fmt::Write as _;

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::loader::ConfigLoader;
use crate::config::schema::AirportConfig;
use crate::error::AirgateError;

/// Load a configuration file and print it.
///
/// # Errors
///
/// Returns a config error if the file cannot be loaded, or a JSON error if
/// rendering fails.
pub fn run(args: &ShowArgs) -> Result<(), AirgateError> {
    tracing::info!(config = %args.file.display(), "loading configuration");
    let result = ConfigLoader::with_defaults().load(&args.file)?;

    for warning in &result.warnings {
        tracing::warn!(location = %warning.location, "{}", warning.message);
    }

    match args.format {
        OutputFormat::Human => print!("{}", render_human(&result.config)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.config)?),
    }
    Ok(())
}

/// Renders a configuration as plain text.
#[must_use]
pub fn render_human(config: &AirportConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loaded: {}", config.model_id);
    let _ = writeln!(out, "{} - {}", config.airport_code, config.airport_name);
    let _ = writeln!(
        out,
        "Timezone: {} | Resolution(min): {}",
        config.timezone, config.resolution_minutes
    );
    let _ = writeln!(out, "Buffer(min): {}", config.turnaround.buffer_minutes);

    let defaults: Vec<String> = config
        .turnaround
        .default_turnaround_minutes
        .iter()
        .map(|(class, minutes)| {
            let total = config.turnaround.turnaround_for(*class).unwrap_or(*minutes);
            format!("{class}={minutes} ({total} with buffer)")
        })
        .collect();
    let _ = writeln!(out, "Default turnaround: {}", defaults.join(", "));

    let _ = writeln!(out, "Gates:");
    for gate in &config.gates {
        let classes: Vec<&str> = gate.compatible_classes.iter().map(|c| c.code()).collect();
        let _ = writeln!(
            out,
            "  {} [{}] walk_cost={}",
            gate.gate_id,
            classes.join(", "),
            gate.walk_cost
        );
    }
    out
}
