//! `validate` command handler
//!
//! Loads each configuration file, reports per-file results, and fails if
//! any file is invalid (or, with `--strict`, produced warnings).

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::{ConfigLoader, LoadResult};
use crate::error::{AirgateError, ConfigError};

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Per-file results, in argument order.
    pub files: Vec<FileReport>,
    /// Totals across all files.
    pub summary: Summary,
}

/// Validation result for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as given on the command line.
    pub path: String,
    /// Whether the file passed.
    pub valid: bool,
    /// Model identifier of a loaded configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Error message of a rejected configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// Totals for a validation run.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Number of files checked.
    pub total: usize,
    /// Number of files that passed.
    pub valid: usize,
    /// Number of files that failed.
    pub invalid: usize,
}

/// Validate configuration files.
///
/// # Errors
///
/// Returns the first configuration error encountered, or
/// [`AirgateError::StrictWarnings`] for the first file with warnings when
/// `--strict` is set.
pub fn run(args: &ValidateArgs) -> Result<(), AirgateError> {
    let loader = ConfigLoader::with_defaults();

    let outcomes: Vec<(&Path, Result<LoadResult, ConfigError>)> = args
        .files
        .iter()
        .map(|path| {
            tracing::info!(file = %path.display(), "validating configuration");
            let outcome = loader.load(path);
            match &outcome {
                Ok(result) => {
                    for warning in &result.warnings {
                        tracing::warn!(location = %warning.location, "{}", warning.message);
                    }
                    tracing::info!(file = %path.display(), "configuration valid");
                }
                Err(e) => tracing::info!(file = %path.display(), error = %e, "configuration invalid"),
            }
            (path.as_path(), outcome)
        })
        .collect();

    let report = build_report(&outcomes, args.strict);
    match args.format {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let mut strict_failure = None;
    for (path, outcome) in outcomes {
        match outcome {
            Err(e) => return Err(e.into()),
            Ok(result) if args.strict && !result.warnings.is_empty() && strict_failure.is_none() => {
                strict_failure = Some(AirgateError::StrictWarnings {
                    path: path.to_path_buf(),
                    count: result.warnings.len(),
                });
            }
            Ok(_) => {}
        }
    }
    strict_failure.map_or(Ok(()), Err)
}

/// Summarizes load outcomes into a report.
#[must_use]
pub fn build_report(
    outcomes: &[(&Path, Result<LoadResult, ConfigError>)],
    strict: bool,
) -> ValidationReport {
    let files: Vec<FileReport> = outcomes
        .iter()
        .map(|(path, outcome)| match outcome {
            Ok(result) => FileReport {
                path: path.display().to_string(),
                valid: !(strict && !result.warnings.is_empty()),
                model_id: Some(result.config.model_id.clone()),
                error: None,
                warnings: result.warnings.iter().map(ToString::to_string).collect(),
            },
            Err(e) => FileReport {
                path: path.display().to_string(),
                valid: false,
                model_id: None,
                error: Some(e.to_string()),
                warnings: Vec::new(),
            },
        })
        .collect();

    let valid = files.iter().filter(|f| f.valid).count();
    let summary = Summary {
        total: files.len(),
        valid,
        invalid: files.len() - valid,
    };
    ValidationReport { files, summary }
}

/// Renders a report as plain text.
#[must_use]
pub fn render_human(report: &ValidationReport) -> String {
    let mut out = String::new();
    for file in &report.files {
        match (&file.model_id, &file.error) {
            (_, Some(error)) => out.push_str(&format!("✗ {}: {error}\n", file.path)),
            (Some(model_id), None) if file.valid => {
                out.push_str(&format!("✓ {} ({model_id})\n", file.path));
            }
            _ => out.push_str(&format!("✗ {} (warnings in strict mode)\n", file.path)),
        }
        for warning in &file.warnings {
            out.push_str(&format!("  {warning}\n"));
        }
    }
    out.push_str(&format!(
        "{} file(s): {} valid, {} invalid\n",
        report.summary.total, report.summary.valid, report.summary.invalid
    ));
    out
}
