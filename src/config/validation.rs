//! Configuration validation
//!
//! Turns a generic YAML document tree into a typed [`AirportConfig`].
//! Validation walks the document once, top to bottom, and stops at the first
//! violation so that error messages are deterministic:
//!
//! 1. Sections (`airport`, `time`, `turnaround`, `gates`, `export`)
//! 2. Scalar fields of each section
//! 3. Class keys of `turnaround.default_turnaround_minutes`
//! 4. Gates in input order (`gate_id` → `compatible_classes` → `walk_cost`)
//! 5. Numeric ranges
//!
//! The validator performs no I/O and never logs; non-fatal findings are
//! returned as [`ValidationWarning`]s next to the configuration.

use crate::config::schema::{AircraftClass, AirportConfig, Gate, TurnaroundPolicy};
use crate::error::ConfigError;

use serde_yaml::{Mapping, Value};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

const ROOT: &str = "root";

// ============================================================================
// Public API
// ============================================================================

/// A non-fatal finding about an otherwise valid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Path of the field the warning refers to (e.g. `gates[1].compatible_classes`)
    pub location: String,
    /// Description of the finding
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {} at {}", self.message, self.location)
    }
}

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// The validated configuration.
    pub config: AirportConfig,

    /// Warnings collected along the way.
    pub warnings: Vec<ValidationWarning>,
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a parsed document and builds the typed configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a missing key, a value of the wrong
    /// type, an unknown aircraft class, a repeated `gate_id`, or a numeric
    /// field out of range.
    pub fn validate(&mut self, document: &Value) -> Result<ValidationResult, ConfigError> {
        self.warnings.clear();

        let root = document
            .as_mapping()
            .ok_or_else(|| type_error("", ROOT, "a mapping"))?;

        let airport = require_mapping(root, "airport", ROOT)?;
        let time = require_mapping(root, "time", ROOT)?;
        let turnaround = require_mapping(root, "turnaround", ROOT)?;
        let gates = require_sequence(root, "gates", ROOT)?;
        let export = require_mapping(root, "export", ROOT)?;

        let airport_code = require_string(airport, "code", "airport")?;
        let airport_name = require_string(airport, "name", "airport")?;

        let timezone = require_string(time, "timezone", "time")?;
        let resolution = require_int(time, "resolution_minutes", "time")?;

        let buffer = require_int(turnaround, "buffer_minutes", "turnaround")?;
        let default_turnaround =
            require_mapping(turnaround, "default_turnaround_minutes", "turnaround")?;

        let model_id = require_string(export, "recommended_id", "export")?;

        let default_entries = parse_turnaround_classes(default_turnaround)?;

        let mut parsed_gates = Vec::with_capacity(gates.len());
        let mut gate_ids = HashSet::with_capacity(gates.len());
        for (index, entry) in gates.iter().enumerate() {
            parsed_gates.push(self.parse_gate(entry, index, &mut gate_ids)?);
        }

        if resolution <= 0 {
            return Err(range_error("time.resolution_minutes", "must be > 0"));
        }
        if buffer < 0 {
            return Err(range_error("turnaround.buffer_minutes", "must be >= 0"));
        }
        if parsed_gates.is_empty() {
            return Err(range_error("gates", "at least one gate required"));
        }

        let resolution_minutes = to_minutes(resolution, "time.resolution_minutes")?;
        let buffer_minutes = to_minutes(buffer, "turnaround.buffer_minutes")?;

        let mut default_turnaround_minutes = BTreeMap::new();
        for (class, raw) in default_entries {
            let context = "turnaround.default_turnaround_minutes";
            let minutes = coerce_int(raw).ok_or_else(|| {
                type_error(class.code(), context, "an integer")
            })?;
            let field = format!("{context}.{class}");
            if minutes < 0 {
                return Err(range_error(&field, "must be >= 0"));
            }
            default_turnaround_minutes.insert(class, to_minutes(minutes, &field)?);
        }

        for (index, gate) in parsed_gates.iter().enumerate() {
            for class in &gate.compatible_classes {
                if !default_turnaround_minutes.contains_key(class) {
                    self.add_warning(
                        &format!("gates[{index}].compatible_classes"),
                        &format!("class {class} has no default turnaround"),
                    );
                }
            }
        }

        Ok(ValidationResult {
            config: AirportConfig {
                airport_code,
                airport_name,
                timezone,
                resolution_minutes,
                turnaround: TurnaroundPolicy {
                    buffer_minutes,
                    default_turnaround_minutes,
                },
                gates: parsed_gates,
                model_id,
            },
            warnings: std::mem::take(&mut self.warnings),
        })
    }

    // ========================================================================
    // Gates
    // ========================================================================

    /// Validates one `gates` entry.
    fn parse_gate(
        &mut self,
        entry: &Value,
        index: usize,
        gate_ids: &mut HashSet<String>,
    ) -> Result<Gate, ConfigError> {
        let context = format!("gates[{index}]");
        let map = entry
            .as_mapping()
            .ok_or_else(|| type_error("", &context, "a mapping"))?;

        let gate_id = require_string(map, "gate_id", &context)?;
        if !gate_ids.insert(gate_id.clone()) {
            return Err(ConfigError::DuplicateKey {
                gate_id,
                index,
                context,
            });
        }

        let items = match require(map, "compatible_classes", &context)? {
            Value::Sequence(items) if !items.is_empty() => items,
            _ => {
                return Err(type_error(
                    "compatible_classes",
                    &context,
                    "a non-empty list",
                ));
            }
        };

        let codes: BTreeSet<String> = items
            .iter()
            .map(|item| class_code_text(item).trim().to_string())
            .collect();
        if codes.len() < items.len() {
            self.add_warning(
                &format!("{context}.compatible_classes"),
                "duplicate classes collapsed",
            );
        }
        let compatible_classes = parse_classes(&codes, "compatible_classes", &context)?;

        let walk_cost = require_real(map, "walk_cost", &context)?;
        if walk_cost < 0.0 {
            return Err(range_error(&format!("{context}.walk_cost"), "must be >= 0"));
        }

        Ok(Gate {
            gate_id,
            compatible_classes,
            walk_cost,
        })
    }

    fn add_warning(&mut self, location: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            location: location.to_string(),
            message: message.to_string(),
        });
    }
}

/// Validates a parsed document and returns the typed configuration,
/// discarding warnings.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn load(document: &Value) -> Result<AirportConfig, ConfigError> {
    Validator::new().validate(document).map(|result| result.config)
}

// ============================================================================
// Aircraft Classes
// ============================================================================

/// Checks the keys of `default_turnaround_minutes` against the class set.
///
/// Returns the entries in input order with values left raw.
fn parse_turnaround_classes(
    map: &Mapping,
) -> Result<Vec<(AircraftClass, &Value)>, ConfigError> {
    let mut entries = Vec::with_capacity(map.len());
    let mut offending = BTreeSet::new();

    for (key, value) in map {
        let code = class_code_text(key);
        match AircraftClass::from_code(&code) {
            Some(class) => entries.push((class, value)),
            None => {
                offending.insert(code);
            }
        }
    }

    if offending.is_empty() {
        Ok(entries)
    } else {
        Err(ConfigError::InvalidEnum {
            field: "default_turnaround_minutes".to_string(),
            context: "turnaround".to_string(),
            offending: offending.into_iter().collect(),
            allowed: AircraftClass::allowed_codes(),
        })
    }
}

/// Maps a set of trimmed class codes to sorted classes.
fn parse_classes(
    codes: &BTreeSet<String>,
    field: &str,
    context: &str,
) -> Result<Vec<AircraftClass>, ConfigError> {
    let offending: Vec<String> = codes
        .iter()
        .filter(|code| AircraftClass::from_code(code).is_none())
        .cloned()
        .collect();
    if !offending.is_empty() {
        return Err(ConfigError::InvalidEnum {
            field: field.to_string(),
            context: context.to_string(),
            offending,
            allowed: AircraftClass::allowed_codes(),
        });
    }

    let mut classes: Vec<AircraftClass> = codes
        .iter()
        .filter_map(|code| AircraftClass::from_code(code))
        .collect();
    classes.sort();
    Ok(classes)
}

// ============================================================================
// Field Extraction
// ============================================================================

fn require<'a>(map: &'a Mapping, key: &str, context: &str) -> Result<&'a Value, ConfigError> {
    map.get(key).ok_or_else(|| ConfigError::MissingKey {
        key: key.to_string(),
        context: context.to_string(),
    })
}

fn require_mapping<'a>(
    map: &'a Mapping,
    key: &str,
    context: &str,
) -> Result<&'a Mapping, ConfigError> {
    require(map, key, context)?
        .as_mapping()
        .ok_or_else(|| type_error(key, context, "a mapping"))
}

fn require_sequence<'a>(
    map: &'a Mapping,
    key: &str,
    context: &str,
) -> Result<&'a Vec<Value>, ConfigError> {
    require(map, key, context)?
        .as_sequence()
        .ok_or_else(|| type_error(key, context, "a list"))
}

/// Extracts a scalar as trimmed, non-empty text.
fn require_string(map: &Mapping, key: &str, context: &str) -> Result<String, ConfigError> {
    let text = scalar_text(require(map, key, context)?)
        .ok_or_else(|| type_error(key, context, "a string"))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(type_error(key, context, "a non-empty string"));
    }
    Ok(trimmed.to_string())
}

fn require_int(map: &Mapping, key: &str, context: &str) -> Result<i64, ConfigError> {
    coerce_int(require(map, key, context)?).ok_or_else(|| type_error(key, context, "an integer"))
}

fn require_real(map: &Mapping, key: &str, context: &str) -> Result<f64, ConfigError> {
    coerce_real(require(map, key, context)?)
        .ok_or_else(|| type_error(key, context, "a finite number"))
}

// ============================================================================
// Coercion
// ============================================================================

/// Renders a scalar as text; `None` for null, sequences, mappings and tags.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text of a class code candidate. Non-scalars get a debug rendering so they
/// surface as unknown classes.
fn class_code_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => scalar_text(other).unwrap_or_else(|| format!("{other:?}")),
    }
}

/// Integers, integral floats, and integer strings.
///
/// Magnitudes beyond `i64` saturate so that the range checks reject them.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
        Value::String(s) => s
            .trim()
            .parse::<i128>()
            .ok()
            .map(|v| i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })),
        _ => None,
    }
}

fn coerce_real(value: &Value) -> Option<f64> {
    let real = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    real.is_finite().then_some(real)
}

fn to_minutes(value: i64, field: &str) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| range_error(field, &format!("must be <= {}", u32::MAX)))
}

// ============================================================================
// Error Constructors
// ============================================================================

fn type_error(field: &str, context: &str, expected: &str) -> ConfigError {
    ConfigError::TypeError {
        field: field.to_string(),
        context: context.to_string(),
        expected: expected.to_string(),
    }
}

fn range_error(field: &str, constraint: &str) -> ConfigError {
    ConfigError::RangeError {
        field: field.to_string(),
        constraint: constraint.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
