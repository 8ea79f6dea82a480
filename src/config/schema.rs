//! Configuration schema types
//!
//! Typed, immutable form of an airport gate model. Values of these types are
//! only produced by the validator in [`crate::config::validation`]; nothing
//! mutates them after a load.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Aircraft Class
// ============================================================================

/// Aircraft size class used for gate compatibility and turnaround defaults.
///
/// Ordering follows the class code (`L` < `M` < `S`), which is the canonical
/// order for stored class lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AircraftClass {
    /// Small aircraft (`S`)
    #[serde(rename = "S")]
    Small,
    /// Medium aircraft (`M`)
    #[serde(rename = "M")]
    Medium,
    /// Large aircraft (`L`)
    #[serde(rename = "L")]
    Large,
}

impl AircraftClass {
    /// All classes in canonical order.
    pub const ALL: [Self; 3] = [Self::Large, Self::Medium, Self::Small];

    /// Returns the single-letter class code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    /// Parses an exact, case-sensitive class code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::Small),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Large),
            _ => None,
        }
    }

    /// Returns the allowed class codes, sorted.
    #[must_use]
    pub fn allowed_codes() -> Vec<String> {
        Self::ALL.iter().map(|c| c.code().to_string()).collect()
    }
}

impl Ord for AircraftClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl PartialOrd for AircraftClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AircraftClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Gate
// ============================================================================

/// One physical gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gate {
    /// Identifier, unique across the configuration
    pub gate_id: String,

    /// Classes this gate can serve; never empty, sorted, no duplicates
    pub compatible_classes: Vec<AircraftClass>,

    /// Passenger walking cost, non-negative
    pub walk_cost: f64,
}

impl Gate {
    /// Returns `true` if the gate can serve aircraft of `class`.
    #[must_use]
    pub fn accepts(&self, class: AircraftClass) -> bool {
        self.compatible_classes.binary_search(&class).is_ok()
    }
}

// ============================================================================
// Turnaround Policy
// ============================================================================

/// Minimum gate occupancy gap between two flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnaroundPolicy {
    /// Extra minutes added to every turnaround
    pub buffer_minutes: u32,

    /// Per-class default turnaround; need not cover every class
    pub default_turnaround_minutes: BTreeMap<AircraftClass, u32>,
}

impl TurnaroundPolicy {
    /// Total turnaround for `class`: the class default plus the buffer.
    ///
    /// Returns `None` when no default is configured for the class.
    #[must_use]
    pub fn turnaround_for(&self, class: AircraftClass) -> Option<u32> {
        self.default_turnaround_minutes
            .get(&class)
            .map(|minutes| minutes.saturating_add(self.buffer_minutes))
    }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration of an airport gate model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportConfig {
    /// Airport code (e.g. `WAW`)
    pub airport_code: String,

    /// Human-readable airport name
    pub airport_name: String,

    /// IANA-style timezone identifier, not checked against a tz database
    pub timezone: String,

    /// Scheduling grid granularity in minutes, always > 0
    pub resolution_minutes: u32,

    /// Turnaround policy
    pub turnaround: TurnaroundPolicy,

    /// Gates in input order, at least one
    pub gates: Vec<Gate>,

    /// Citable model identifier (e.g. `WAW-RS-6G-v1`)
    pub model_id: String,
}

impl AirportConfig {
    /// Looks up a gate by identifier.
    #[must_use]
    pub fn gate(&self, gate_id: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.gate_id == gate_id)
    }
}
