//! Configuration module
//!
//! Loads and validates airport gate model configurations: airport identity,
//! scheduling resolution, turnaround policy, and gates.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoaderOptions, load_airport_config};
pub use schema::*;
pub use validation::{ValidationResult, ValidationWarning, Validator, load};
