//! Shared fixtures for the perks integration tests.

use perks_core::{
    AnnualCosts, Catalog, SpendingForecast,
    table::{Table, TableError},
};

/// The reference table: twelve instruments, five categories.
pub const REFERENCE_TABLE: &str = include_str!("../data/reference.toml");

/// Loads the reference table into solver inputs.
///
/// # Errors
///
/// Returns an error if the bundled table fails to parse or validate.
pub fn reference_inputs() -> Result<(Catalog, SpendingForecast, AnnualCosts), TableError> {
    Table::from_toml_str(REFERENCE_TABLE)?.into_inputs()
}
