//! Loads assignment inputs from a tabular file.
//!
//! A table has one row per instrument. Each row carries the instrument's
//! name, its annual fee, a point value, and raw rewards per category. The
//! rate used by solvers is `raw reward * point value`, so a row earning
//! "3 points per dollar" at one cent per point has a rate of `0.03`.
//!
//! A raw reward that is `null`, NaN, or absent is unknown and becomes a
//! rate of zero. Reward columns for categories outside `spending` are
//! ignored.
//!
//! ```toml
//! [spending]
//! Groceries = 500.0
//! Travel = 4000.0
//!
//! [[instrument]]
//! name = "travel_card"
//! annual_fee = 95.0
//! point_value = 0.01
//! rewards = { Groceries = 1.0, Travel = 3.0 }
//! ```

mod error;

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use tracing::trace;

use crate::{AnnualCosts, Catalog, CategoryId, InstrumentId, NonNegative, SpendingForecast};

pub use error::TableError;

/// A deserialized instrument table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    /// Forecast annual spend per category.
    pub spending: BTreeMap<CategoryId, f64>,

    /// One row per instrument.
    #[serde(rename = "instrument", alias = "instruments", default)]
    pub instruments: Vec<InstrumentRow>,
}

/// One instrument's row in a [`Table`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentRow {
    pub name: InstrumentId,

    pub annual_fee: f64,

    /// Value of one raw reward unit; defaults to `1.0`.
    #[serde(default = "default_point_value")]
    pub point_value: f64,

    #[serde(default)]
    pub rewards: BTreeMap<CategoryId, Option<f64>>,
}

fn default_point_value() -> f64 {
    1.0
}

impl Table {
    /// Parses a table from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_json_str(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a table, choosing the format by file extension
    /// (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let read = || {
            fs::read_to_string(path).map_err(|source| TableError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_str() {
            "toml" => Self::from_toml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            _ => Err(TableError::UnsupportedFormat { extension }),
        }
    }

    /// Converts the table into catalog, spending, and cost inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if an instrument is listed twice, or if any spend,
    /// fee, point value, or known raw reward is negative or non-finite.
    pub fn into_inputs(self) -> Result<(Catalog, SpendingForecast, AnnualCosts), TableError> {
        let mut spending = SpendingForecast::new();
        for (category, amount) in self.spending {
            let amount = NonNegative::new(amount).map_err(|source| TableError::InvalidSpend {
                category: category.clone(),
                source,
            })?;
            spending.insert(category, amount);
        }

        let mut catalog = Catalog::new();
        let mut costs = AnnualCosts::new();

        for row in self.instruments {
            if catalog.contains(row.name.as_str()) {
                return Err(TableError::DuplicateInstrument { instrument: row.name });
            }

            let invalid = |field: &'static str| {
                let instrument = row.name.clone();
                move |source| TableError::InvalidValue {
                    instrument,
                    field,
                    source,
                }
            };

            let fee = NonNegative::new(row.annual_fee).map_err(invalid("annual_fee"))?;
            let point_value = NonNegative::new(row.point_value).map_err(invalid("point_value"))?;

            catalog.add_instrument(row.name.clone());
            costs.insert(row.name.clone(), fee);

            for (category, raw) in &row.rewards {
                if spending.amount(category.as_str()).is_none() {
                    continue;
                }

                let raw = match raw {
                    Some(raw) if !raw.is_nan() => {
                        NonNegative::new(*raw).map_err(invalid("rewards"))?
                    }
                    _ => {
                        trace!(instrument = %row.name, %category, "unknown reward treated as zero");
                        NonNegative::ZERO
                    }
                };

                let rate = NonNegative::new(raw.get() * point_value.get())
                    .map_err(invalid("rewards"))?;
                catalog.insert(row.name.clone(), category.clone(), rate);
            }
        }

        Ok((catalog, spending, costs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TOML: &str = r#"
        [spending]
        Gas = 300.0
        Travel = 4000.0

        [[instrument]]
        name = "flat"
        annual_fee = 0.0
        rewards = { Gas = 0.01, Travel = 0.01, Hotels = 0.5 }

        [[instrument]]
        name = "travel"
        annual_fee = 95.0
        point_value = 0.01
        rewards = { Travel = 3.0 }
    "#;

    #[test]
    fn multiplies_rewards_by_point_value() {
        let (catalog, spending, costs) = Table::from_toml_str(TOML).unwrap().into_inputs().unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(spending.len(), 2);
        assert_relative_eq!(catalog.rate("travel", "Travel").get(), 0.03);
        assert_relative_eq!(catalog.rate("flat", "Gas").get(), 0.01);
        assert_eq!(costs.cost("travel"), Some(NonNegative::new(95.0).unwrap()));
    }

    #[test]
    fn ignores_rewards_outside_spending() {
        let (catalog, _, _) = Table::from_toml_str(TOML).unwrap().into_inputs().unwrap();
        assert_eq!(catalog.rate("flat", "Hotels"), NonNegative::ZERO);
    }

    #[test]
    fn null_rewards_become_zero() {
        let json = r#"{
            "spending": { "Gas": 300.0, "Dining": 200.0 },
            "instrument": [
                { "name": "gas", "annual_fee": 0.0, "rewards": { "Gas": 0.04, "Dining": null } }
            ]
        }"#;

        let (catalog, _, _) = Table::from_json_str(json).unwrap().into_inputs().unwrap();
        assert_relative_eq!(catalog.rate("gas", "Gas").get(), 0.04);
        assert_eq!(catalog.rate("gas", "Dining"), NonNegative::ZERO);
    }

    #[test]
    fn rejects_duplicate_instruments() {
        let toml = r#"
            [spending]
            Gas = 1.0

            [[instrument]]
            name = "a"
            annual_fee = 0.0

            [[instrument]]
            name = "a"
            annual_fee = 1.0
        "#;

        let err = Table::from_toml_str(toml).unwrap().into_inputs().unwrap_err();
        assert!(matches!(err, TableError::DuplicateInstrument { .. }));
    }

    #[test]
    fn rejects_negative_fee() {
        let toml = r#"
            [spending]
            Gas = 1.0

            [[instrument]]
            name = "a"
            annual_fee = -1.0
        "#;

        let err = Table::from_toml_str(toml).unwrap().into_inputs().unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidValue {
                field: "annual_fee",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = Table::load_path("rates.xlsx").unwrap_err();
        assert!(matches!(err, TableError::UnsupportedFormat { .. }));
    }
}
