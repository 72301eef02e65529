use std::collections::BTreeMap;

use crate::{InstrumentId, NonNegative, ValueError};

/// Fixed annual cost of holding each instrument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnualCosts {
    costs: BTreeMap<InstrumentId, NonNegative>,
}

impl AnnualCosts {
    /// Creates an empty cost table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cost table from `(instrument, cost)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any cost is negative or non-finite.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, ValueError>
    where
        K: Into<InstrumentId>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut costs = Self::new();
        for (instrument, cost) in pairs {
            costs.set(instrument, cost)?;
        }
        Ok(costs)
    }

    /// Sets the annual cost for an instrument.
    ///
    /// # Errors
    ///
    /// Returns an error if `cost` is negative or non-finite.
    pub fn set(&mut self, instrument: impl Into<InstrumentId>, cost: f64) -> Result<(), ValueError> {
        let cost = NonNegative::new(cost)?;
        self.insert(instrument.into(), cost);
        Ok(())
    }

    /// Sets an already validated cost.
    pub fn insert(&mut self, instrument: InstrumentId, cost: NonNegative) {
        self.costs.insert(instrument, cost);
    }

    /// Returns the annual cost for `instrument`, if present.
    #[must_use]
    pub fn cost(&self, instrument: &str) -> Option<NonNegative> {
        self.costs.get(instrument).copied()
    }

    /// Iterates over `(instrument, cost)` in sorted instrument order.
    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentId, NonNegative)> {
        self.costs.iter().map(|(instrument, cost)| (instrument, *cost))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
