use std::collections::BTreeMap;

use crate::{CategoryId, InstrumentId, NonNegative, ValueError};

/// Reward rates for each instrument, keyed by category.
///
/// A rate is the fraction of spend returned as reward value. Categories an
/// instrument does not list earn nothing: [`Catalog::rate`] returns zero for
/// them instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    rates: BTreeMap<InstrumentId, BTreeMap<CategoryId, NonNegative>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instrument with no explicit rates, if not already present.
    pub fn add_instrument(&mut self, instrument: impl Into<InstrumentId>) {
        self.rates.entry(instrument.into()).or_default();
    }

    /// Sets the rate for an instrument in a category, adding the instrument
    /// if needed. Any previous rate is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is negative or non-finite.
    pub fn set_rate(
        &mut self,
        instrument: impl Into<InstrumentId>,
        category: impl Into<CategoryId>,
        rate: f64,
    ) -> Result<(), ValueError> {
        let rate = NonNegative::new(rate)?;
        self.insert(instrument.into(), category.into(), rate);
        Ok(())
    }

    /// Sets an already validated rate.
    pub fn insert(&mut self, instrument: InstrumentId, category: CategoryId, rate: NonNegative) {
        self.rates
            .entry(instrument)
            .or_default()
            .insert(category, rate);
    }

    /// Returns the rate for `instrument` in `category`, or zero if either is
    /// not listed.
    #[must_use]
    pub fn rate(&self, instrument: &str, category: &str) -> NonNegative {
        self.rates
            .get(instrument)
            .and_then(|rates| rates.get(category))
            .copied()
            .unwrap_or(NonNegative::ZERO)
    }

    /// Returns `true` if the catalog lists `instrument`.
    #[must_use]
    pub fn contains(&self, instrument: &str) -> bool {
        self.rates.contains_key(instrument)
    }

    /// Iterates over instruments in sorted order.
    pub fn instruments(&self) -> impl Iterator<Item = &InstrumentId> {
        self.rates.keys()
    }

    /// Returns the number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns `true` if the catalog has no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_rates_are_zero() {
        let mut catalog = Catalog::new();
        catalog.set_rate("instrument_1", "Gas", 0.03).unwrap();
        catalog.add_instrument("instrument_2");

        assert_eq!(catalog.rate("instrument_1", "Gas").get(), 0.03);
        assert_eq!(catalog.rate("instrument_1", "Dining"), NonNegative::ZERO);
        assert_eq!(catalog.rate("instrument_2", "Gas"), NonNegative::ZERO);
        assert_eq!(catalog.rate("missing", "Gas"), NonNegative::ZERO);
    }

    #[test]
    fn add_instrument_keeps_existing_rates() {
        let mut catalog = Catalog::new();
        catalog.set_rate("instrument_1", "Gas", 0.03).unwrap();
        catalog.add_instrument("instrument_1");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rate("instrument_1", "Gas").get(), 0.03);
    }

    #[test]
    fn rejects_invalid_rate() {
        let mut catalog = Catalog::new();
        assert!(catalog.set_rate("instrument_1", "Gas", -0.01).is_err());
        assert!(catalog.is_empty(), "failed insert leaves catalog unchanged");
    }
}
