use std::collections::BTreeMap;

use crate::{CategoryId, NonNegative, ValueError};

/// Forecast annual spend per category.
///
/// The forecast's keys are exactly the categories a solver must assign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingForecast {
    amounts: BTreeMap<CategoryId, NonNegative>,
}

impl SpendingForecast {
    /// Creates an empty forecast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a forecast from `(category, amount)` pairs.
    ///
    /// Later pairs replace earlier ones for the same category.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount is negative or non-finite.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, ValueError>
    where
        K: Into<CategoryId>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut forecast = Self::new();
        for (category, amount) in pairs {
            forecast.set(category, amount)?;
        }
        Ok(forecast)
    }

    /// Sets the forecast amount for a category.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is negative or non-finite.
    pub fn set(&mut self, category: impl Into<CategoryId>, amount: f64) -> Result<(), ValueError> {
        let amount = NonNegative::new(amount)?;
        self.insert(category.into(), amount);
        Ok(())
    }

    /// Sets an already validated amount.
    pub fn insert(&mut self, category: CategoryId, amount: NonNegative) {
        self.amounts.insert(category, amount);
    }

    /// Returns the forecast amount for `category`, if present.
    #[must_use]
    pub fn amount(&self, category: &str) -> Option<NonNegative> {
        self.amounts.get(category).copied()
    }

    /// Iterates over `(category, amount)` in sorted category order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, NonNegative)> {
        self.amounts.iter().map(|(category, amount)| (category, *amount))
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns `true` if the forecast has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
