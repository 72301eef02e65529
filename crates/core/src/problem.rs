use thiserror::Error;
use tracing::debug;

use crate::{AnnualCosts, Assignment, Catalog, CategoryId, FeePolicy, InstrumentId, SpendingForecast};

/// Errors in caller-supplied inputs, detected before any solving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("catalog has no instruments")]
    EmptyCatalog,

    #[error("spending forecast has no categories")]
    EmptySpending,

    #[error("no annual cost for instrument `{instrument}`")]
    MissingCost { instrument: InstrumentId },
}

/// Errors that can occur when evaluating an assignment against a problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("category `{category}` is not assigned")]
    Unassigned { category: CategoryId },

    #[error("category `{category}` is not in the spending forecast")]
    UnknownCategory { category: CategoryId },

    #[error("instrument `{instrument}` is not in the catalog")]
    UnknownInstrument { instrument: InstrumentId },
}

/// A validated assignment problem with dense, index-addressable data.
///
/// Construction checks that both the catalog and the forecast are non-empty
/// and that every instrument has an annual cost, then fills a rate for every
/// (instrument, category) pair, using zero where the catalog lists none.
/// Instruments and categories are stored in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentProblem {
    instruments: Vec<InstrumentId>,
    categories: Vec<CategoryId>,
    spend: Vec<f64>,
    fees: Vec<f64>,
    /// Indexed as `rates[instrument][category]`.
    rates: Vec<Vec<f64>>,
}

impl AssignmentProblem {
    /// Validates the inputs and builds a problem from them.
    ///
    /// Cost entries for instruments outside the catalog are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or forecast is empty, or if an
    /// instrument in the catalog has no annual cost.
    pub fn new(
        catalog: &Catalog,
        spending: &SpendingForecast,
        costs: &AnnualCosts,
    ) -> Result<Self, ProblemError> {
        if catalog.is_empty() {
            return Err(ProblemError::EmptyCatalog);
        }
        if spending.is_empty() {
            return Err(ProblemError::EmptySpending);
        }

        let instruments: Vec<InstrumentId> = catalog.instruments().cloned().collect();
        let fees = instruments
            .iter()
            .map(|instrument| {
                costs
                    .cost(instrument.as_str())
                    .map(f64::from)
                    .ok_or_else(|| ProblemError::MissingCost {
                        instrument: instrument.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (categories, spend): (Vec<CategoryId>, Vec<f64>) = spending
            .iter()
            .map(|(category, amount)| (category.clone(), amount.get()))
            .unzip();

        let rates = instruments
            .iter()
            .map(|instrument| {
                categories
                    .iter()
                    .map(|category| catalog.rate(instrument.as_str(), category.as_str()).get())
                    .collect()
            })
            .collect();

        debug!(
            instruments = instruments.len(),
            categories = categories.len(),
            "built assignment problem"
        );

        Ok(Self {
            instruments,
            categories,
            spend,
            fees,
            rates,
        })
    }

    /// Returns the instruments, sorted.
    #[must_use]
    pub fn instruments(&self) -> &[InstrumentId] {
        &self.instruments
    }

    /// Returns the categories, sorted.
    #[must_use]
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Returns the index of `instrument`, if present.
    #[must_use]
    pub fn instrument_index(&self, instrument: &str) -> Option<usize> {
        self.instruments
            .binary_search_by(|probe| probe.as_str().cmp(instrument))
            .ok()
    }

    /// Returns the index of `category`, if present.
    #[must_use]
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|probe| probe.as_str().cmp(category))
            .ok()
    }

    /// Returns the annual cost of the instrument at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn fee(&self, i: usize) -> f64 {
        self.fees[i]
    }

    /// Returns the rate of instrument `i` in category `c`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn rate(&self, i: usize, c: usize) -> f64 {
        self.rates[i][c]
    }

    /// Returns the gross reward of assigning instrument `i` to category `c`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn reward(&self, i: usize, c: usize) -> f64 {
        self.spend[c] * self.rates[i][c]
    }

    /// Computes the net reward of a complete assignment under `policy`.
    ///
    /// This is independent of any solver and is the reference for checking
    /// a solver's reported objective.
    ///
    /// # Errors
    ///
    /// Returns an error if any category is unassigned, or if the assignment
    /// names a category or instrument outside this problem.
    pub fn net_reward(&self, assignment: &Assignment, policy: FeePolicy) -> Result<f64, EvalError> {
        if let Some((category, _)) = assignment
            .iter()
            .find(|(category, _)| self.category_index(category.as_str()).is_none())
        {
            return Err(EvalError::UnknownCategory {
                category: category.clone(),
            });
        }

        let mut counts = vec![0_usize; self.instruments.len()];
        let mut gross = 0.0;
        for (c, category) in self.categories.iter().enumerate() {
            let instrument = assignment.instrument_for(category.as_str()).ok_or_else(|| {
                EvalError::Unassigned {
                    category: category.clone(),
                }
            })?;
            let i = self.instrument_index(instrument.as_str()).ok_or_else(|| {
                EvalError::UnknownInstrument {
                    instrument: instrument.clone(),
                }
            })?;
            counts[i] += 1;
            gross += self.reward(i, c);
        }

        let fees: f64 = counts
            .iter()
            .zip(&self.fees)
            .map(|(&count, &fee)| policy.charge(fee, count))
            .sum();

        Ok(gross - fees)
    }
}
