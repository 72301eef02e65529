use std::collections::{BTreeMap, BTreeSet, btree_map};

use crate::{CategoryId, InstrumentId};

/// A mapping from each category to the single instrument chosen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    choices: BTreeMap<CategoryId, InstrumentId>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `instrument` to `category`, returning the previous choice.
    pub fn assign(
        &mut self,
        category: impl Into<CategoryId>,
        instrument: impl Into<InstrumentId>,
    ) -> Option<InstrumentId> {
        self.choices.insert(category.into(), instrument.into())
    }

    /// Returns the instrument chosen for `category`, if any.
    #[must_use]
    pub fn instrument_for(&self, category: &str) -> Option<&InstrumentId> {
        self.choices.get(category)
    }

    /// Returns the distinct instruments used by this assignment.
    #[must_use]
    pub fn instruments(&self) -> BTreeSet<&InstrumentId> {
        self.choices.values().collect()
    }

    /// Iterates over `(category, instrument)` in sorted category order.
    pub fn iter(&self) -> btree_map::Iter<'_, CategoryId, InstrumentId> {
        self.choices.iter()
    }

    /// Returns the number of assigned categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` if no category is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<C, I> FromIterator<(C, I)> for Assignment
where
    C: Into<CategoryId>,
    I: Into<InstrumentId>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        Self {
            choices: iter
                .into_iter()
                .map(|(category, instrument)| (category.into(), instrument.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a CategoryId, &'a InstrumentId);
    type IntoIter = btree_map::Iter<'a, CategoryId, InstrumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}
