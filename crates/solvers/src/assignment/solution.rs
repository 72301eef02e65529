use std::collections::BTreeSet;

use perks_core::{Assignment, InstrumentId};

/// Indicates whether the solver found an optimal assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Found an assignment with maximal, non-negative net reward.
    Optimal,

    /// Every complete assignment has a negative net reward.
    NoSolution,

    /// Reached the configured time limit before finishing.
    TimedOut,
}

/// The result of an assignment solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Chosen instrument per category; empty unless optimal.
    pub assignment: Assignment,

    /// Net reward of the assignment; zero unless optimal.
    pub total_reward: f64,
}

impl Solution {
    pub(super) fn unsolved(status: Status) -> Self {
        Self {
            status,
            assignment: Assignment::new(),
            total_reward: 0.0,
        }
    }

    /// Returns `true` if the solve found an optimal assignment.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Returns the distinct instruments used by the assignment.
    #[must_use]
    pub fn instruments(&self) -> BTreeSet<&InstrumentId> {
        self.assignment.instruments()
    }
}
