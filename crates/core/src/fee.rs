/// Defines how annual costs are charged against the reward.
///
/// The choice changes optimal assignments: under [`PerAssignment`] an
/// instrument's cost grows with the number of categories it serves, which
/// favors spreading categories across fee-free instruments.
///
/// [`PerAssignment`]: FeePolicy::PerAssignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeePolicy {
    /// Charge an instrument's cost once for every category assigned to it.
    PerAssignment,

    /// Charge an instrument's cost once if it is assigned any category.
    #[default]
    PerInstrument,
}

impl FeePolicy {
    /// Returns the cost charged for an instrument serving `count` categories.
    #[must_use]
    pub fn charge(self, cost: f64, count: usize) -> f64 {
        match self {
            Self::PerAssignment => cost * count as f64,
            Self::PerInstrument if count > 0 => cost,
            Self::PerInstrument => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_assignment_scales_with_count() {
        assert_eq!(FeePolicy::PerAssignment.charge(95.0, 0), 0.0);
        assert_eq!(FeePolicy::PerAssignment.charge(95.0, 3), 285.0);
    }

    #[test]
    fn per_instrument_charges_once() {
        assert_eq!(FeePolicy::PerInstrument.charge(95.0, 0), 0.0);
        assert_eq!(FeePolicy::PerInstrument.charge(95.0, 1), 95.0);
        assert_eq!(FeePolicy::PerInstrument.charge(95.0, 3), 95.0);
    }

    #[test]
    fn default_is_per_instrument() {
        assert_eq!(FeePolicy::default(), FeePolicy::PerInstrument);
    }
}
