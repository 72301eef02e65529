use serde::Deserialize;
use thiserror::Error;

/// A finite `f64` that is guaranteed to be non-negative.
///
/// Spend amounts, reward rates, and annual costs are all stored as
/// `NonNegative`. The invariant is checked at construction time and
/// preserved by every public operation, so the optimizer never has to
/// re-check its inputs.
///
/// # Examples
///
/// ```
/// use perks_core::NonNegative;
///
/// let x = NonNegative::new(0.015).unwrap();
/// assert_eq!(x.get(), 0.015);
///
/// assert!(NonNegative::new(-5.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct NonNegative(f64);

/// Errors that can occur when constructing a [`NonNegative`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ValueError {
    #[error("value must be finite, got {0}")]
    NonFinite(f64),

    #[error("value must be non-negative, got {0}")]
    Negative(f64),
}

impl NonNegative {
    /// The additive identity.
    pub const ZERO: Self = Self(0.0);

    /// Constructs a `NonNegative` if `value` is finite and `>= 0`.
    ///
    /// Negative zero is normalized to positive zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite, or negative.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFinite(value));
        }
        if value < 0.0 {
            return Err(ValueError::Negative(value));
        }
        Ok(Self(value + 0.0))
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for NonNegative {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegative> for f64 {
    fn from(value: NonNegative) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(NonNegative::new(0.0).unwrap(), NonNegative::ZERO);
        assert_eq!(NonNegative::new(2.5).unwrap().get(), 2.5);
    }

    #[test]
    fn normalizes_negative_zero() {
        let zero = NonNegative::new(-0.0).unwrap();
        assert!(zero.get().is_sign_positive());
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(NonNegative::new(-1.0), Err(ValueError::Negative(-1.0)));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ValueError::NonFinite(_))
        ));
        assert_eq!(
            NonNegative::new(f64::INFINITY),
            Err(ValueError::NonFinite(f64::INFINITY))
        );
    }

    #[test]
    fn deserializes_with_validation() {
        let ok: NonNegative = serde_json::from_str("4.0").unwrap();
        assert_eq!(ok.get(), 4.0);

        let err = serde_json::from_str::<NonNegative>("-4.0");
        assert!(err.is_err(), "negative values are rejected");
    }
}
