use firstorder_core::sample::linspace;

use crate::ConfigError;

/// A validated 1D sample sequence: finite, strictly increasing, and at least
/// two points long.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Vec<f64>);

impl Samples {
    /// Validates `values` as a sample sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two values, any value is not
    /// finite, or the values are not strictly increasing.
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigError> {
        if values.len() < 2 {
            return Err(ConfigError::TooFewSamples(values.len()));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::NotIncreasing);
        }
        Ok(Self(values))
    }

    /// `n` evenly spaced samples over `[start, stop]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`, the bounds are not finite, or
    /// `start >= stop`.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Self, ConfigError> {
        Self::new(linspace(start, stop, n))
    }

    /// `n` evenly spaced samples over the lesson range `[-3, 3]`.
    pub(crate) fn standard(n: usize) -> Self {
        debug_assert!(n >= 2);
        Self(linspace(-3.0, 3.0, n))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// `last - first`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.last() - self.first()
    }
}

impl AsRef<[f64]> for Samples {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_finite_values() {
        let samples = Samples::new(vec![-1.0, 0.0, 2.5]).unwrap();
        assert_eq!(samples.first(), -1.0);
        assert_eq!(samples.last(), 2.5);
        assert_eq!(samples.span(), 3.5);
    }

    #[test]
    fn rejects_bad_sequences() {
        assert_eq!(Samples::new(vec![1.0]), Err(ConfigError::TooFewSamples(1)));
        assert_eq!(Samples::new(vec![0.0, f64::NAN]), Err(ConfigError::NonFinite));
        assert_eq!(Samples::new(vec![0.0, 0.0]), Err(ConfigError::NotIncreasing));
        assert_eq!(Samples::new(vec![1.0, 0.0]), Err(ConfigError::NotIncreasing));
        assert_eq!(Samples::linspace(3.0, -3.0, 10), Err(ConfigError::NotIncreasing));
    }
}
