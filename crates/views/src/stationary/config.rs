use crate::{ConfigError, Samples};

/// Configuration for [`show_stationary`](crate::show_stationary).
///
/// Defaults to 5000 samples over `[-3, 3]`. The detector marks sign changes
/// between neighboring samples, so denser samples place the marks closer to
/// the true stationary points.
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryConfig {
    samples: Samples,
}

impl StationaryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Samples::standard(5000),
        }
    }

    /// Sets the inputs at which functions and derivatives are sampled.
    ///
    /// # Errors
    ///
    /// Returns an error if the values are not a valid [`Samples`] sequence.
    pub fn samples(mut self, values: Vec<f64>) -> Result<Self, ConfigError> {
        self.samples = Samples::new(values)?;
        Ok(self)
    }

    #[must_use]
    pub fn sample_values(&self) -> &Samples {
        &self.samples
    }
}

impl Default for StationaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
