use crate::{Camera, ConfigError, Samples};

/// Configuration for [`compare_2d3d`](crate::compare_2d3d).
///
/// Construct with [`CompareConfig::new`] and chain builder methods as needed.
/// Defaults: a (20°, -65°) view, 200 samples over `[-3, 3]`, and tangency at
/// `w = 0` and `w = (0, 0)`.
///
/// # Example
///
/// ```
/// use firstorder_views::CompareConfig;
///
/// let config = CompareConfig::new()
///     .point(1.0)?
///     .plane_point([1.0, 1.0])?
///     .view(30.0, -45.0)?;
/// # Ok::<(), firstorder_views::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    view: Camera,
    samples: Samples,
    point: f64,
    plane_point: [f64; 2],
}

impl CompareConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Camera::new(20.0, -65.0),
            samples: Samples::standard(200),
            point: 0.0,
            plane_point: [0.0, 0.0],
        }
    }

    /// Sets the 3D viewing angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if either angle is not finite.
    pub fn view(mut self, elevation: f64, azimuth: f64) -> Result<Self, ConfigError> {
        if !elevation.is_finite() || !azimuth.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        self.view = Camera::new(elevation, azimuth);
        Ok(self)
    }

    /// Sets the inputs at which both functions are sampled.
    ///
    /// The 2D function is sampled on the meshgrid of these values with
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the values are not a valid [`Samples`] sequence.
    pub fn samples(mut self, values: Vec<f64>) -> Result<Self, ConfigError> {
        self.samples = Samples::new(values)?;
        Ok(self)
    }

    /// Sets the point of tangency for the 1D function.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not finite.
    pub fn point(mut self, point: f64) -> Result<Self, ConfigError> {
        if !point.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        self.point = point;
        Ok(self)
    }

    /// Sets the point of tangency for the 2D function.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite.
    pub fn plane_point(mut self, point: [f64; 2]) -> Result<Self, ConfigError> {
        if point.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        self.plane_point = point;
        Ok(self)
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.view
    }

    #[must_use]
    pub fn sample_values(&self) -> &Samples {
        &self.samples
    }

    #[must_use]
    pub fn tangent_point(&self) -> f64 {
        self.point
    }

    #[must_use]
    pub fn tangent_plane_point(&self) -> [f64; 2] {
        self.plane_point
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CompareConfig::default();
        assert_eq!(config.camera(), Camera::new(20.0, -65.0));
        assert_eq!(config.sample_values().as_slice().len(), 200);
        assert_eq!(config.sample_values().first(), -3.0);
        assert_eq!(config.sample_values().last(), 3.0);
        assert_eq!(config.tangent_point(), 0.0);
        assert_eq!(config.tangent_plane_point(), [0.0, 0.0]);
    }

    #[test]
    fn rejects_non_finite_points() {
        assert_eq!(
            CompareConfig::new().point(f64::NAN),
            Err(ConfigError::NonFinite)
        );
        assert_eq!(
            CompareConfig::new().plane_point([0.0, f64::INFINITY]),
            Err(ConfigError::NonFinite)
        );
        assert_eq!(
            CompareConfig::new().view(f64::NAN, 0.0),
            Err(ConfigError::NonFinite)
        );
    }

    #[test]
    fn rejects_bad_samples() {
        assert_eq!(
            CompareConfig::new().samples(vec![0.0]),
            Err(ConfigError::TooFewSamples(1))
        );
    }
}
