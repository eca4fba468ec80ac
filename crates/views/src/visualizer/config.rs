use firstorder_core::Window;

use crate::ConfigError;

/// Configuration for [`Visualizer::render`](crate::Visualizer::render).
///
/// Defaults: both panels shown, a `[-3.1, 3.1]²` window, 20 contour levels,
/// a fixed window rather than one fitted to the weights, and connected
/// iterates.
///
/// # Example
///
/// ```
/// use firstorder_core::Window;
/// use firstorder_views::ContourConfig;
///
/// let config = ContourConfig::new()
///     .window(Window::new(-1.0, 4.0, -2.0, 2.0))?
///     .num_contours(12)?
///     .show_original(false);
/// # Ok::<(), firstorder_views::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourConfig {
    show_original: bool,
    window: Window,
    num_contours: usize,
    view_by_weights: bool,
    arrows: bool,
}

impl ContourConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_original: true,
            window: Window::default(),
            num_contours: 20,
            view_by_weights: false,
            arrows: true,
        }
    }

    /// Shows the plain contour panel to the left of the annotated one.
    #[must_use]
    pub fn show_original(mut self, show: bool) -> Self {
        self.show_original = show;
        self
    }

    /// Sets the window the function is sampled and drawn over.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has no finite, positive area.
    pub fn window(mut self, window: Window) -> Result<Self, ConfigError> {
        if !window.is_proper() {
            return Err(ConfigError::EmptyWindow);
        }
        self.window = window;
        Ok(self)
    }

    /// Sets the number of contour levels requested.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn num_contours(mut self, count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoContours);
        }
        self.num_contours = count;
        Ok(self)
    }

    /// Fits the window to the weight history instead of the configured one.
    #[must_use]
    pub fn view_by_weights(mut self, fit: bool) -> Self {
        self.view_by_weights = fit;
        self
    }

    /// Connects consecutive iterates with line segments.
    #[must_use]
    pub fn arrows(mut self, arrows: bool) -> Self {
        self.arrows = arrows;
        self
    }

    #[must_use]
    pub fn shows_original(&self) -> bool {
        self.show_original
    }

    #[must_use]
    pub fn configured_window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.num_contours
    }

    #[must_use]
    pub fn fits_weights(&self) -> bool {
        self.view_by_weights
    }

    #[must_use]
    pub fn connects_iterates(&self) -> bool {
        self.arrows
    }
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ContourConfig::default();
        assert!(config.shows_original());
        assert_eq!(config.configured_window(), Window::centered(3.1));
        assert_eq!(config.contour_count(), 20);
        assert!(!config.fits_weights());
        assert!(config.connects_iterates());
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert_eq!(
            ContourConfig::new().window(Window::new(1.0, 1.0, -1.0, 1.0)),
            Err(ConfigError::EmptyWindow)
        );
        assert_eq!(
            ContourConfig::new().window(Window::new(2.0, 1.0, -1.0, 1.0)),
            Err(ConfigError::EmptyWindow)
        );
        assert_eq!(
            ContourConfig::new().window(Window::new(0.0, f64::INFINITY, -1.0, 1.0)),
            Err(ConfigError::EmptyWindow)
        );
    }

    #[test]
    fn rejects_zero_contours() {
        assert_eq!(
            ContourConfig::new().num_contours(0),
            Err(ConfigError::NoContours)
        );
    }
}
