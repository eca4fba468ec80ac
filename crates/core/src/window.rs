/// A rectangular viewing window `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    /// Extra room around a weight history, as a fraction of each axis extent.
    pub const HISTORY_MARGIN: f64 = 0.25;

    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// A square window `[-half, half]²`.
    #[must_use]
    pub const fn centered(half: f64) -> Self {
        Self::new(-half, half, -half, half)
    }

    /// The bounding box of `history`, widened by [`Self::HISTORY_MARGIN`] of
    /// its extent on every side.
    ///
    /// Returns `None` for an empty history. A history that never moves along
    /// an axis yields a zero-width window on that axis.
    #[must_use]
    pub fn around(history: &[[f64; 2]]) -> Option<Self> {
        let first = history.first()?;
        let mut bounds = Self::new(first[0], first[0], first[1], first[1]);
        for w in &history[1..] {
            bounds.x_min = bounds.x_min.min(w[0]);
            bounds.x_max = bounds.x_max.max(w[0]);
            bounds.y_min = bounds.y_min.min(w[1]);
            bounds.y_max = bounds.y_max.max(w[1]);
        }

        let x_gap = (bounds.x_max - bounds.x_min) * Self::HISTORY_MARGIN;
        let y_gap = (bounds.y_max - bounds.y_min) * Self::HISTORY_MARGIN;
        Some(Self::new(
            bounds.x_min - x_gap,
            bounds.x_max + x_gap,
            bounds.y_min - y_gap,
            bounds.y_max + y_gap,
        ))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns `true` when both extents are finite and positive.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        let positive = |extent: f64| extent.is_finite() && extent > 0.0;
        positive(self.width()) && positive(self.height())
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::centered(3.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_window_is_symmetric() {
        let window = Window::default();
        assert_eq!(window, Window::new(-3.1, 3.1, -3.1, 3.1));
        assert!(window.is_proper());
    }

    #[test]
    fn around_history_adds_quarter_margins() {
        let history = [[1.0, 2.0], [3.0, -2.0], [2.0, 0.0]];
        let window = Window::around(&history).expect("non-empty history");

        assert_relative_eq!(window.x_min, 0.5);
        assert_relative_eq!(window.x_max, 3.5);
        assert_relative_eq!(window.y_min, -3.0);
        assert_relative_eq!(window.y_max, 3.0);
    }

    #[test]
    fn around_degenerate_history() {
        assert_eq!(Window::around(&[]), None);

        let still = Window::around(&[[1.0, 1.0]]).expect("one point");
        assert_eq!(still.width(), 0.0);
        assert!(!still.is_proper());
    }
}
