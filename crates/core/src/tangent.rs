use crate::{Bivariate, Univariate};

/// First-order approximation of a single-input function at a point:
/// `h(w) = g(p) + g'(p) (w - p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentLine {
    /// The point of tangency.
    pub point: f64,

    /// `g(point)`.
    pub value: f64,

    /// `g'(point)`.
    pub slope: f64,
}

impl TangentLine {
    /// Builds the tangent line of `g` at `point`.
    pub fn at(g: &impl Univariate, point: f64) -> Self {
        Self {
            point,
            value: g.value(point),
            slope: g.derivative(point),
        }
    }

    /// A horizontal line through `(point, value)`, as drawn at stationary points.
    #[must_use]
    pub fn flat(point: f64, value: f64) -> Self {
        Self {
            point,
            value,
            slope: 0.0,
        }
    }

    /// Evaluates the approximation at `w`.
    #[must_use]
    pub fn eval(&self, w: f64) -> f64 {
        self.value + self.slope * (w - self.point)
    }

    /// Samples the line over `[point - half_width, point + half_width]`.
    #[must_use]
    pub fn sample(&self, half_width: f64, n: usize) -> Vec<[f64; 2]> {
        crate::sample::linspace(self.point - half_width, self.point + half_width, n)
            .into_iter()
            .map(|w| [w, self.eval(w)])
            .collect()
    }
}

/// First-order approximation of a two-input function at a point:
/// `h(w) = g(p) + ∇g(p)·(w - p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPlane {
    /// The point of tangency.
    pub point: [f64; 2],

    /// `g(point)`.
    pub value: f64,

    /// `∇g(point)`.
    pub gradient: [f64; 2],
}

impl TangentPlane {
    /// Builds the tangent plane of `g` at `point`.
    pub fn at(g: &impl Bivariate, point: [f64; 2]) -> Self {
        Self {
            point,
            value: g.value(point),
            gradient: g.gradient(point),
        }
    }

    /// Evaluates the approximation at `w`.
    #[must_use]
    pub fn eval(&self, w: [f64; 2]) -> f64 {
        self.value
            + self.gradient[0] * (w[0] - self.point[0])
            + self.gradient[1] * (w[1] - self.point[1])
    }
}
