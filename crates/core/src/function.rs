use crate::Dual;

/// A single-input function paired with a way to differentiate it.
///
/// Views sample [`value`](Univariate::value) densely and ask for
/// [`derivative`](Univariate::derivative) wherever a slope is displayed.
/// Implementations decide how the derivative is produced; see [`AutoDiff`]
/// and [`CentralDifference`].
pub trait Univariate {
    /// Evaluates the function at `w`.
    fn value(&self, w: f64) -> f64;

    /// Evaluates the derivative at `w`.
    fn derivative(&self, w: f64) -> f64;
}

/// A two-input function paired with a way to compute its gradient.
pub trait Bivariate {
    /// Evaluates the function at `w`.
    fn value(&self, w: [f64; 2]) -> f64;

    /// Evaluates the gradient at `w`, with the same shape as `w`.
    fn gradient(&self, w: [f64; 2]) -> [f64; 2];
}

impl<T: Univariate + ?Sized> Univariate for &T {
    fn value(&self, w: f64) -> f64 {
        (**self).value(w)
    }

    fn derivative(&self, w: f64) -> f64 {
        (**self).derivative(w)
    }
}

impl<T: Bivariate + ?Sized> Bivariate for &T {
    fn value(&self, w: [f64; 2]) -> f64 {
        (**self).value(w)
    }

    fn gradient(&self, w: [f64; 2]) -> [f64; 2] {
        (**self).gradient(w)
    }
}

/// Exact derivatives by forward-mode differentiation over [`Dual`].
///
/// Wrap a closure written against `Dual`, either `Fn(Dual) -> Dual` for one
/// input or `Fn([Dual; 2]) -> Dual` for two.
///
/// # Example
///
/// ```
/// use firstorder_core::{AutoDiff, Bivariate, Dual, Univariate};
///
/// let g = AutoDiff::new(|w: Dual| w.sin() + 0.1 * w * w);
/// assert_eq!(g.derivative(0.0), 1.0);
///
/// let bowl = AutoDiff::new(|w: [Dual; 2]| w[0] * w[0] + w[1] * w[1]);
/// assert_eq!(bowl.gradient([1.0, -2.0]), [2.0, -4.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AutoDiff<F> {
    func: F,
}

impl<F> AutoDiff<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Univariate for AutoDiff<F>
where
    F: Fn(Dual) -> Dual,
{
    fn value(&self, w: f64) -> f64 {
        (self.func)(Dual::constant(w)).value
    }

    fn derivative(&self, w: f64) -> f64 {
        (self.func)(Dual::variable(w)).tangent
    }
}

impl<F> Bivariate for AutoDiff<F>
where
    F: Fn([Dual; 2]) -> Dual,
{
    fn value(&self, w: [f64; 2]) -> f64 {
        (self.func)(w.map(Dual::constant)).value
    }

    fn gradient(&self, w: [f64; 2]) -> [f64; 2] {
        let d0 = (self.func)([Dual::variable(w[0]), Dual::constant(w[1])]);
        let d1 = (self.func)([Dual::constant(w[0]), Dual::variable(w[1])]);
        [d0.tangent, d1.tangent]
    }
}

/// Approximate derivatives by central differences on a plain `f64` closure.
///
/// Each partial is `(f(w + h) - f(w - h)) / 2h`.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<F> {
    func: F,
    step: f64,
}

impl<F> CentralDifference<F> {
    /// Default half-width of the difference stencil.
    pub const DEFAULT_STEP: f64 = 1e-6;

    pub fn new(func: F) -> Self {
        Self::with_step(func, Self::DEFAULT_STEP)
    }

    /// Uses `step` as the stencil half-width.
    ///
    /// The step is used as given; a zero step yields non-finite derivatives.
    pub fn with_step(func: F, step: f64) -> Self {
        Self { func, step }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl<F> Univariate for CentralDifference<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, w: f64) -> f64 {
        (self.func)(w)
    }

    fn derivative(&self, w: f64) -> f64 {
        let h = self.step;
        ((self.func)(w + h) - (self.func)(w - h)) / (2.0 * h)
    }
}

impl<F> Bivariate for CentralDifference<F>
where
    F: Fn([f64; 2]) -> f64,
{
    fn value(&self, w: [f64; 2]) -> f64 {
        (self.func)(w)
    }

    fn gradient(&self, w: [f64; 2]) -> [f64; 2] {
        let h = self.step;
        std::array::from_fn(|i| {
            let mut plus = w;
            let mut minus = w;
            plus[i] += h;
            minus[i] -= h;
            ((self.func)(plus) - (self.func)(minus)) / (2.0 * h)
        })
    }
}
