use std::ops::{Add, Div, Mul, Neg, Sub};

/// A forward-mode dual number `value + tangent·ε` with `ε² = 0`.
///
/// Evaluating a function on `Dual::variable(w)` yields `f(w)` in
/// [`value`](Dual::value) and `f'(w)` in [`tangent`](Dual::tangent).
///
/// # Example
///
/// ```
/// use firstorder_core::Dual;
///
/// let w = Dual::variable(3.0);
/// let y = w * w + 2.0 * w;
///
/// assert_eq!(y.value, 15.0);
/// assert_eq!(y.tangent, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// The primal value.
    pub value: f64,

    /// The derivative carried alongside the value.
    pub tangent: f64,
}

impl Dual {
    /// Creates a dual number from its parts.
    #[must_use]
    pub const fn new(value: f64, tangent: f64) -> Self {
        Self { value, tangent }
    }

    /// A constant: zero tangent.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// The differentiation variable: unit tangent.
    #[must_use]
    pub const fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Applies a scalar function given its value and derivative at `self.value`.
    fn chain(self, value: f64, derivative: f64) -> Self {
        Self::new(value, derivative * self.tangent)
    }

    #[must_use]
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::constant(1.0);
        }
        let derivative = f64::from(n) * self.value.powi(n - 1);
        self.chain(self.value.powi(n), derivative)
    }

    #[must_use]
    pub fn powf(self, p: f64) -> Self {
        self.chain(self.value.powf(p), p * self.value.powf(p - 1.0))
    }

    #[must_use]
    pub fn sqrt(self) -> Self {
        let root = self.value.sqrt();
        self.chain(root, 0.5 / root)
    }

    #[must_use]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }

    #[must_use]
    pub fn ln(self) -> Self {
        self.chain(self.value.ln(), self.value.recip())
    }

    #[must_use]
    pub fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    #[must_use]
    pub fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    #[must_use]
    pub fn tan(self) -> Self {
        let t = self.value.tan();
        self.chain(t, 1.0 + t * t)
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        let t = self.value.tanh();
        self.chain(t, 1.0 - t * t)
    }

    /// Absolute value; the derivative at zero is taken as zero.
    #[must_use]
    pub fn abs(self) -> Self {
        let sign = if self.value == 0.0 { 0.0 } else { self.value.signum() };
        self.chain(self.value.abs(), sign)
    }
}

impl From<f64> for Dual {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Neg for Dual {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, -self.tangent)
    }
}

impl Add for Dual {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.tangent + rhs.tangent)
    }
}

impl Sub for Dual {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.tangent - rhs.tangent)
    }
}

impl Mul for Dual {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.tangent * rhs.value + self.value * rhs.tangent,
        )
    }
}

impl Div for Dual {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let denom = rhs.value * rhs.value;
        Self::new(
            self.value / rhs.value,
            (self.tangent * rhs.value - self.value * rhs.tangent) / denom,
        )
    }
}

/// Mixed arithmetic with plain constants, in both operand orders.
macro_rules! scalar_ops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<f64> for Dual {
                type Output = Dual;

                fn $method(self, rhs: f64) -> Dual {
                    $trait::$method(self, Dual::constant(rhs))
                }
            }

            impl $trait<Dual> for f64 {
                type Output = Dual;

                fn $method(self, rhs: Dual) -> Dual {
                    $trait::$method(Dual::constant(self), rhs)
                }
            }
        )*
    };
}

scalar_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn derivative(f: impl Fn(Dual) -> Dual, w: f64) -> f64 {
        f(Dual::variable(w)).tangent
    }

    #[test]
    fn product_and_quotient_rules() {
        let w = Dual::variable(2.0);
        let y = (w * w) / (w + 1.0);

        // d/dw w²/(w+1) = (w² + 2w)/(w+1)²
        assert_relative_eq!(y.value, 4.0 / 3.0);
        assert_relative_eq!(y.tangent, 8.0 / 9.0);
    }

    #[test]
    fn constants_mix_on_either_side() {
        let y = 3.0 - 2.0 * Dual::variable(5.0) / 4.0;
        assert_relative_eq!(y.value, 0.5);
        assert_relative_eq!(y.tangent, -0.5);
    }

    #[test]
    fn elementary_functions_match_closed_forms() {
        let w = 0.7;
        assert_relative_eq!(derivative(Dual::sin, w), w.cos());
        assert_relative_eq!(derivative(Dual::cos, w), -w.sin());
        assert_relative_eq!(derivative(Dual::exp, w), w.exp());
        assert_relative_eq!(derivative(Dual::ln, w), 1.0 / w);
        assert_relative_eq!(derivative(Dual::sqrt, w), 0.5 / w.sqrt());
        assert_relative_eq!(derivative(Dual::tan, w), 1.0 / w.cos().powi(2));
        assert_relative_eq!(derivative(Dual::tanh, w), 1.0 - w.tanh().powi(2));
        assert_relative_eq!(derivative(|d| d.powf(2.5), w), 2.5 * w.powf(1.5));
    }

    #[test]
    fn powi_handles_zero_and_negative_exponents() {
        assert_eq!(Dual::variable(4.0).powi(0), Dual::constant(1.0));
        assert_relative_eq!(derivative(|d| d.powi(-1), 2.0), -0.25);
        assert_relative_eq!(derivative(|d| d.powi(3), -1.0), 3.0);
    }

    #[test]
    fn abs_has_zero_slope_at_the_kink() {
        assert_relative_eq!(derivative(Dual::abs, -2.0), -1.0);
        assert_relative_eq!(derivative(Dual::abs, 0.0), 0.0);
    }
}
