//! Shared functions and weight histories for end-to-end tests.

use firstorder_core::{AutoDiff, Bivariate, Dual};

/// `g(w) = w²`.
pub fn parabola() -> AutoDiff<impl Fn(Dual) -> Dual> {
    AutoDiff::new(|w: Dual| w * w)
}

/// `g(w1, w2) = w1² + w2²`.
pub fn bowl() -> AutoDiff<impl Fn([Dual; 2]) -> Dual> {
    AutoDiff::new(|w: [Dual; 2]| w[0] * w[0] + w[1] * w[1])
}

/// An elongated bowl, `g(w1, w2) = w1² / 2 + 4 w2²`.
pub fn valley() -> AutoDiff<impl Fn([Dual; 2]) -> Dual> {
    AutoDiff::new(|w: [Dual; 2]| 0.5 * w[0] * w[0] + 4.0 * w[1] * w[1])
}

/// Fixed-step gradient descent from `start`, returning every iterate.
pub fn descend(g: &impl Bivariate, start: [f64; 2], alpha: f64, steps: usize) -> Vec<[f64; 2]> {
    let mut w = start;
    let mut history = vec![w];
    for _ in 0..steps {
        let [d0, d1] = g.gradient(w);
        w = [w[0] - alpha * d0, w[1] - alpha * d1];
        history.push(w);
    }
    history
}
