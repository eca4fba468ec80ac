//! Dense sampling of functions over 1D ranges and 2D meshgrids.
//!
//! Samples are regenerated on every call; nothing here caches.

use crate::{Bivariate, Univariate};

/// Returns `n` evenly spaced values from `start` to `stop`, inclusive.
///
/// The last value is exactly `stop`. `n == 1` yields `[start]` and
/// `n == 0` yields an empty vector.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n - 1)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * step
                })
                .collect();
            values.push(stop);
            values
        }
    }
}

/// Evaluates `g` at every sample.
pub fn values(g: &impl Univariate, samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|&w| g.value(w)).collect()
}

/// Evaluates the derivative of `g` at every sample.
pub fn derivatives(g: &impl Univariate, samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|&w| g.derivative(w)).collect()
}

/// Returns `(min, max)` over the finite entries, or `None` if there are none.
#[must_use]
pub fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |bounds, v| match bounds {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// A function sampled on a rectangular meshgrid.
///
/// `values[row][col]` holds `g([xs[col], ys[row]])`, so rows run along the
/// second input.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl Grid {
    /// Samples `g` on the meshgrid of `xs` × `ys`.
    pub fn sample(g: &impl Bivariate, xs: &[f64], ys: &[f64]) -> Self {
        Self::from_fn(xs, ys, |w| g.value(w))
    }

    /// Builds a grid by calling `f` at every meshgrid node.
    pub fn from_fn(xs: &[f64], ys: &[f64], mut f: impl FnMut([f64; 2]) -> f64) -> Self {
        let values = ys
            .iter()
            .map(|&y| xs.iter().map(|&x| f([x, y])).collect())
            .collect();
        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            values,
        }
    }

    /// Returns a grid with the same nodes and every value replaced by `f(value)`.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.clone(),
            values: self
                .values
                .iter()
                .map(|row| row.iter().map(|&v| f(v)).collect())
                .collect(),
        }
    }

    /// Returns a grid with every node shifted by `offset` and values unchanged.
    #[must_use]
    pub fn translated(&self, offset: [f64; 2]) -> Self {
        Self {
            xs: self.xs.iter().map(|x| x + offset[0]).collect(),
            ys: self.ys.iter().map(|y| y + offset[1]).collect(),
            values: self.values.clone(),
        }
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Value at `(row, col)`.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Returns `(min, max)` over the finite values, or `None` if there are none.
    #[must_use]
    pub fn finite_bounds(&self) -> Option<(f64, f64)> {
        let flat: Vec<f64> = self.values.iter().flatten().copied().collect();
        finite_bounds(&flat)
    }
}
