//! Approximate stationary points from a densely sampled derivative.
//!
//! This is a visual crossing heuristic, not a root finder. It can miss
//! closely spaced double roots and can mark extra neighbors depending on the
//! sampling density. The thresholds below are part of its observable
//! behavior.

use crate::Univariate;

/// Derivative samples closer to zero than this are stationary.
pub const NEAR_ZERO: f64 = 1e-5;

/// Two nonzero signs whose sum has magnitude below this straddle a root.
pub const SIGN_SUM: f64 = 2.0;

/// A stationary point located on the sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryPoint {
    /// Index into the sample sequence.
    pub index: usize,

    /// The sample `w[index]`.
    pub w: f64,

    /// `g(w)`.
    pub value: f64,

    /// `g'(w)`: near zero, or the last sample before a sign change.
    pub derivative: f64,
}

/// Returns the sorted, deduplicated indices where `derivative` vanishes or
/// changes sign.
///
/// For each adjacent pair `(i, i + 1)`, index `i` is marked when its sign is
/// zero or its magnitude is below [`NEAR_ZERO`], index `i + 1` is marked when
/// its sign is zero, and index `i` is marked when the two signs are nonzero
/// and `|sign(i) + sign(i + 1)| < 2`.
#[must_use]
pub fn indices(derivative: &[f64]) -> Vec<usize> {
    let signs: Vec<f64> = derivative.iter().map(|&d| sign(d)).collect();
    let mut found = Vec::new();

    for (i, pair) in signs.windows(2).enumerate() {
        let (s1, s2) = (pair[0], pair[1]);

        if s1 == 0.0 || derivative[i].abs() < NEAR_ZERO {
            found.push(i);
        }
        if s2 == 0.0 {
            found.push(i + 1);
        }
        if (s1 + s2).abs() < SIGN_SUM && s1 != 0.0 && s2 != 0.0 {
            found.push(i);
        }
    }

    found.sort_unstable();
    found.dedup();
    found
}

/// Samples the derivative of `g` at `samples` and returns its stationary points.
pub fn detect(g: &impl Univariate, samples: &[f64]) -> Vec<StationaryPoint> {
    locate(g, samples, &crate::sample::derivatives(g, samples))
}

/// Returns the stationary points of `g` given its derivative already sampled
/// at `samples`.
///
/// `derivative[i]` must be `g'(samples[i])`.
pub fn locate(g: &impl Univariate, samples: &[f64], derivative: &[f64]) -> Vec<StationaryPoint> {
    let found: Vec<StationaryPoint> = indices(derivative)
        .into_iter()
        .map(|index| {
            let w = samples[index];
            StationaryPoint {
                index,
                w,
                value: g.value(w),
                derivative: derivative[index],
            }
        })
        .collect();

    log::debug!(
        "detected {} stationary point(s) over {} samples",
        found.len(),
        samples.len()
    );
    found
}

/// Sign as -1, 0, or 1; NaN maps to NaN so it never matches a crossing.
fn sign(d: f64) -> f64 {
    if d > 0.0 {
        1.0
    } else if d < 0.0 {
        -1.0
    } else if d == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}
