//! Orthographic projection of 3D axes onto a panel.
//!
//! Points are first normalized so each axis spans `[-1, 1]` over its limits,
//! then rotated by the azimuth about the vertical axis and tilted by the
//! elevation.

use crate::figure::Surface;

/// A viewing direction for 3D axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Angle above the `w1`-`w2` plane.
    pub elevation: f64,
    /// Rotation about the vertical axis.
    pub azimuth: f64,
}

/// A projected surface face, ready for back-to-front drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [[f64; 2]; 4],
    /// Distance toward the viewer; larger is nearer.
    pub depth: f64,
}

impl Camera {
    #[must_use]
    pub const fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation,
            azimuth,
        }
    }

    /// Projects `point` onto the panel plane.
    #[must_use]
    pub fn project(&self, point: [f64; 3], limits: &[[f64; 2]; 3]) -> [f64; 2] {
        let [x, y, z] = normalize(point, limits);
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        let u = -x * sin_az + y * cos_az;
        let v = -(x * cos_az + y * sin_az) * sin_el + z * cos_el;
        [u, v]
    }

    /// Signed distance of `point` toward the viewer.
    #[must_use]
    pub fn depth(&self, point: [f64; 3], limits: &[[f64; 2]; 3]) -> f64 {
        let [x, y, z] = normalize(point, limits);
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        (x * cos_az + y * sin_az) * cos_el + z * sin_el
    }

    /// Projected wireframe polylines of `surface`: every `stride`-th row and
    /// column plus the last of each.
    #[must_use]
    pub fn wireframe(&self, surface: &Surface, limits: &[[f64; 2]; 3]) -> Vec<Vec<[f64; 2]>> {
        let grid = &surface.grid;
        let (xs, ys) = (grid.xs(), grid.ys());
        let node = |row: usize, col: usize| {
            self.project([xs[col], ys[row], grid.at(row, col)], limits)
        };

        let rows = strided(ys.len(), surface.stride);
        let cols = strided(xs.len(), surface.stride);

        let along_rows = rows
            .iter()
            .map(|&row| (0..xs.len()).map(|col| node(row, col)).collect::<Vec<_>>());
        let along_cols = cols
            .iter()
            .map(|&col| (0..ys.len()).map(|row| node(row, col)).collect::<Vec<_>>());
        along_rows.chain(along_cols).collect()
    }

    /// Projected faces between adjacent wireframe lines, sorted far to near.
    #[must_use]
    pub fn faces(&self, surface: &Surface, limits: &[[f64; 2]; 3]) -> Vec<Quad> {
        let grid = &surface.grid;
        let (xs, ys) = (grid.xs(), grid.ys());
        let rows = strided(ys.len(), surface.stride);
        let cols = strided(xs.len(), surface.stride);

        let mut quads = Vec::new();
        for r in rows.windows(2) {
            for c in cols.windows(2) {
                let nodes = [(r[0], c[0]), (r[0], c[1]), (r[1], c[1]), (r[1], c[0])]
                    .map(|(row, col)| [xs[col], ys[row], grid.at(row, col)]);
                if nodes.iter().flatten().any(|v| !v.is_finite()) {
                    continue;
                }
                let center = [0, 1, 2].map(|k| nodes.iter().map(|n| n[k]).sum::<f64>() / 4.0);
                quads.push(Quad {
                    corners: nodes.map(|n| self.project(n, limits)),
                    depth: self.depth(center, limits),
                });
            }
        }

        quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        quads
    }
}

fn normalize(point: [f64; 3], limits: &[[f64; 2]; 3]) -> [f64; 3] {
    std::array::from_fn(|k| {
        let [lo, hi] = limits[k];
        let half = (hi - lo) / 2.0;
        if half == 0.0 {
            0.0
        } else {
            (point[k] - (lo + hi) / 2.0) / half
        }
    })
}

/// Indices `0, stride, 2·stride, …` plus the last index.
fn strided(n: usize, stride: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut indices: Vec<usize> = (0..n).step_by(stride.max(1)).collect();
    if indices.last() != Some(&(n - 1)) {
        indices.push(n - 1);
    }
    indices
}
