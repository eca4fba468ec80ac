//! Contour tracing over a sampled [`Grid`].
//!
//! Line contours use marching squares with linear interpolation along cell
//! edges. Filled contours use coarse rectangular cells, each tagged with the
//! band containing the mean of its corners.

use crate::{Grid, levels::band_of};

/// A straight piece of an isoline.
pub type Segment = [[f64; 2]; 2];

/// A filled rectangle spanning `x[0]..x[1]` by `y[0]..y[1]` in band `band`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandCell {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub band: usize,
}

/// Traces the isoline `g = level` through every grid cell.
///
/// Cells with a non-finite corner are skipped. Saddle cells are resolved by
/// the mean of the four corners.
#[must_use]
pub fn isolines(grid: &Grid, level: f64) -> Vec<Segment> {
    let (xs, ys) = (grid.xs(), grid.ys());
    let mut segments = Vec::new();

    for row in 0..ys.len().saturating_sub(1) {
        for col in 0..xs.len().saturating_sub(1) {
            // Counter-clockwise from the lower-left corner.
            let corners = [
                ([xs[col], ys[row]], grid.at(row, col)),
                ([xs[col + 1], ys[row]], grid.at(row, col + 1)),
                ([xs[col + 1], ys[row + 1]], grid.at(row + 1, col + 1)),
                ([xs[col], ys[row + 1]], grid.at(row + 1, col)),
            ];
            if corners.iter().any(|(_, v)| !v.is_finite()) {
                continue;
            }
            trace_cell(corners, level, &mut segments);
        }
    }

    segments
}

fn trace_cell(corners: [([f64; 2], f64); 4], level: f64, out: &mut Vec<Segment>) {
    let above = corners.map(|(_, v)| v > level);

    // Edge k joins corner k to corner k + 1: bottom, right, top, left.
    let mut crossings: [Option<[f64; 2]>; 4] = [None; 4];
    for (k, crossing) in crossings.iter_mut().enumerate() {
        let (a, b) = (corners[k], corners[(k + 1) % 4]);
        if above[k] != above[(k + 1) % 4] {
            *crossing = Some(interpolate(a, b, level));
        }
    }

    match crossings {
        [None, None, None, None] => {}
        [Some(b), Some(r), Some(t), Some(l)] => {
            let center = corners.iter().map(|(_, v)| v).sum::<f64>() / 4.0;
            if (center > level) == above[0] {
                // Lower-left and upper-right connect through the center.
                out.push([b, r]);
                out.push([t, l]);
            } else {
                out.push([l, b]);
                out.push([r, t]);
            }
        }
        _ => {
            let mut points = crossings.into_iter().flatten();
            if let (Some(p), Some(q)) = (points.next(), points.next()) {
                out.push([p, q]);
            }
        }
    }
}

fn interpolate((a, va): ([f64; 2], f64), (b, vb): ([f64; 2], f64), level: f64) -> [f64; 2] {
    let t = (level - va) / (vb - va);
    [a[0] + t * (b[0] - a[0]), a[1] + t * (b[1] - a[1])]
}

/// Tiles the grid with at most `max_cells` cells per axis, each tagged with
/// its contour band.
///
/// Adjacent cells in a row that share a band are merged. Cells whose mean is
/// not finite are left out, as are all cells when fewer than two levels exist.
#[must_use]
pub fn band_cells(grid: &Grid, levels: &[f64], max_cells: usize) -> Vec<BandCell> {
    let (xs, ys) = (grid.xs(), grid.ys());
    let cols = coarse_breaks(xs.len(), max_cells);
    let rows = coarse_breaks(ys.len(), max_cells);
    let mut cells = Vec::new();

    for r in rows.windows(2) {
        let mut run: Option<BandCell> = None;
        for c in cols.windows(2) {
            let mean = (grid.at(r[0], c[0])
                + grid.at(r[0], c[1])
                + grid.at(r[1], c[1])
                + grid.at(r[1], c[0]))
                / 4.0;

            let cell = band_of(levels, mean).map(|band| BandCell {
                x: [xs[c[0]], xs[c[1]]],
                y: [ys[r[0]], ys[r[1]]],
                band,
            });

            run = match (run, cell) {
                (Some(mut open), Some(next)) if open.band == next.band => {
                    open.x[1] = next.x[1];
                    Some(open)
                }
                (open, next) => {
                    cells.extend(open);
                    next
                }
            };
        }
        cells.extend(run);
    }

    cells
}

/// Node indices that split `n` nodes into at most `max_cells` spans.
fn coarse_breaks(n: usize, max_cells: usize) -> Vec<usize> {
    if n < 2 || max_cells == 0 {
        return Vec::new();
    }
    let stride = (n - 1).div_ceil(max_cells);
    let mut breaks: Vec<usize> = (0..n - 1).step_by(stride).collect();
    breaks.push(n - 1);
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::linspace;
    use approx::assert_relative_eq;

    fn bowl(n: usize) -> Grid {
        let w = linspace(-2.0, 2.0, n);
        Grid::from_fn(&w, &w, |w| w[0] * w[0] + w[1] * w[1])
    }

    #[test]
    fn circle_isoline_lies_near_radius() {
        let segments = isolines(&bowl(81), 1.0);
        assert!(!segments.is_empty());

        for point in segments.iter().flatten() {
            let radius = point[0].hypot(point[1]);
            assert_relative_eq!(radius, 1.0, epsilon = 2e-3);
        }
    }

    #[test]
    fn level_outside_range_traces_nothing() {
        assert!(isolines(&bowl(21), -1.0).is_empty());
        assert!(isolines(&bowl(21), 100.0).is_empty());
    }

    #[test]
    fn single_cell_edge_interpolation() {
        // Values rise left to right: the 0.5 isoline is the vertical x = 0.5.
        let grid = Grid::from_fn(&[0.0, 1.0], &[0.0, 1.0], |w| w[0]);
        let segments = isolines(&grid, 0.5);
        assert_eq!(segments.len(), 1);
        let [p, q] = segments[0];
        assert_relative_eq!(p[0], 0.5);
        assert_relative_eq!(q[0], 0.5);
        assert_relative_eq!((p[1] - q[1]).abs(), 1.0);
    }

    #[test]
    fn saddle_cell_yields_two_segments() {
        let grid = Grid::from_fn(&[0.0, 1.0], &[0.0, 1.0], |w| {
            if w == [0.0, 0.0] || w == [1.0, 1.0] { 1.0 } else { 0.0 }
        });
        assert_eq!(isolines(&grid, 0.5).len(), 2);
    }

    #[test]
    fn non_finite_cells_are_skipped() {
        let grid = Grid::from_fn(&[0.0, 1.0, 2.0], &[0.0, 1.0], |w| {
            if w[0] == 0.0 { f64::NAN } else { w[0] }
        });
        // Only the right cell is traced; 1.5 crosses it once.
        assert_eq!(isolines(&grid, 1.5).len(), 1);
        assert!(isolines(&grid, 0.5).is_empty());
    }

    #[test]
    fn band_cells_respect_resolution_and_merge_runs() {
        let grid = bowl(401);
        let levels = [0.0, 2.0, 8.0];
        let cells = band_cells(&grid, &levels, 50);

        assert!(!cells.is_empty());
        assert!(cells.len() <= 50 * 50);
        assert!(cells.iter().all(|c| c.band < 2));
        assert!(cells.iter().all(|c| c.x[0] < c.x[1] && c.y[0] < c.y[1]));

        // A uniform field collapses to one cell per row.
        let flat = Grid::from_fn(&linspace(0.0, 1.0, 11), &linspace(0.0, 1.0, 11), |_| 1.0);
        let merged = band_cells(&flat, &levels, 5);
        assert_eq!(merged.len(), 5);
        assert!(merged.iter().all(|c| c.x == [0.0, 1.0]));
    }

    #[test]
    fn coarse_breaks_cover_every_node() {
        assert_eq!(coarse_breaks(11, 5), [0, 2, 4, 6, 8, 10]);
        assert_eq!(coarse_breaks(11, 3), [0, 4, 8, 10]);
        assert_eq!(coarse_breaks(3, 10), [0, 1, 2]);
        assert!(coarse_breaks(1, 10).is_empty());
    }
}
