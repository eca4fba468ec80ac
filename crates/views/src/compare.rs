//! A single-input function beside its two-input counterpart, each with its
//! first-order approximation.
//!
//! The left panel shows `g(w)`, the tangent line at the configured point, and
//! a flattened zero axis. The right panel shows the surface `g(w1, w2)`, the
//! `z = 0` plane, and the tangent plane, from the configured viewing angle.

mod config;

pub use config::CompareConfig;

use firstorder_core::{
    Bivariate, Grid, Rgb, TangentLine, TangentPlane, Univariate,
    sample::{self, finite_bounds},
};

use crate::{
    Camera, Figure, Renderer, Samples,
    figure::{Axes2d, Axes3d, Line, Mark3, MarkerStyle, Points, Stroke, Surface},
};

/// Half-width of the drawn tangent line around the point of tangency.
const TANGENT_REACH: f64 = 3.0;
const TANGENT_SAMPLES: usize = 100;

const SURFACE_STRIDE: usize = 25;
const PLANE_STRIDE: usize = 50;

/// The approximations drawn by a comparison figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareReport {
    pub line: TangentLine,
    pub plane: TangentPlane,
}

/// Renders the side-by-side comparison of `curve` and `surface`.
///
/// # Errors
///
/// Returns the renderer's error if the figure cannot be shown.
pub fn compare_2d3d<R: Renderer>(
    curve: &impl Univariate,
    surface: &impl Bivariate,
    config: &CompareConfig,
    mut renderer: R,
) -> Result<(), R::Error> {
    let (figure, _) = compare_figure(curve, surface, config);
    renderer.render(figure)
}

/// Builds the comparison figure without rendering it.
pub fn compare_figure(
    curve: &impl Univariate,
    surface: &impl Bivariate,
    config: &CompareConfig,
) -> (Figure, CompareReport) {
    let w = config.sample_values();
    let line = TangentLine::at(curve, config.tangent_point());
    let plane = TangentPlane::at(surface, config.tangent_plane_point());

    log::debug!(
        "tangent line at {} has slope {}; tangent plane at {:?} has gradient {:?}",
        line.point,
        line.slope,
        plane.point,
        plane.gradient
    );

    let figure = Figure::grid(1, 2)
        .width_ratios(&[1.0, 2.0])
        .panel(curve_panel(curve, w, &line))
        .panel(surface_panel(surface, w, &plane, config.camera()));

    (figure, CompareReport { line, plane })
}

fn curve_panel(g: &impl Univariate, w: &Samples, line: &TangentLine) -> Axes2d {
    let values = sample::values(g, w.as_slice());

    let y_limits = finite_bounds(&values).map(|(lo, hi)| {
        let gap = (hi - lo) * 0.2;
        [(lo - gap).min(-4.0), (hi + gap).max(0.5)]
    });

    let mut axes = Axes2d::new()
        .labels("w", "g(w)")
        .hide_y_axis()
        .x_limits(Some([w.first(), w.last()]))
        .y_limits(y_limits);

    axes.push(Line::from_xy(
        w.as_slice(),
        &values,
        Stroke::new(Rgb::BLACK, 2.0),
    ));
    axes.push(Line::new(
        vec![[w.first(), 0.0], [w.last(), 0.0]],
        Stroke::new(Rgb::BLACK, 3.0),
    ));
    axes.push(Line::new(
        line.sample(TANGENT_REACH, TANGENT_SAMPLES),
        Stroke::new(Rgb::LIME, 3.0).alpha(0.5),
    ));
    axes.push(Points::new(
        vec![[line.point, line.value]],
        MarkerStyle::highlight(3.9),
    ));
    axes
}

fn surface_panel(g: &impl Bivariate, w: &Samples, plane: &TangentPlane, camera: Camera) -> Axes3d {
    let w = w.as_slice();
    let grid = Grid::sample(g, w, w);

    // The tangent plane covers the same grid, recentered on the point of tangency.
    let [p0, p1] = plane.point;
    let tangent = Grid::from_fn(w, w, |p| plane.eval([p[0] + p0, p[1] + p1])).translated(plane.point);

    let (z_lo, z_hi) = grid.finite_bounds().unwrap_or((0.0, 0.0));
    let (first, last) = (w[0], w[w.len() - 1]);
    let reach = last + (last - first) * 0.4;
    let limits = [
        [-reach, reach],
        [-reach, reach],
        [z_lo.min(-0.5), z_hi.max(0.5)],
    ];

    let mut axes = Axes3d::new(camera, limits).labels("w_1", "w_2");
    axes.push(Mark3::Surface(Surface {
        grid: grid.map(|_| 0.0),
        face: Rgb::WHITE,
        alpha: 0.1,
        edge: Stroke::new(Rgb::BLACK, 0.3),
        stride: SURFACE_STRIDE,
    }));
    axes.push(Mark3::Surface(Surface {
        grid,
        face: Rgb::WHITE,
        alpha: 0.5,
        edge: Stroke::new(Rgb::BLACK, 1.0),
        stride: SURFACE_STRIDE,
    }));
    axes.push(Mark3::Surface(Surface {
        grid: tangent,
        face: Rgb::LIME,
        alpha: 0.4,
        edge: Stroke::new(Rgb::BLACK, 1.0),
        stride: PLANE_STRIDE,
    }));
    axes.push(Mark3::Points {
        points: vec![[plane.point[0], plane.point[1], plane.value]],
        style: MarkerStyle::highlight(4.2),
    });
    axes
}
