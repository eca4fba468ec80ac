//! Three functions over their derivatives, with stationary points marked.
//!
//! Each column shows `g(w)` on top and `g'(w)` below. Every detected
//! stationary point is marked on both panels and gets a flat tangent line on
//! the function panel.

mod config;

pub use config::StationaryConfig;

use firstorder_core::{
    Rgb, TangentLine, Univariate,
    sample::{self, finite_bounds},
    stationary::{self, StationaryPoint},
};

use crate::{
    Figure, Renderer, Samples,
    figure::{Axes2d, Line, MarkerStyle, Points, Stroke},
};

/// Half-width of the flat tangent drawn at each stationary point.
const TANGENT_REACH: f64 = 1.0;
const TANGENT_SAMPLES: usize = 100;
const MARKER_RADIUS: f64 = 3.2;

/// The stationary points found for each function, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryReport {
    pub points: [Vec<StationaryPoint>; 3],
}

/// Renders the 2×3 stationary-point figure for three functions.
///
/// # Errors
///
/// Returns the renderer's error if the figure cannot be shown.
pub fn show_stationary<R: Renderer>(
    g1: &impl Univariate,
    g2: &impl Univariate,
    g3: &impl Univariate,
    config: &StationaryConfig,
    mut renderer: R,
) -> Result<(), R::Error> {
    let (figure, _) = stationary_figure(g1, g2, g3, config);
    renderer.render(figure)
}

/// Builds the stationary-point figure without rendering it.
pub fn stationary_figure(
    g1: &impl Univariate,
    g2: &impl Univariate,
    g3: &impl Univariate,
    config: &StationaryConfig,
) -> (Figure, StationaryReport) {
    let functions: [&dyn Univariate; 3] = [g1, g2, g3];
    let w = config.sample_values();

    let columns = functions.map(|g| column(&g, w));
    let mut figure = Figure::grid(2, 3);
    for (top, _, _) in &columns {
        figure = figure.panel(top.clone());
    }
    for (_, bottom, _) in &columns {
        figure = figure.panel(bottom.clone());
    }

    let points = columns.map(|(_, _, points)| points);
    log::debug!(
        "stationary figure: {:?} point(s) per function",
        points.each_ref().map(Vec::len)
    );
    (figure, StationaryReport { points })
}

/// Builds the function panel, the derivative panel, and the detected points.
fn column(g: &impl Univariate, w: &Samples) -> (Axes2d, Axes2d, Vec<StationaryPoint>) {
    let ws = w.as_slice();
    let values = sample::values(g, ws);
    let slopes = sample::derivatives(g, ws);
    let points = stationary::locate(g, ws, &slopes);

    let w_gap = w.span() * 0.1;
    let x_limits = Some([w.first() - w_gap, w.last() + w_gap]);
    let padded = |data: &[f64]| {
        finite_bounds(data).map(|(lo, hi)| {
            let gap = (hi - lo) * 0.1;
            [lo - gap, hi + gap]
        })
    };

    let mut top = Axes2d::new()
        .title("g(w)")
        .x_limits(x_limits)
        .y_limits(padded(&values));
    top.push(Line::from_xy(ws, &values, Stroke::new(Rgb::BLACK, 2.0)));

    let mut bottom = Axes2d::new()
        .title("d/dw g(w)")
        .x_limits(x_limits)
        .y_limits(padded(&slopes));
    bottom.push(Line::from_xy(ws, &slopes, Stroke::new(Rgb::BLACK, 2.0)));
    bottom.push(Line::new(
        vec![[w.first(), 0.0], [w.last(), 0.0]],
        Stroke::new(Rgb::BLACK, 1.0).dashed(),
    ));

    for point in &points {
        let flat = TangentLine::flat(point.w, point.value);
        top.push(Line::new(
            flat.sample(TANGENT_REACH, TANGENT_SAMPLES),
            Stroke::new(Rgb::LIME, 1.5).alpha(0.5),
        ));
    }
    let marker = MarkerStyle::highlight(MARKER_RADIUS);
    if !points.is_empty() {
        top.push(Points::new(points.iter().map(|p| [p.w, p.value]).collect(), marker));
        bottom.push(Points::new(points.iter().map(|p| [p.w, p.derivative]).collect(), marker));
    }

    (top, bottom, points)
}
