//! Contour plots of a two-input function with an optimizer's weight path.
//!
//! The function is sampled over a window and drawn as filled and line
//! contours, with a tight band of levels just under the sampled maximum and
//! progressively finer levels toward the minimum. The annotated panel adds
//! the weight history: one marker per iterate, colored green to red along
//! the run, optionally joined by two-layer segments.

mod config;

pub use config::ContourConfig;

use firstorder_core::{
    Bivariate, Grid, Rgb, Window, levels,
    path::PathLayout,
    sample::linspace,
};

use crate::{
    Figure, Renderer,
    figure::{Axes2d, Contour, Line, Mark, MarkerStyle, Points, Stroke},
};

/// Nodes per axis of the sampled field.
const RESOLUTION: usize = 400;

const MARKER_RADIUS: f64 = 4.5;

/// Styling passed explicitly to the path-drawing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Outline color of every iterate marker.
    pub edge_color: Rgb,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            edge_color: Rgb::BLACK,
        }
    }
}

/// What a contour figure was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourReport {
    /// The window the field was sampled over.
    pub window: Window,
    /// Contour levels, strictly increasing.
    pub levels: Vec<f64>,
    /// One color per iterate of the history.
    pub colors: Vec<Rgb>,
}

/// Draws contour plots through a [`Renderer`].
///
/// The visualizer holds nothing but its renderer, so repeated calls with the
/// same inputs produce identical figures.
#[derive(Debug)]
pub struct Visualizer<R> {
    renderer: R,
}

impl<R: Renderer> Visualizer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Renders the contours of `g` with `history` overlaid.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error if the figure cannot be shown.
    pub fn render(
        &mut self,
        g: &impl Bivariate,
        history: &[[f64; 2]],
        config: &ContourConfig,
    ) -> Result<(), R::Error> {
        let (figure, _) = contour_figure(g, history, config, &RenderContext::default());
        self.renderer.render(figure)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Builds the contour figure without rendering it.
pub fn contour_figure(
    g: &impl Bivariate,
    history: &[[f64; 2]],
    config: &ContourConfig,
    context: &RenderContext,
) -> (Figure, ContourReport) {
    if history.is_empty() {
        log::warn!("weight history is empty; drawing contours only");
    }

    let window = viewing_window(history, config);
    let grid = Grid::sample(
        g,
        &linspace(window.x_min, window.x_max, RESOLUTION),
        &linspace(window.y_min, window.y_max, RESOLUTION),
    );
    let levels = levels::for_grid(&grid, config.contour_count());

    let contours = contour_panel(grid, &levels, window);
    let layout = PathLayout::new(history, config.connects_iterates());
    let colors = layout.markers.iter().map(|marker| marker.color).collect();

    let mut annotated = contours.clone();
    draw_path(&mut annotated, &layout, context);

    let figure = if config.shows_original() {
        Figure::grid(1, 2).panel(contours).panel(annotated)
    } else {
        Figure::grid(1, 1).panel(annotated)
    };

    log::debug!(
        "contour figure: {} level(s), {} iterate(s), {} step(s)",
        levels.len(),
        history.len(),
        layout.steps.len()
    );
    (
        figure,
        ContourReport {
            window,
            levels,
            colors,
        },
    )
}

/// The configured window, or the one fitted to `history` when requested and
/// possible.
fn viewing_window(history: &[[f64; 2]], config: &ContourConfig) -> Window {
    if !config.fits_weights() {
        return config.configured_window();
    }
    match Window::around(history) {
        Some(window) if window.is_proper() => window,
        _ => {
            log::warn!(
                "cannot fit a window to {} iterate(s); using the configured window",
                history.len()
            );
            config.configured_window()
        }
    }
}

fn contour_panel(grid: Grid, levels: &[f64], window: Window) -> Axes2d {
    let axis = Stroke::new(Rgb::BLACK, 0.5);
    let mut axes = Axes2d::new()
        .labels("w_0", "w_1")
        .x_limits(Some([window.x_min, window.x_max]))
        .y_limits(Some([window.y_min, window.y_max]))
        .equal_aspect();

    axes.push(Contour {
        grid,
        fill_levels: levels.to_vec(),
        line_levels: levels.get(1..).unwrap_or_default().to_vec(),
        line_color: Rgb::BLACK,
    });
    axes.push(Mark::HLine { y: 0.0, style: axis });
    axes.push(Mark::VLine { x: 0.0, style: axis });
    axes
}

/// Overlays the weight path: steps first, then markers on top.
fn draw_path(axes: &mut Axes2d, layout: &PathLayout, context: &RenderContext) {
    for step in &layout.steps {
        axes.push(Line::new(vec![step.from, step.to], Stroke::new(Rgb::BLACK, 3.0)));
        axes.push(Line::new(vec![step.from, step.to], Stroke::new(step.color, 2.0)));
    }
    for marker in &layout.markers {
        axes.push(Points::new(
            vec![marker.position],
            MarkerStyle {
                fill: marker.color,
                edge: context.edge_color,
                edge_width: marker.edge_width,
                radius: MARKER_RADIUS,
            },
        ));
    }
}
