//! Figure rendering in a native egui window.
//!
//! See [`EguiRenderer`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints, PlotUi, Points, Polygon, VLine};
use firstorder_core::{
    Rgb,
    colors::band_colors,
    contour::{band_cells, isolines},
};

use crate::{
    Figure, Renderer,
    figure::{Axes2d, Axes3d, Contour, Mark, Mark3, MarkerStyle, Panel, Stroke},
};

/// Filled contour cells per axis.
const FILL_CELLS: usize = 100;

/// Shows each figure in a blocking egui window.
///
/// Construct with [`EguiRenderer::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// let renderer = EguiRenderer::new().size(1400.0, 600.0);
/// compare_2d3d(&curve, &surface, &CompareConfig::new(), renderer)?;
/// ```
#[derive(Debug, Clone)]
pub struct EguiRenderer {
    size: [f32; 2],
    app_name: String,
}

impl EguiRenderer {
    /// Creates a renderer with a 1200×600 window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: [1200.0, 600.0],
            app_name: "firstorder".into(),
        }
    }

    /// Sets the initial window size in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Sets the window title used when a figure has none.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }
}

impl Default for EguiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for EguiRenderer {
    type Error = eframe::Error;

    /// Opens a window displaying `figure`.
    ///
    /// Blocks until the window is closed by the user.
    fn render(&mut self, figure: Figure) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(self.size),
            ..Default::default()
        };
        let title = figure.title.clone().unwrap_or_else(|| self.app_name.clone());
        let app = FigureApp::new(figure);

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

/// A drawable primitive, computed once when the window opens.
enum Shape {
    Line {
        points: Vec<[f64; 2]>,
        color: Color32,
        width: f32,
        dashed: bool,
    },
    Fill {
        points: Vec<[f64; 2]>,
        color: Color32,
    },
    Markers {
        points: Vec<[f64; 2]>,
        style: MarkerStyle,
    },
    HLine {
        y: f64,
        color: Color32,
        width: f32,
    },
    VLine {
        x: f64,
        color: Color32,
        width: f32,
    },
}

/// One panel's shapes and plot settings.
struct PanelView {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    x_limits: Option<[f64; 2]>,
    y_limits: Option<[f64; 2]>,
    equal_aspect: bool,
    show_axes: [bool; 2],
    shapes: Vec<Shape>,
}

impl PanelView {
    fn plane(axes: Axes2d) -> Self {
        let mut shapes = Vec::new();
        for mark in axes.marks {
            match mark {
                Mark::Line(line) => shapes.push(line_shape(line.points, line.stroke)),
                Mark::Points(points) => shapes.push(Shape::Markers {
                    points: points.points,
                    style: points.style,
                }),
                Mark::HLine { y, style } => shapes.push(Shape::HLine {
                    y,
                    color: color(style.color, style.alpha),
                    width: width(style.width),
                }),
                Mark::VLine { x, style } => shapes.push(Shape::VLine {
                    x,
                    color: color(style.color, style.alpha),
                    width: width(style.width),
                }),
                Mark::Contour(contour) => contour_shapes(&contour, &mut shapes),
            }
        }

        Self {
            title: axes.title,
            x_label: axes.x_label,
            y_label: axes.y_label,
            x_limits: axes.x_limits,
            y_limits: axes.y_limits,
            equal_aspect: axes.equal_aspect,
            show_axes: [true, !axes.hide_y_axis],
            shapes,
        }
    }

    fn space(axes: Axes3d) -> Self {
        let Axes3d {
            title,
            x_label,
            y_label,
            camera,
            limits,
            marks,
        } = axes;

        let mut faces = Vec::new();
        let mut edges = Vec::new();
        let mut markers = Vec::new();
        for mark in &marks {
            match mark {
                Mark3::Surface(surface) => {
                    let fill = color(surface.face, surface.alpha);
                    faces.extend(
                        camera
                            .faces(surface, &limits)
                            .into_iter()
                            .map(|quad| (quad.depth, quad.corners, fill)),
                    );
                    edges.extend(
                        camera
                            .wireframe(surface, &limits)
                            .into_iter()
                            .map(|points| line_shape(points, surface.edge)),
                    );
                }
                Mark3::Points { points, style } => markers.push(Shape::Markers {
                    points: points.iter().map(|&p| camera.project(p, &limits)).collect(),
                    style: *style,
                }),
            }
        }

        // Faces from every surface share one back-to-front order.
        faces.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut shapes: Vec<Shape> = faces
            .into_iter()
            .map(|(_, corners, color)| Shape::Fill {
                points: corners.to_vec(),
                color,
            })
            .collect();
        shapes.extend(edges);
        shapes.extend(markers);

        let title = title.or_else(|| match (&x_label, &y_label) {
            (Some(x), Some(y)) => Some(format!("g({x}, {y})")),
            _ => None,
        });

        Self {
            title,
            x_label: None,
            y_label: None,
            x_limits: None,
            y_limits: None,
            equal_aspect: true,
            show_axes: [false, false],
            shapes,
        }
    }

    fn show(&self, ui: &mut egui::Ui, id: usize, size: [f32; 2]) {
        ui.vertical(|ui| {
            if let Some(title) = &self.title {
                ui.label(title.as_str());
            }

            let mut plot = Plot::new(("figure_panel", id))
                .width(size[0])
                .height(size[1])
                .show_axes(self.show_axes)
                .show_grid(false);
            if self.equal_aspect {
                plot = plot.data_aspect(1.0);
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
            }
            if let Some([lo, hi]) = self.x_limits {
                plot = plot.include_x(lo).include_x(hi);
            }
            if let Some([lo, hi]) = self.y_limits {
                plot = plot.include_y(lo).include_y(hi);
            }

            plot.show(ui, |plot_ui| {
                for shape in &self.shapes {
                    draw(plot_ui, shape);
                }
            });
        });
    }
}

/// The egui [`eframe::App`] that lays out a figure's panels.
struct FigureApp {
    title: Option<String>,
    rows: usize,
    width_ratios: Vec<f64>,
    panels: Vec<PanelView>,
}

impl FigureApp {
    fn new(figure: Figure) -> Self {
        let panels: Vec<PanelView> = figure
            .panels
            .into_iter()
            .map(|panel| match panel {
                Panel::Plane(axes) => PanelView::plane(axes),
                Panel::Space(axes) => PanelView::space(axes),
            })
            .collect();

        log::debug!("prepared {} panel(s) for display", panels.len());
        Self {
            title: figure.title,
            rows: figure.rows,
            width_ratios: figure.width_ratios,
            panels,
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = &self.title {
                ui.heading(title.as_str());
            }

            let spacing = ui.spacing().item_spacing;
            let cols = self.width_ratios.len().max(1);
            let available = ui.available_size();
            #[allow(clippy::cast_precision_loss)]
            let usable_width = available.x - spacing.x * (cols as f32);
            #[allow(clippy::cast_precision_loss)]
            let height = (available.y - spacing.y * (self.rows as f32)) / (self.rows.max(1) as f32);
            let total: f64 = self.width_ratios.iter().sum();

            for (row, panels) in self.panels.chunks(cols).enumerate() {
                ui.horizontal(|ui| {
                    for (col, panel) in panels.iter().enumerate() {
                        let ratio = self.width_ratios.get(col).copied().unwrap_or(1.0) / total;
                        #[allow(clippy::cast_possible_truncation)]
                        let width = usable_width * ratio as f32;
                        panel.show(ui, row * cols + col, [width, height.max(1.0)]);
                    }
                });
            }
        });
    }
}

fn draw(plot_ui: &mut PlotUi, shape: &Shape) {
    match shape {
        Shape::Line {
            points,
            color,
            width,
            dashed,
        } => {
            let mut line = Line::new(plot_points(points)).color(*color).width(*width);
            if *dashed {
                line = line.style(LineStyle::dashed_loose());
            }
            plot_ui.line(line);
        }
        Shape::Fill { points, color } => {
            plot_ui.polygon(
                Polygon::new(plot_points(points))
                    .fill_color(*color)
                    .stroke(egui::Stroke::NONE),
            );
        }
        Shape::Markers { points, style } => {
            // The outline is a larger disk under the fill.
            #[allow(clippy::cast_possible_truncation)]
            let (radius, edge) = (style.radius as f32, style.edge_width as f32);
            plot_ui.points(
                Points::new(plot_points(points))
                    .radius(radius + edge / 2.0)
                    .color(color(style.edge, 1.0))
                    .filled(true),
            );
            plot_ui.points(
                Points::new(plot_points(points))
                    .radius(radius - edge / 2.0)
                    .color(color(style.fill, 1.0))
                    .filled(true),
            );
        }
        Shape::HLine { y, color, width } => {
            plot_ui.hline(HLine::new(*y).color(*color).width(*width));
        }
        Shape::VLine { x, color, width } => {
            plot_ui.vline(VLine::new(*x).color(*color).width(*width));
        }
    }
}

/// Filled bands under black isolines.
fn contour_shapes(contour: &Contour, shapes: &mut Vec<Shape>) {
    let colors = band_colors(contour.fill_levels.len().saturating_sub(1));
    for cell in band_cells(&contour.grid, &contour.fill_levels, FILL_CELLS) {
        let [x0, x1] = cell.x;
        let [y0, y1] = cell.y;
        if let Some(&fill) = colors.get(cell.band) {
            shapes.push(Shape::Fill {
                points: vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]],
                color: color(fill, 1.0),
            });
        }
    }

    let stroke = Stroke::new(contour.line_color, 1.0);
    for &level in &contour.line_levels {
        for segment in isolines(&contour.grid, level) {
            shapes.push(line_shape(segment.to_vec(), stroke));
        }
    }
}

fn line_shape(points: Vec<[f64; 2]>, stroke: Stroke) -> Shape {
    Shape::Line {
        points,
        color: color(stroke.color, stroke.alpha),
        width: width(stroke.width),
        dashed: stroke.dashed,
    }
}

fn plot_points(points: &[[f64; 2]]) -> PlotPoints<'static> {
    points.iter().copied().collect()
}

fn color(rgb: Rgb, alpha: f64) -> Color32 {
    let [r, g, b] = rgb.to_bytes();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[allow(clippy::cast_possible_truncation)]
fn width(width: f64) -> f32 {
    width as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstorder_core::{Grid, sample::linspace};

    use crate::{
        Camera,
        figure::{Line as LineMark, Surface},
    };

    #[test]
    fn alpha_scales_to_a_byte() {
        assert_eq!(color(Rgb::LIME, 0.5).a(), 128);
        assert_eq!(color(Rgb::BLACK, 2.0).a(), 255);
    }

    #[test]
    fn contours_become_fills_then_lines() {
        let xs = linspace(-1.0, 1.0, 21);
        let grid = Grid::from_fn(&xs, &xs, |w| w[0] * w[0] + w[1] * w[1]);
        let contour = Contour {
            grid,
            fill_levels: vec![0.0, 0.5, 1.0, 2.0],
            line_levels: vec![0.5, 1.0],
            line_color: Rgb::BLACK,
        };

        let mut shapes = Vec::new();
        contour_shapes(&contour, &mut shapes);
        let first_line = shapes
            .iter()
            .position(|s| matches!(s, Shape::Line { .. }))
            .unwrap();
        assert!(first_line > 0);
        assert!(shapes[first_line..].iter().all(|s| matches!(s, Shape::Line { .. })));
    }

    #[test]
    fn space_panel_draws_faces_before_edges() {
        let xs = linspace(-1.0, 1.0, 5);
        let surface = Surface {
            grid: Grid::from_fn(&xs, &xs, |w| w[0] + w[1]),
            face: Rgb::WHITE,
            alpha: 0.5,
            edge: Stroke::new(Rgb::BLACK, 1.0),
            stride: 2,
        };
        let mut axes = Axes3d::new(Camera::new(20.0, -65.0), [[-1.0, 1.0], [-1.0, 1.0], [-2.0, 2.0]]);
        axes.push(Mark3::Surface(surface));

        let view = PanelView::space(axes);
        assert_eq!(view.show_axes, [false, false]);
        // Four faces from a 3×3 strided lattice, then six wireframe lines.
        assert_eq!(view.shapes.len(), 4 + 6);
        assert!(view.shapes[..4].iter().all(|s| matches!(s, Shape::Fill { .. })));
    }

    #[test]
    fn plane_panel_hides_y_axis_on_request() {
        let mut axes = Axes2d::new().hide_y_axis();
        axes.push(LineMark::new(vec![[0.0, 0.0], [1.0, 1.0]], Stroke::new(Rgb::BLACK, 2.0).dashed()));

        let view = PanelView::plane(axes);
        assert_eq!(view.show_axes, [true, false]);
        assert!(matches!(view.shapes[0], Shape::Line { dashed: true, .. }));
    }
}
