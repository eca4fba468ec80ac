//! An inert description of a figure: a grid of panels holding marks.
//!
//! Views build a [`Figure`]; a [`Renderer`](crate::Renderer) draws it. Marks
//! are drawn in the order they were added, so later marks sit on top.

use firstorder_core::{Grid, Rgb};

use crate::Camera;

/// A grid of panels, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub rows: usize,
    pub cols: usize,
    /// Relative column widths, one per column.
    pub width_ratios: Vec<f64>,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// An empty `rows × cols` figure with equal column widths.
    #[must_use]
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self {
            title: None,
            rows,
            cols,
            width_ratios: vec![1.0; cols],
            panels: Vec::with_capacity(rows * cols),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets relative column widths; ignored unless there is one per column.
    #[must_use]
    pub fn width_ratios(mut self, ratios: &[f64]) -> Self {
        if ratios.len() == self.cols {
            self.width_ratios = ratios.to_vec();
        }
        self
    }

    #[must_use]
    pub fn panel(mut self, panel: impl Into<Panel>) -> Self {
        self.panels.push(panel.into());
        self
    }

    /// The panel at `(row, col)`, if present.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&Panel> {
        self.panels.get(row * self.cols + col)
    }
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Plane(Axes2d),
    Space(Axes3d),
}

impl Panel {
    /// The 2D axes, if this is a planar panel.
    #[must_use]
    pub fn as_plane(&self) -> Option<&Axes2d> {
        match self {
            Self::Plane(axes) => Some(axes),
            Self::Space(_) => None,
        }
    }

    /// The 3D axes, if this is a spatial panel.
    #[must_use]
    pub fn as_space(&self) -> Option<&Axes3d> {
        match self {
            Self::Space(axes) => Some(axes),
            Self::Plane(_) => None,
        }
    }
}

impl From<Axes2d> for Panel {
    fn from(axes: Axes2d) -> Self {
        Self::Plane(axes)
    }
}

impl From<Axes3d> for Panel {
    fn from(axes: Axes3d) -> Self {
        Self::Space(axes)
    }
}

/// Planar axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes2d {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: Option<[f64; 2]>,
    pub y_limits: Option<[f64; 2]>,
    pub equal_aspect: bool,
    pub hide_y_axis: bool,
    pub marks: Vec<Mark>,
}

impl Axes2d {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    #[must_use]
    pub fn x_limits(mut self, limits: Option<[f64; 2]>) -> Self {
        self.x_limits = limits;
        self
    }

    #[must_use]
    pub fn y_limits(mut self, limits: Option<[f64; 2]>) -> Self {
        self.y_limits = limits;
        self
    }

    #[must_use]
    pub fn equal_aspect(mut self) -> Self {
        self.equal_aspect = true;
        self
    }

    #[must_use]
    pub fn hide_y_axis(mut self) -> Self {
        self.hide_y_axis = true;
        self
    }

    pub fn push(&mut self, mark: impl Into<Mark>) {
        self.marks.push(mark.into());
    }

    /// Iterates over the line marks.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Iterates over the point marks.
    pub fn points(&self) -> impl Iterator<Item = &Points> {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Points(points) => Some(points),
            _ => None,
        })
    }

    /// The first contour mark, if any.
    #[must_use]
    pub fn contour(&self) -> Option<&Contour> {
        self.marks.iter().find_map(|mark| match mark {
            Mark::Contour(contour) => Some(contour),
            _ => None,
        })
    }
}

/// Something drawn on planar axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Line(Line),
    Points(Points),
    /// A horizontal reference line across the whole panel.
    HLine { y: f64, style: Stroke },
    /// A vertical reference line across the whole panel.
    VLine { x: f64, style: Stroke },
    Contour(Contour),
}

impl From<Line> for Mark {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Points> for Mark {
    fn from(points: Points) -> Self {
        Self::Points(points)
    }
}

impl From<Contour> for Mark {
    fn from(contour: Contour) -> Self {
        Self::Contour(contour)
    }
}

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
    pub dashed: bool,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Rgb, width: f64) -> Self {
        Self {
            color,
            alpha: 1.0,
            width,
            dashed: false,
        }
    }

    #[must_use]
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub const fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// A polyline through `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub points: Vec<[f64; 2]>,
    pub stroke: Stroke,
}

impl Line {
    #[must_use]
    pub fn new(points: Vec<[f64; 2]>, stroke: Stroke) -> Self {
        Self { points, stroke }
    }

    /// The polyline through `(xs[i], ys[i])`.
    #[must_use]
    pub fn from_xy(xs: &[f64], ys: &[f64], stroke: Stroke) -> Self {
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(), stroke)
    }
}

/// Filled circular markers with an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill: Rgb,
    pub edge: Rgb,
    pub edge_width: f64,
    /// Marker radius in screen points.
    pub radius: f64,
}

impl MarkerStyle {
    /// The lime, black-edged marker used for tangency points.
    #[must_use]
    pub const fn highlight(radius: f64) -> Self {
        Self {
            fill: Rgb::LIME,
            edge: Rgb::BLACK,
            edge_width: 2.0,
            radius,
        }
    }
}

/// Markers at `points`, all in one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    pub points: Vec<[f64; 2]>,
    pub style: MarkerStyle,
}

impl Points {
    #[must_use]
    pub fn new(points: Vec<[f64; 2]>, style: MarkerStyle) -> Self {
        Self { points, style }
    }
}

/// Filled and line contours of a sampled field.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub grid: Grid,
    /// Band edges for the filled contours.
    pub fill_levels: Vec<f64>,
    /// Levels at which isolines are drawn.
    pub line_levels: Vec<f64>,
    pub line_color: Rgb,
}

/// Three-dimensional axes viewed through a [`Camera`].
#[derive(Debug, Clone, PartialEq)]
pub struct Axes3d {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub camera: Camera,
    /// `[x, y, z]` limits; the projection normalizes each axis to them.
    pub limits: [[f64; 2]; 3],
    pub marks: Vec<Mark3>,
}

impl Axes3d {
    #[must_use]
    pub fn new(camera: Camera, limits: [[f64; 2]; 3]) -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            camera,
            limits,
            marks: Vec::new(),
        }
    }

    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn push(&mut self, mark: Mark3) {
        self.marks.push(mark);
    }

    /// Iterates over the surface marks.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.marks.iter().filter_map(|mark| match mark {
            Mark3::Surface(surface) => Some(surface),
            Mark3::Points { .. } => None,
        })
    }
}

/// Something drawn in 3D axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark3 {
    Surface(Surface),
    Points { points: Vec<[f64; 3]>, style: MarkerStyle },
}

/// A sampled surface drawn as translucent faces with wireframe edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub grid: Grid,
    pub face: Rgb,
    pub alpha: f64,
    pub edge: Stroke,
    /// Grid nodes between wireframe lines.
    pub stride: usize,
}
