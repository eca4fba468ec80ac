//! Geometry of a weight path drawn over a contour plot.

use crate::{Rgb, colors::path_colors};

/// Consecutive iterates closer than this are not connected.
pub const MIN_SEGMENT_LENGTH: f64 = 0.1;

/// One iterate drawn as a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: [f64; 2],
    pub color: Rgb,
    /// Outline width, decaying with progress along the path.
    pub edge_width: f64,
}

/// A connector from one iterate to the next, colored by the later iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub color: Rgb,
}

/// The drawable pieces of a weight history.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLayout {
    pub markers: Vec<Marker>,
    pub steps: Vec<Step>,
}

impl PathLayout {
    /// Lays out `history`, connecting iterates only when `connect` is set.
    ///
    /// Markers are colored by [`path_colors`] with outline width
    /// [`marker_edge_width`]. A step joins iterates `j - 1` and `j` when their
    /// distance exceeds [`MIN_SEGMENT_LENGTH`].
    #[must_use]
    pub fn new(history: &[[f64; 2]], connect: bool) -> Self {
        let colors = path_colors(history.len());

        let markers = history
            .iter()
            .zip(&colors)
            .enumerate()
            .map(|(j, (&position, &color))| Marker {
                position,
                color,
                edge_width: marker_edge_width(j),
            })
            .collect();

        let steps = if connect {
            history
                .windows(2)
                .zip(&colors[1.min(colors.len())..])
                .filter(|(pair, _)| distance(pair[0], pair[1]) > MIN_SEGMENT_LENGTH)
                .map(|(pair, &color)| Step {
                    from: pair[0],
                    to: pair[1],
                    color,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self { markers, steps }
    }
}

/// Marker outline width for the iterate at `index`: `2 √(1 / (index + 1))`.
#[must_use]
pub fn marker_edge_width(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let position = index as f64 + 1.0;
    2.0 * position.recip().sqrt()
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}
