//! Figures for first-order optimization lessons.
//!
//! Three entry points build a [`Figure`] from the numerical core in
//! `firstorder-core` and hand it to a [`Renderer`]:
//!
//! - [`compare_2d3d`]: a 1D function and its tangent line beside a 2D
//!   function and its tangent plane
//! - [`show_stationary`]: three functions over their derivatives, with
//!   stationary points marked
//! - [`Visualizer::render`]: a contour plot with an optimizer's weight path
//!
//! Each has a `*_figure` counterpart that returns the figure and the numbers
//! behind it without rendering.
//!
//! # Features
//!
//! - `plot`: Enables [`EguiRenderer`], which shows figures in a blocking egui
//!   window. This feature adds dependencies on `eframe` and `egui_plot`.

mod compare;
mod error;
pub mod figure;
pub mod projection;
mod render;
mod samples;
mod stationary;
mod visualizer;

#[cfg(feature = "plot")]
mod plot;

pub use compare::{CompareConfig, CompareReport, compare_2d3d, compare_figure};
pub use error::ConfigError;
pub use figure::Figure;
pub use projection::Camera;
pub use render::{Recorder, Renderer};
pub use samples::Samples;
pub use stationary::{StationaryConfig, StationaryReport, show_stationary, stationary_figure};
pub use visualizer::{ContourConfig, ContourReport, RenderContext, Visualizer, contour_figure};

#[cfg(feature = "plot")]
pub use plot::EguiRenderer;
