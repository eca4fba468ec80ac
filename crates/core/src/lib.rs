//! Numerical core for visualizing first-order optimization methods.
//!
//! Everything a lesson figure needs before anything is drawn:
//!
//! - [`Dual`], [`AutoDiff`], [`CentralDifference`]: derivative providers
//!   behind the [`Univariate`] and [`Bivariate`] function traits
//! - [`sample`]: dense 1D ranges and 2D meshgrids
//! - [`TangentLine`], [`TangentPlane`]: first-order approximations
//! - [`stationary`]: sign-change detection on a sampled derivative
//! - [`levels`]: contour levels concentrated toward the optimum
//! - [`colors`]: the start-to-end color ramp for weight paths
//! - [`contour`]: marching-squares isolines and filled band cells
//! - [`path`]: segment filtering and marker emphasis for weight paths
//! - [`Window`]: a rectangular viewing window
//!
//! Nothing in this crate renders; see `firstorder-views` for figures.

pub mod colors;
pub mod contour;
mod dual;
mod function;
pub mod levels;
pub mod path;
pub mod sample;
pub mod stationary;
mod tangent;
mod window;

pub use colors::Rgb;
pub use dual::Dual;
pub use function::{AutoDiff, Bivariate, CentralDifference, Univariate};
pub use sample::Grid;
pub use tangent::{TangentLine, TangentPlane};
pub use window::Window;
