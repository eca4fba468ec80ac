//! Interactive first-order optimization figures.
//!
//! Each mode builds one figure and opens it in a window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example lesson --features plot -- compare
//! cargo run --example lesson --features plot -- stationary
//! cargo run --example lesson --features plot -- descent
//! cargo run --example lesson --features plot -- descent 0.05
//! ```
//!
//! Set `RUST_LOG=debug` to see figure summaries.
//!
//! # Modes
//!
//! - **compare**: `g(w) = sin(w)` with its tangent line at `w = 1`, beside
//!   `g(w1, w2) = sin(w1) + cos(w2)` with its tangent plane at `(1, 1)`.
//!
//! - **stationary**: `w²`, `sin(3w)`, and `w³ - 2w` over their derivatives,
//!   with every stationary point marked.
//!
//! - **descent [alpha]**: Gradient descent on an elongated quadratic bowl.
//!   The path starts green and turns red as it converges. Larger step sizes
//!   (try `0.3`) zig-zag across the valley.

use std::error::Error;

use firstorder_core::{AutoDiff, Bivariate, Dual};
use firstorder_views::{
    CompareConfig, ContourConfig, EguiRenderer, StationaryConfig, Visualizer, compare_2d3d,
    show_stationary,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "compare".into());
    match mode.as_str() {
        "compare" => compare(),
        "stationary" => stationary(),
        "descent" => {
            let alpha = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size: expected a number, e.g. 0.1");
                    std::process::exit(1);
                })
                .unwrap_or(0.1);
            descent(alpha)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: lesson [compare|stationary|descent [alpha]]");
            std::process::exit(1);
        }
    }
}

// --- Compare -----------------------------------------------------------------

fn compare() -> Result<(), Box<dyn Error>> {
    let curve = AutoDiff::new(|w: Dual| w.sin());
    let surface = AutoDiff::new(|w: [Dual; 2]| w[0].sin() + w[1].cos());
    let config = CompareConfig::new().point(1.0)?.plane_point([1.0, 1.0])?;

    let renderer = EguiRenderer::new()
        .size(1400.0, 600.0)
        .app_name("Tangent line and tangent plane");
    compare_2d3d(&curve, &surface, &config, renderer)?;
    Ok(())
}

// --- Stationary --------------------------------------------------------------

fn stationary() -> Result<(), Box<dyn Error>> {
    let g1 = AutoDiff::new(|w: Dual| w * w);
    let g2 = AutoDiff::new(|w: Dual| (3.0 * w).sin());
    let g3 = AutoDiff::new(|w: Dual| w.powi(3) - 2.0 * w);

    let renderer = EguiRenderer::new()
        .size(1400.0, 800.0)
        .app_name("Stationary points");
    show_stationary(&g1, &g2, &g3, &StationaryConfig::new(), renderer)?;
    Ok(())
}

// --- Descent -----------------------------------------------------------------

/// Runs fixed-step gradient descent, returning every iterate.
fn gradient_descent(g: &impl Bivariate, start: [f64; 2], alpha: f64, steps: usize) -> Vec<[f64; 2]> {
    let mut w = start;
    let mut history = vec![w];
    for _ in 0..steps {
        let [d0, d1] = g.gradient(w);
        w = [w[0] - alpha * d0, w[1] - alpha * d1];
        history.push(w);
    }
    history
}

fn descent(alpha: f64) -> Result<(), Box<dyn Error>> {
    let bowl = AutoDiff::new(|w: [Dual; 2]| 0.5 * w[0] * w[0] + 4.0 * w[1] * w[1]);
    let history = gradient_descent(&bowl, [2.5, 1.5], alpha, 25);

    let mut visualizer = Visualizer::new(
        EguiRenderer::new()
            .size(1200.0, 600.0)
            .app_name(format!("Gradient descent (alpha = {alpha})")),
    );
    visualizer.render(&bowl, &history, &ContourConfig::new())?;
    Ok(())
}
