use approx::assert_relative_eq;
use firstorder_core::{TangentLine, sample::linspace, stationary};
use firstorder_views::{
    CompareConfig, ContourConfig, Figure, Recorder, Renderer, StationaryConfig, Visualizer,
    compare_2d3d, compare_figure, contour_figure, show_stationary, stationary_figure,
};
use integration_tests::{bowl, descend, parabola, valley};

/// A renderer whose window can never open.
struct Headless;

impl Renderer for Headless {
    type Error = std::fmt::Error;

    fn render(&mut self, _figure: Figure) -> Result<(), std::fmt::Error> {
        Err(std::fmt::Error)
    }
}

#[test]
fn compare_draws_the_textbook_tangents() {
    let config = CompareConfig::new()
        .point(1.0)
        .and_then(|c| c.plane_point([1.0, 1.0]))
        .unwrap();
    let (figure, report) = compare_figure(&parabola(), &bowl(), &config);

    // h(w) = 1 + 2(w - 1)
    assert_relative_eq!(report.line.value, 1.0);
    assert_relative_eq!(report.line.slope, 2.0);
    for w in [-2.0, 0.0, 1.0, 4.0] {
        assert_relative_eq!(report.line.eval(w), 1.0 + 2.0 * (w - 1.0));
    }

    // h(w) = 2 + 2(w1 - 1) + 2(w2 - 1)
    assert_relative_eq!(report.plane.value, 2.0);
    assert_eq!(report.plane.gradient, [2.0, 2.0]);
    for w in [[0.0, 0.0], [1.0, 1.0], [-3.0, 2.5]] {
        assert_relative_eq!(
            report.plane.eval(w),
            2.0 + 2.0 * (w[0] - 1.0) + 2.0 * (w[1] - 1.0)
        );
    }

    let surface = figure.at(0, 1).and_then(|p| p.as_space()).unwrap();
    let tangent = surface.surfaces().nth(2).unwrap();
    let (row, col) = (10, 40);
    let point = [tangent.grid.xs()[col], tangent.grid.ys()[row]];
    assert_relative_eq!(tangent.grid.at(row, col), report.plane.eval(point), epsilon = 1e-12);
}

#[test]
fn compare_renders_once_and_propagates_renderer_errors() {
    let mut recorder = Recorder::new();
    compare_2d3d(&parabola(), &bowl(), &CompareConfig::new(), &mut recorder).unwrap();
    assert_eq!(recorder.figures().len(), 1);

    let result = compare_2d3d(&parabola(), &bowl(), &CompareConfig::new(), Headless);
    assert_eq!(result, Err(std::fmt::Error));
}

#[test]
fn stationary_point_of_a_parabola_is_found_within_one_sample() {
    let config = StationaryConfig::new();
    let spacing = config.sample_values().span() / 4999.0;
    let (figure, report) = stationary_figure(&parabola(), &parabola(), &parabola(), &config);

    assert_eq!(figure.panels.len(), 6);
    for points in &report.points {
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.w.abs() <= spacing));
    }

    // The figure agrees with detecting directly on the same samples.
    let direct = stationary::detect(&parabola(), config.sample_values().as_slice());
    assert_eq!(report.points[0], direct);

    let mut recorder = Recorder::new();
    show_stationary(&parabola(), &parabola(), &parabola(), &config, &mut recorder).unwrap();
    assert_eq!(recorder.last(), Some(&figure));
}

#[test]
fn stationary_tangents_are_flat() {
    let config = StationaryConfig::new()
        .samples(linspace(-2.0, 2.0, 801))
        .unwrap();
    let (_, report) = stationary_figure(&parabola(), &parabola(), &parabola(), &config);

    for point in &report.points[0] {
        let flat = TangentLine::flat(point.w, point.value);
        assert_eq!(flat.eval(point.w + 0.5), point.value);
        assert!(point.derivative.abs() <= 2.0 * 4.0 / 800.0);
    }
}

#[test]
fn contour_levels_are_densest_near_the_sampled_maximum() {
    let history = descend(&bowl(), [2.5, -2.0], 0.1, 30);
    let (_, report) = contour_figure(
        &bowl(),
        &history,
        &ContourConfig::new(),
        &Default::default(),
    );
    let levels = &report.levels;
    let (min, max) = (levels[0], levels[levels.len() - 1]);

    // The 400-node grid straddles the optimum, so the sampled minimum is
    // small but not zero.
    assert!(min > 0.0 && min < 1e-3);
    assert_relative_eq!(max, 2.0 * 3.1 * 3.1, max_relative = 1e-12);

    assert!(levels.len() <= 20);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));

    let gaps: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(gaps.iter().all(|&gap| gap > 1e-9 * (max - min)));

    let (near_min, near_max) = (gaps[0], gaps[gaps.len() - 1]);
    assert!(near_max < near_min);
    assert!(near_min > 0.1, "lowest band collapsed: {near_min}");
}

#[test]
fn path_colors_ramp_then_hold() {
    let history = descend(&valley(), [2.5, 1.5], 0.1, 24);
    let (_, report) = contour_figure(
        &valley(),
        &history,
        &ContourConfig::new(),
        &Default::default(),
    );
    let colors = &report.colors;

    assert_eq!(colors.len(), 25);
    assert_relative_eq!(colors[0].r, 0.0);
    assert_relative_eq!(colors[0].g, 1.0);
    assert!(colors.iter().all(|c| c.b == 0.0));
    // round(25 / 2) = 12 ramped entries, then 13 pinned.
    assert!(colors[11..].iter().all(|&c| c == colors[24]));
    assert!(colors[10].r < 1.0);
}

#[test]
fn repeated_contour_renders_are_identical() {
    let history = descend(&valley(), [2.5, 1.5], 0.2, 15);
    let config = ContourConfig::new().view_by_weights(true);

    let mut visualizer = Visualizer::new(Recorder::new());
    for _ in 0..2 {
        visualizer.render(&valley(), &history, &config).unwrap();
    }

    let figures = visualizer.into_renderer().into_figures();
    assert_eq!(figures.len(), 2);
    assert_eq!(figures[0], figures[1]);

    let (figure, report) = contour_figure(&valley(), &history, &config, &Default::default());
    assert_eq!(figures[0], figure);
    assert!(report.window.x_max > 2.5);
}
