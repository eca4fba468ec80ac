//! Colors for weight paths and filled contours.

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// The highlight color for tangency and stationary points.
    pub const LIME: Self = Self::new(0.0, 1.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to bytes, clamped to `[0, 255]`.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 3] {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// Linear interpolation toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// One color per weight-history entry, green at the start to red.
///
/// The first `round(len / 2)` entries (ties to even) ramp from 0 to 1; the
/// rest are pinned at 1, so the second half of a run reads as one color.
/// Red is the ramp value, green is one minus it, and blue is zero.
///
/// A single-entry history rounds `0.5` down to an empty ramp, so its only
/// color is pinned red rather than starting green.
#[must_use]
pub fn path_colors(len: usize) -> Vec<Rgb> {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ramped = ((len as f64) / 2.0).round_ties_even() as usize;

    crate::sample::linspace(0.0, 1.0, ramped)
        .into_iter()
        .chain(std::iter::repeat_n(1.0, len - ramped))
        .map(|s| Rgb::new(s, 1.0 - s, 0.0))
        .collect()
}

/// Stops of a light-to-dark blue sequential colormap.
const BLUES: [Rgb; 9] = [
    Rgb::new(0.969, 0.984, 1.000),
    Rgb::new(0.871, 0.922, 0.969),
    Rgb::new(0.776, 0.859, 0.937),
    Rgb::new(0.620, 0.792, 0.882),
    Rgb::new(0.420, 0.682, 0.839),
    Rgb::new(0.259, 0.573, 0.776),
    Rgb::new(0.129, 0.443, 0.710),
    Rgb::new(0.031, 0.318, 0.612),
    Rgb::new(0.031, 0.188, 0.420),
];

/// Samples the blue colormap at `t ∈ [0, 1]` (clamped).
#[must_use]
pub fn blues(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    #[allow(clippy::cast_precision_loss)]
    let scaled = t * (BLUES.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = (scaled.floor() as usize).min(BLUES.len() - 2);
    #[allow(clippy::cast_precision_loss)]
    let frac = scaled - lower as f64;
    BLUES[lower].lerp(BLUES[lower + 1], frac)
}

/// Colors for `bands` filled contour bands, lightest first.
#[must_use]
pub fn band_colors(bands: usize) -> Vec<Rgb> {
    match bands {
        0 => Vec::new(),
        1 => vec![blues(0.0)],
        _ => crate::sample::linspace(0.0, 1.0, bands)
            .into_iter()
            .map(blues)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_color_per_entry() {
        for len in 0..12 {
            assert_eq!(path_colors(len).len(), len);
        }
    }

    #[test]
    fn starts_green_and_pins_second_half() {
        let colors = path_colors(10);

        assert_relative_eq!(colors[0].r, 0.0);
        assert_relative_eq!(colors[0].g, 1.0);
        assert_relative_eq!(colors[4].r, 1.0);

        let mid = colors.len() / 2;
        assert!(colors[mid..].iter().all(|&c| c == colors[mid]));
        assert!(colors.iter().all(|c| c.b == 0.0));
        assert!(colors.iter().all(|c| (c.r + c.g - 1.0).abs() < 1e-12));
    }

    #[test]
    fn midpoint_rounds_half_to_even() {
        // 5 / 2 = 2.5 rounds to 2, so three entries are pinned.
        let five = path_colors(5);
        assert_relative_eq!(five[1].r, 1.0);
        assert!(five[2..].iter().all(|&c| c == Rgb::new(1.0, 0.0, 0.0)));

        // 7 / 2 = 3.5 rounds to 4.
        let seven = path_colors(7);
        assert_relative_eq!(seven[1].r, 1.0 / 3.0);
        assert_relative_eq!(seven[3].r, 1.0);
    }

    #[test]
    fn single_entry_is_pinned() {
        assert_eq!(path_colors(1), [Rgb::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn blues_run_light_to_dark() {
        let light = blues(0.0);
        let dark = blues(1.0);
        assert!(light.r > dark.r && light.g > dark.g && light.b > dark.b);
        assert_eq!(blues(-1.0), light);
        assert_eq!(blues(2.0), dark);
        assert_eq!(blues(f64::NAN), light);
    }

    #[test]
    fn band_colors_cover_the_map() {
        let colors = band_colors(3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], blues(0.0));
        assert_eq!(colors[2], blues(1.0));
        assert!(band_colors(0).is_empty());
    }

    #[test]
    fn bytes_round_and_clamp() {
        assert_eq!(Rgb::new(1.0, 0.5, -0.2).to_bytes(), [255, 128, 0]);
    }
}
