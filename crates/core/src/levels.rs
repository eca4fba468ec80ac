//! Contour levels for a sampled field.
//!
//! A few levels are packed into a narrow band just under the maximum, where
//! steep walls would otherwise crowd a single band. The rest of the budget
//! covers the whole range and then repeatedly subdivides the lowest band.
//!
//! # Algorithm
//!
//! With `min` and `max` the sampled extremes and `N` the requested count:
//!
//! 1. `cutoff = CUTOFF_FRACTION · (max - min)`, clamped into `[min, max]`;
//!    take `linspace(cutoff, max, min(N, LEVELS_PER_PASS))`, or just `max`
//!    when only one level is requested.
//! 2. While budget remains, take `linspace(min, c, min(budget, LEVELS_PER_PASS))`,
//!    where `c` is `cutoff` on the first pass and the current second-lowest
//!    level afterwards. Each pass spends `LEVELS_PER_PASS` from the budget.
//! 3. After every pass the set is sorted, and levels closer than
//!    `MIN_SEPARATION · (max - min)` to a higher level are dropped.
//!
//! For a field whose minimum is near zero, the top band spans `[max - min,
//! max]` and its levels sit closer together than any near the minimum.

use crate::{Grid, sample::linspace};

/// Fraction of the sampled range that places the top band's lower edge.
pub const CUTOFF_FRACTION: f64 = 1.0;

/// Levels spent per pass.
pub const LEVELS_PER_PASS: usize = 4;

/// Adjacent levels must differ by more than this fraction of the range.
pub const MIN_SEPARATION: f64 = 1e-9;

/// Selects at most `count` strictly increasing levels for a field spanning
/// `[min, max]`.
///
/// The highest level is always `max`. A constant field (`min == max`)
/// collapses to the single level `max`. Non-finite bounds propagate into the
/// result unchecked.
#[must_use]
pub fn select(min: f64, max: f64, count: usize) -> Vec<f64> {
    let cutoff = (CUTOFF_FRACTION * (max - min)).max(min).min(max);
    let tolerance = MIN_SEPARATION * (max - min);

    let mut levels = match count.min(LEVELS_PER_PASS) {
        1 => vec![max],
        n => linspace(cutoff, max, n),
    };
    normalize(&mut levels, tolerance);

    let mut remaining = count.saturating_sub(LEVELS_PER_PASS);
    let mut upper = cutoff;
    while remaining > 0 {
        levels.extend(linspace(min, upper, remaining.min(LEVELS_PER_PASS)));
        normalize(&mut levels, tolerance);
        remaining = remaining.saturating_sub(LEVELS_PER_PASS);

        match levels.get(1) {
            Some(&second) => upper = second,
            None => break,
        }
    }

    levels
}

/// Selects levels for a sampled grid from its finite extremes.
///
/// Returns an empty vector when the grid has no finite values.
#[must_use]
pub fn for_grid(grid: &Grid, count: usize) -> Vec<f64> {
    let Some((min, max)) = grid.finite_bounds() else {
        log::warn!("contour field has no finite samples; no levels selected");
        return Vec::new();
    };
    if min == max {
        log::warn!("contour field is constant at {max}; using a single level");
    }

    let levels = select(min, max, count);
    log::debug!("selected {} of {count} requested contour levels", levels.len());
    levels
}

/// Returns the index of the band `[levels[k], levels[k + 1])` containing
/// `value`, clamped to the outer bands.
///
/// Returns `None` for non-finite values or fewer than two levels.
#[must_use]
pub fn band_of(levels: &[f64], value: f64) -> Option<usize> {
    if levels.len() < 2 || !value.is_finite() {
        return None;
    }
    let above = levels.partition_point(|&level| level <= value);
    Some(above.saturating_sub(1).min(levels.len() - 2))
}

/// Sorts ascending and drops any level within `tolerance` of the next higher
/// kept level, so the maximum always survives.
fn normalize(levels: &mut Vec<f64>, tolerance: f64) {
    levels.sort_by(|a, b| b.total_cmp(a));
    levels.dedup_by(|lower, kept| *kept - *lower <= tolerance);
    levels.reverse();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn is_strictly_increasing(levels: &[f64]) -> bool {
        levels.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn default_count_on_unit_bowl() {
        let levels = select(0.0, 18.0, 20);

        assert!(is_strictly_increasing(&levels));
        assert!(levels.len() <= 20);
        assert_eq!(levels.first(), Some(&0.0));
        assert_eq!(levels.last(), Some(&18.0));

        // First pass spans the whole range in thirds.
        assert!(levels.contains(&6.0));
        assert!(levels.contains(&12.0));
        assert_relative_eq!(levels[1], 18.0 / 3.0_f64.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn zero_minimum_collapses_the_top_band() {
        // The top band [max - 0, max] holds only the maximum, so the
        // subdivided bottom bands are the densest.
        let levels = select(0.0, 10.0, 20);
        assert_eq!(levels.len(), 10);
        assert_relative_eq!(levels[levels.len() - 2], 20.0 / 3.0);
        let gaps: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps[0] < gaps[gaps.len() - 1]);
    }

    #[test]
    fn nonzero_minimum_packs_levels_under_the_maximum() {
        let (min, max) = (1.2e-4, 19.22);
        let levels = select(min, max, 20);

        assert!(is_strictly_increasing(&levels));
        assert_eq!(levels.len(), 13);
        assert_eq!(levels.first(), Some(&min));
        assert_eq!(levels.last(), Some(&max));

        let gaps: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|&gap| gap > 1e-9 * (max - min)));

        // Top band: [max - min, max] in thirds.
        assert_relative_eq!(gaps[gaps.len() - 1], min / 3.0, max_relative = 1e-6);
        // Bottom band: the range subdivided by thirds four times.
        assert_relative_eq!(gaps[0], (max - 2.0 * min) / 81.0, max_relative = 1e-6);
        assert!(gaps[gaps.len() - 1] < gaps[0]);
    }

    #[test]
    fn minimum_above_the_range_starts_from_the_minimum() {
        // cutoff = 2 clamps up to 10, so the first pass spans the whole range.
        let levels = select(10.0, 12.0, 20);
        assert!(is_strictly_increasing(&levels));
        assert_eq!(levels.first(), Some(&10.0));
        assert_eq!(levels.last(), Some(&12.0));
        assert!(levels.windows(2).all(|w| w[1] - w[0] > 1e-9 * 2.0));
        assert_relative_eq!(levels[levels.len() - 2], 12.0 - 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_minimum_keeps_the_maximum_on_top() {
        // cutoff = 10 clamps down to the maximum.
        let levels = select(-5.0, 5.0, 20);
        assert!(is_strictly_increasing(&levels));
        assert_eq!(levels.first(), Some(&-5.0));
        assert_eq!(levels.last(), Some(&5.0));
        assert!(levels.windows(2).all(|w| w[1] - w[0] > 1e-8));
    }

    #[test]
    fn unresolvable_levels_merge_into_the_higher_one() {
        let (min, max) = (1e-14, 1.0);
        let levels = select(min, max, 20);
        assert_eq!(levels.last(), Some(&max));
        assert!(levels.windows(2).all(|w| w[1] - w[0] > MIN_SEPARATION * (max - min)));
    }

    #[test]
    fn every_count_respects_the_budget() {
        for count in 1..=40 {
            let levels = select(-2.5, 7.0, count);
            assert!(!levels.is_empty());
            assert!(levels.len() <= count, "count {count} gave {}", levels.len());
            assert!(is_strictly_increasing(&levels));
            assert_eq!(levels.last(), Some(&7.0));
        }
    }

    #[test]
    fn single_level_is_the_maximum() {
        assert_eq!(select(1.0, 3.0, 1), [3.0]);
        assert!(select(1.0, 3.0, 0).is_empty());
    }

    #[test]
    fn constant_field_collapses() {
        assert_eq!(select(4.0, 4.0, 20), [4.0]);
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(select(0.3, 9.1, 17), select(0.3, 9.1, 17));
    }

    #[test]
    fn grid_levels_use_finite_extremes() {
        let grid = Grid::from_fn(&[0.0, 1.0, 2.0], &[0.0, 1.0], |w| {
            if w == [2.0, 1.0] { f64::NAN } else { w[0] + w[1] }
        });
        let levels = for_grid(&grid, 8);
        assert_eq!(levels.first(), Some(&0.0));
        assert_eq!(levels.last(), Some(&2.0));

        let empty = Grid::from_fn(&[0.0], &[0.0], |_| f64::NAN);
        assert!(for_grid(&empty, 4).is_empty());
    }

    #[test]
    fn band_lookup_clamps_to_outer_bands() {
        let levels = [0.0, 1.0, 2.0, 4.0];
        assert_eq!(band_of(&levels, -1.0), Some(0));
        assert_eq!(band_of(&levels, 0.0), Some(0));
        assert_eq!(band_of(&levels, 1.5), Some(1));
        assert_eq!(band_of(&levels, 3.0), Some(2));
        assert_eq!(band_of(&levels, 4.0), Some(2));
        assert_eq!(band_of(&levels, 9.0), Some(2));
        assert_eq!(band_of(&levels, f64::NAN), None);
        assert_eq!(band_of(&[1.0], 1.0), None);
    }
}
