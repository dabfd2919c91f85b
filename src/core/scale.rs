//! Geometry mapping from data domains into pixel space.
//!
//! These are plain numeric functions. Callers pass validated input; a
//! collapsed domain (`min == max`) maps every value to the start of the range.

/// Linearly interpolates `value` from `[domain_min, domain_max]` onto
/// `[range_min, range_max]`.
///
/// Returns `range_min` when the domain is degenerate.
#[must_use]
pub fn map_linear(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> f64 {
    let span = domain_max - domain_min;
    if span == 0.0 {
        return range_min;
    }
    let normalized = (value - domain_min) / span;
    range_min + normalized * (range_max - range_min)
}

/// Maps a unix-millisecond timestamp onto `[0, plot_width]`.
#[must_use]
pub fn map_time_to_x(
    time_millis: i64,
    min_time_millis: i64,
    max_time_millis: i64,
    plot_width: f64,
) -> f64 {
    // Offsets keep precision for epoch-scale millisecond values.
    let offset = time_millis.saturating_sub(min_time_millis) as f64;
    let span = max_time_millis.saturating_sub(min_time_millis) as f64;
    map_linear(offset, 0.0, span, 0.0, plot_width)
}

/// Maps `value` in `[0, max_value]` onto `[plot_height, 0]`.
///
/// The pixel origin is top-left, so larger values land higher up.
#[must_use]
pub fn map_value_to_y(value: f64, max_value: f64, plot_height: f64) -> f64 {
    map_linear(value, 0.0, max_value, plot_height, 0.0)
}

/// Rounds `value` up to the next multiple of `step`.
///
/// A zero maximum still yields one full step so axes keep a visible range.
#[must_use]
pub fn compute_nice_ceiling(value: f64, step: f64) -> f64 {
    if value <= 0.0 {
        return step;
    }
    (value / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::{compute_nice_ceiling, map_linear, map_time_to_x, map_value_to_y};

    #[test]
    fn nice_ceiling_matches_reference_values() {
        assert_eq!(compute_nice_ceiling(0.0, 1000.0), 1000.0);
        assert_eq!(compute_nice_ceiling(3500.0, 1000.0), 4000.0);
        assert_eq!(compute_nice_ceiling(4000.0, 1000.0), 4000.0);
        assert_eq!(compute_nice_ceiling(1.0, 1000.0), 1000.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        for value in [-5.0, 0.0, 7.0, 1e12] {
            assert_eq!(map_linear(value, 7.0, 7.0, 70.0, 560.0), 70.0);
        }
        assert_eq!(map_time_to_x(1_000, 1_000, 1_000, 490.0), 0.0);
    }

    #[test]
    fn value_axis_is_inverted() {
        assert_eq!(map_value_to_y(0.0, 4000.0, 220.0), 220.0);
        assert_eq!(map_value_to_y(4000.0, 4000.0, 220.0), 0.0);
        assert_eq!(map_value_to_y(2000.0, 4000.0, 220.0), 110.0);
    }
}
