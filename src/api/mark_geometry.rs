//! Value-axis geometry shared by the column and bar variants.

use crate::core::LinearScale;

/// Value interval of a side-by-side mark.
///
/// Marks grow from `max(domain_min, 0)` towards the value; the value end is
/// clamped to the domain minimum so nothing extends below the axis.
#[must_use]
pub(super) fn grouped_interval(value: f64, domain_min: f64) -> (f64, f64) {
    let base = domain_min.max(0.0);
    let end = value.max(domain_min);
    (base.min(end), base.max(end))
}

/// Value interval of one stacked segment, low end clamped to the domain minimum.
#[must_use]
pub(super) fn stacked_interval(y0: f64, y1: f64, domain_min: f64) -> (f64, f64) {
    let low = y0.min(y1).max(domain_min);
    let high = y0.max(y1);
    (low, high.max(low))
}

/// Pixel `(start, length)` covering `[low, high]` on `scale`.
///
/// Works for both increasing and inverted pixel ranges; the length is never
/// negative.
#[must_use]
pub(super) fn pixel_span(scale: LinearScale, (low, high): (f64, f64)) -> (f64, f64) {
    let from = scale.map(low);
    let to = scale.map(high);
    (from.min(to), (to - from).abs())
}

#[cfg(test)]
mod tests {
    use super::{grouped_interval, pixel_span, stacked_interval};
    use crate::core::LinearScale;

    #[test]
    fn grouped_marks_start_at_zero_or_domain_min() {
        assert_eq!(grouped_interval(12.0, 0.0), (0.0, 12.0));
        assert_eq!(grouped_interval(-8.0, -10.0), (-8.0, 0.0));
        assert_eq!(grouped_interval(-15.0, -10.0), (-10.0, 0.0));
        // positive domain minimum: bars start at the axis, not at zero
        assert_eq!(grouped_interval(30.0, 20.0), (20.0, 30.0));
        assert_eq!(grouped_interval(10.0, 20.0), (20.0, 20.0));
    }

    #[test]
    fn stacked_segments_clamp_low_end() {
        assert_eq!(stacked_interval(5.0, 15.0, 0.0), (5.0, 15.0));
        assert_eq!(stacked_interval(8.0, -4.0, -4.0), (-4.0, 8.0));
        assert_eq!(stacked_interval(0.0, 10.0, 20.0), (20.0, 20.0));
    }

    #[test]
    fn pixel_span_handles_inverted_ranges() {
        let vertical = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert_eq!(pixel_span(vertical, (0.0, 25.0)), (150.0, 50.0));
        let horizontal = LinearScale::new((0.0, 100.0), (0.0, 400.0));
        assert_eq!(pixel_span(horizontal, (25.0, 50.0)), (100.0, 100.0));
    }
}
