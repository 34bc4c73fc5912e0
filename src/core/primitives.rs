use crate::error::{ChartError, ChartResult};

/// Rounds a pixel coordinate the way rounded ranges do (half-up).
#[must_use]
pub fn round_px(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats a numeric value as a tick label or category name.
///
/// Integral values print without a fractional part; other values use the
/// shortest representation that round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}
