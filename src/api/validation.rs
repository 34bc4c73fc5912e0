use indexmap::IndexSet;

use crate::core::primitives::ensure_finite;
use crate::core::{AxisBound, AxisConfig, Dataset, Margins};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Checks a merged configuration before any geometry is built from it.
///
/// Data-shape problems such as empty datasets or missing observations are
/// not errors; only values that would make geometry undefined are rejected.
pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    validate_margins(config.margins)?;
    validate_axis_config("axisBottom", &config.axis_bottom)?;
    validate_axis_config("axisLeft", &config.axis_left)?;
    validate_axis_config("axisRight", &config.axis_right)?;
    validate_datasets(&config.datasets)
}

fn validate_margins(margins: Margins) -> ChartResult<()> {
    for (name, value) in [
        ("marginTop", margins.top),
        ("marginRight", margins.right),
        ("marginBottom", margins.bottom),
        ("marginLeft", margins.left),
    ] {
        ensure_finite(value, &format!("body {name}"))?;
    }
    Ok(())
}

fn validate_axis_config(axis: &str, config: &AxisConfig) -> ChartResult<()> {
    for (name, value) in [
        ("padding", config.padding),
        ("innerPadding", config.inner_padding),
    ] {
        if !(0.0..1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{axis} {name} must be in [0, 1)"
            )));
        }
    }

    for (name, bound) in [("min", config.min), ("max", config.max)] {
        if let AxisBound::Fixed(value) = bound {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "{axis} {name} must be finite or \"auto\""
                )));
            }
        }
    }

    let width = config.gridlines.width;
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis} gridline width must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_datasets(datasets: &[Dataset]) -> ChartResult<()> {
    let mut names = IndexSet::with_capacity(datasets.len());
    for dataset in datasets {
        if !names.insert(dataset.name.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate dataset name `{}`",
                dataset.name
            )));
        }
        validate_dataset(dataset)?;
    }
    Ok(())
}

fn validate_dataset(dataset: &Dataset) -> ChartResult<()> {
    let name = &dataset.name;
    ensure_finite(dataset.order, &format!("dataset `{name}` order"))?;
    if !(0.0..=1.0).contains(&dataset.opacity) {
        return Err(ChartError::InvalidData(format!(
            "dataset `{name}` opacity must be in [0, 1]"
        )));
    }
    for (field, value) in [
        ("lineWidth", dataset.line_width),
        ("circleRadius", dataset.circle_radius),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "dataset `{name}` {field} must be finite and >= 0"
            )));
        }
    }

    for point in &dataset.values {
        if point.x.as_number().is_some_and(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{name}` has a non-finite x value"
            )));
        }
        if point.y.is_some_and(|y| !y.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{name}` has a non-finite y value at `{}`",
                point.x
            )));
        }
    }
    Ok(())
}
