use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::axis::AxisConfig;
use crate::core::stack::CategoryStack;
use crate::core::types::{Category, Dataset};

/// Input values an axis scale accepts for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    /// Ordered distinct categories.
    Categorical(Vec<Category>),
    /// Closed numeric interval; `min` may exceed `max` when bounds are fixed.
    Numeric { min: f64, max: f64 },
}

impl Domain {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Categorical(categories) => categories.is_empty(),
            Self::Numeric { .. } => false,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match self {
            Self::Categorical(categories) => categories,
            Self::Numeric { .. } => &[],
        }
    }

    #[must_use]
    pub fn numeric_bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Numeric { min, max } => Some((*min, *max)),
            Self::Categorical(_) => None,
        }
    }
}

/// Which part of the datasets an axis domain is inferred from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSource {
    /// Distinct x values in first-seen order.
    Categories,
    /// Distinct x values, last-seen first (horizontal bar convention).
    ReversedCategories,
    /// Extrema of defined y values.
    Values,
    /// Extrema of numeric x values.
    Positions,
}

/// Resolves an axis domain from the datasets relevant to that axis.
#[must_use]
pub fn resolve_domain<'a>(
    config: &AxisConfig,
    datasets: impl IntoIterator<Item = &'a Dataset>,
    source: DomainSource,
) -> Domain {
    match source {
        DomainSource::Categories => Domain::Categorical(collect_categories(datasets)),
        DomainSource::ReversedCategories => {
            let mut categories = collect_categories(datasets);
            categories.reverse();
            Domain::Categorical(categories)
        }
        DomainSource::Values => numeric_domain(
            config,
            datasets
                .into_iter()
                .flat_map(|dataset| dataset.defined_values()),
        ),
        DomainSource::Positions => numeric_domain(
            config,
            datasets
                .into_iter()
                .flat_map(|dataset| dataset.values.iter().filter_map(|point| point.x.as_number())),
        ),
    }
}

/// Value domain covering every cumulative interval of every stack.
#[must_use]
pub fn resolve_stacked_domain(config: &AxisConfig, stacks: &[CategoryStack]) -> Domain {
    numeric_domain(
        config,
        stacks.iter().flat_map(|stack| {
            let (low, high) = stack.extent();
            [low, high]
        }),
    )
}

/// Distinct x values across all datasets, in first-seen order.
#[must_use]
pub fn collect_categories<'a>(datasets: impl IntoIterator<Item = &'a Dataset>) -> Vec<Category> {
    let mut seen = IndexSet::new();
    for dataset in datasets {
        for point in &dataset.values {
            if !seen.contains(&point.x) {
                seen.insert(point.x.clone());
            }
        }
    }
    seen.into_iter().collect()
}

/// Applies the axis min/max policy to observed values.
///
/// Each bound is resolved independently; an auto bound with no finite
/// observations falls back to 0.
#[must_use]
pub fn numeric_domain(config: &AxisConfig, values: impl IntoIterator<Item = f64>) -> Domain {
    let extrema = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            Some((low, high)) => Some((low.min(value), high.max(value))),
            None => Some((value, value)),
        });
    let (low, high) = extrema.unwrap_or((0.0, 0.0));
    Domain::Numeric {
        min: config.min.resolve(low),
        max: config.max.resolve(high),
    }
}
