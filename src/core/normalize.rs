use serde::{Deserialize, Serialize};

use crate::core::types::{Category, Dataset, Point};

/// How a line series treats categories it has no observation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum GapPolicy {
    /// Substitute `y = 0`; the line dips to zero and the area stays continuous.
    #[default]
    ZeroFill,
    /// Keep the observation undefined; the line and area break at the gap.
    Break,
}

/// Aligns `dataset` onto `domain`: exactly one point per category, in
/// domain order.
///
/// With [`GapPolicy::ZeroFill`] no returned point is undefined.
#[must_use]
pub fn normalize(dataset: &Dataset, domain: &[Category], policy: GapPolicy) -> Vec<Point> {
    domain
        .iter()
        .map(|category| {
            let y = dataset.value_at(category);
            Point {
                x: category.clone(),
                y: match policy {
                    GapPolicy::ZeroFill => Some(y.unwrap_or(0.0)),
                    GapPolicy::Break => y,
                },
            }
        })
        .collect()
}

/// Splits a sequence into maximal runs of defined entries.
#[must_use]
pub fn defined_runs<T: Copy>(items: &[Option<T>]) -> Vec<Vec<T>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for item in items {
        match item {
            Some(value) => current.push(*value),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
