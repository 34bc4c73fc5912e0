use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{Category, Dataset};

/// Cumulative span one series occupies inside a category stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedInterval {
    pub series_key: String,
    pub category_key: Category,
    pub value: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: String,
    pub order: f64,
}

/// All intervals of one category, in stacking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStack {
    pub category: Category,
    pub intervals: SmallVec<[StackedInterval; 4]>,
}

impl CategoryStack {
    /// Lowest and highest cumulative value reached by the stack.
    ///
    /// For stacks of non-negative values this is `[y0[0], y1[last]]`.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        self.intervals
            .iter()
            .flat_map(|interval| [interval.y0, interval.y1])
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                Some((low, high)) => Some((low.min(value), high.max(value))),
                None => Some((value, value)),
            })
            .unwrap_or((0.0, 0.0))
    }

    /// Net stack height: `y1[last] - y0[0]`.
    #[must_use]
    pub fn total(&self) -> f64 {
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => last.y1 - first.y0,
            _ => 0.0,
        }
    }
}

/// Stacks every dataset at `category`.
///
/// Datasets without a defined value there contribute a zero-height interval.
/// Intervals are ordered by `order` ascending; ties keep dataset input order.
#[must_use]
pub fn stack(category: &Category, datasets: &[Dataset]) -> CategoryStack {
    let mut intervals: SmallVec<[StackedInterval; 4]> = datasets
        .iter()
        .map(|dataset| StackedInterval {
            series_key: dataset.name.clone(),
            category_key: category.clone(),
            value: dataset.value_at(category).unwrap_or(0.0),
            y0: 0.0,
            y1: 0.0,
            color: dataset.color.clone(),
            order: dataset.order,
        })
        .collect();

    // `sort_by` is stable, which keeps equal orders in input order.
    intervals.sort_by(|left, right| left.order.total_cmp(&right.order));

    let mut cumulative = 0.0;
    for interval in &mut intervals {
        interval.y0 = cumulative;
        interval.y1 = cumulative + interval.value;
        cumulative = interval.y1;
    }

    CategoryStack {
        category: category.clone(),
        intervals,
    }
}

/// Stacks every category of `categories`, in domain order.
#[must_use]
pub fn stack_categories(categories: &[Category], datasets: &[Dataset]) -> Vec<CategoryStack> {
    categories
        .iter()
        .map(|category| stack(category, datasets))
        .collect()
}
