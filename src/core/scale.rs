use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::round_px;
use crate::core::types::Category;

/// Target tick count for linear axes.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Tick values produced by [`nice_ticks`]; short enough to stay inline.
pub type TickValues = SmallVec<[f64; 16]>;

/// Continuous mapping from a numeric domain onto a rounded pixel range.
///
/// A degenerate domain (`start == end`) maps every input to the start of
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_end - self.domain_start;
        span == 0.0 || !span.is_finite()
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        round_px(self.range_start + normalized * (self.range_end - self.range_start))
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

/// Discrete mapping of an ordered key set onto equal bands of a rounded range.
///
/// `padding_inner` is the fraction of a step left empty between bands and
/// `padding_outer` the fraction of a step before the first and after the last
/// band. A reversed range (`start > end`) lays bands out from the end.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K: Hash + Eq = Category> {
    domain: IndexSet<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: Hash + Eq> BandScale<K> {
    /// Band scale with the same inner and outer padding.
    #[must_use]
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64), padding: f64) -> Self {
        Self::with_paddings(domain, range, padding, padding)
    }

    /// Point scale: zero-width bands evenly spaced over the range.
    #[must_use]
    pub fn points(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        Self::with_paddings(domain, range, 1.0, 0.0)
    }

    #[must_use]
    pub fn with_paddings(
        domain: impl IntoIterator<Item = K>,
        range: (f64, f64),
        padding_inner: f64,
        padding_outer: f64,
    ) -> Self {
        let mut scale = Self {
            domain: domain.into_iter().collect(),
            range,
            padding_inner,
            padding_outer,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        scale
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (low, high) = if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        };
        if self.domain.is_empty() {
            self.start = low;
            self.step = 0.0;
            self.bandwidth = 0.0;
            return;
        }

        let divisor = (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let step = ((high - low) / divisor).floor();
        let start = low + (high - low - step * (n - self.padding_inner)) * 0.5;
        self.step = step;
        self.start = round_px(start);
        self.bandwidth = round_px(step * (1.0 - self.padding_inner));
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<K> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band assigned to `key`, or `None` for unknown keys.
    #[must_use]
    pub fn position<Q>(&self, key: &Q) -> Option<f64>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.domain.get_index_of(key)?;
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(self.start + self.step * slot as f64)
    }
}

/// Axis scale resolved for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Band(BandScale),
    Point(BandScale),
}

impl Scale {
    /// Pixel position of a category.
    ///
    /// Linear scales accept numeric categories only.
    #[must_use]
    pub fn position(&self, category: &Category) -> Option<f64> {
        match self {
            Self::Linear(scale) => category.as_number().map(|value| scale.map(value)),
            Self::Band(scale) | Self::Point(scale) => scale.position(category),
        }
    }

    /// Band width for discrete scales; `None` for linear ones.
    #[must_use]
    pub fn bandwidth(&self) -> Option<f64> {
        match self {
            Self::Linear(_) => None,
            Self::Band(scale) | Self::Point(scale) => Some(scale.bandwidth()),
        }
    }

    #[must_use]
    pub fn as_linear(&self) -> Option<LinearScale> {
        match self {
            Self::Linear(scale) => Some(*scale),
            Self::Band(_) | Self::Point(_) => None,
        }
    }

    #[must_use]
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Band(scale) | Self::Point(scale) => Some(scale),
            Self::Linear(_) => None,
        }
    }
}

/// Offset that moves a tick from the band start to the middle of the band
/// plus half of the padding gap, rounded to whole pixels.
#[must_use]
pub fn tick_adjust(bandwidth: f64, padding: f64) -> f64 {
    if !(0.0..1.0).contains(&padding) {
        return round_px(bandwidth / 2.0);
    }
    let distance_between_gridlines = bandwidth / (1.0 - padding);
    let padding_distance = distance_between_gridlines * padding;
    round_px(bandwidth / 2.0 + padding_distance / 2.0)
}

/// Human-friendly tick values (1, 2 or 5 times a power of ten) covering
/// `[start, stop]`. Values follow the direction of the input interval.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let Some(plan) = TickPlan::resolve(low, high, count as f64) else {
        return ticks;
    };
    if plan.last < plan.first {
        return ticks;
    }

    let n = (plan.last - plan.first + 1) as usize;
    for i in 0..n {
        let index = if reverse {
            plan.last - i as i64
        } else {
            plan.first + i as i64
        };
        ticks.push(plan.value(index));
    }
    ticks
}

struct TickPlan {
    first: i64,
    last: i64,
    // Negative increments encode `1 / increment` to keep small steps exact.
    increment: f64,
}

impl TickPlan {
    fn resolve(low: f64, high: f64, count: f64) -> Option<Self> {
        let step = (high - low) / count;
        if !step.is_finite() || step == 0.0 {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let plan = if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let mut first = (low * inc).round() as i64;
            let mut last = (high * inc).round() as i64;
            if (first as f64) / inc < low {
                first += 1;
            }
            if (last as f64) / inc > high {
                last -= 1;
            }
            Self {
                first,
                last,
                increment: -inc,
            }
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut first = (low / inc).round() as i64;
            let mut last = (high / inc).round() as i64;
            if (first as f64) * inc < low {
                first += 1;
            }
            if (last as f64) * inc > high {
                last -= 1;
            }
            Self {
                first,
                last,
                increment: inc,
            }
        };

        if plan.last < plan.first && (0.5..2.0).contains(&count) {
            return Self::resolve(low, high, count * 2.0);
        }
        if !plan.increment.is_finite() || plan.increment == 0.0 {
            return None;
        }
        Some(plan)
    }

    fn value(&self, index: i64) -> f64 {
        if self.increment < 0.0 {
            index as f64 / -self.increment
        } else {
            index as f64 * self.increment
        }
    }
}
