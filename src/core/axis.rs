use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::domain::Domain;
use crate::core::layout::Body;
use crate::core::primitives::format_number;
use crate::core::scale::{BandScale, DEFAULT_TICK_COUNT, LinearScale, Scale, tick_adjust};

/// Scale family of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    #[default]
    Linear,
    Band,
    Point,
}

impl AxisKind {
    #[must_use]
    pub const fn is_discrete(self) -> bool {
        matches!(self, Self::Band | Self::Point)
    }
}

/// Domain bound policy: inferred from data or fixed by the caller.
///
/// Serialized as the string `"auto"` or a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisBound {
    #[default]
    Auto,
    Fixed(f64),
}

impl AxisBound {
    #[must_use]
    pub fn resolve(self, inferred: f64) -> f64 {
        match self {
            Self::Auto => inferred,
            Self::Fixed(value) => value,
        }
    }
}

impl Serialize for AxisBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(value) => serializer.serialize_f64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for AxisBound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AxisBoundVisitor;

        impl Visitor<'_> for AxisBoundVisitor {
            type Value = AxisBound;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"auto\" or a number")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<AxisBound, E> {
                if value == "auto" {
                    Ok(AxisBound::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<AxisBound, E> {
                Ok(AxisBound::Fixed(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<AxisBound, E> {
                Ok(AxisBound::Fixed(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<AxisBound, E> {
                Ok(AxisBound::Fixed(value as f64))
            }
        }

        deserializer.deserialize_any(AxisBoundVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridlineStyle {
    pub hidden: bool,
    pub color: String,
    pub width: f64,
}

impl GridlineStyle {
    #[must_use]
    pub fn visible() -> Self {
        Self {
            hidden: false,
            color: "#EFEFEF".to_owned(),
            width: 1.0,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::visible()
        }
    }
}

/// Per-axis options. `padding` only affects band axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub kind: AxisKind,
    pub min: AxisBound,
    pub max: AxisBound,
    pub padding: f64,
    pub inner_padding: f64,
    pub gridlines: GridlineStyle,
}

impl AxisConfig {
    #[must_use]
    pub fn new(kind: AxisKind, gridlines: GridlineStyle) -> Self {
        Self {
            kind,
            min: AxisBound::Auto,
            max: AxisBound::Auto,
            padding: 0.0,
            inner_padding: 0.0,
            gridlines,
        }
    }

    #[must_use]
    pub fn has_fixed_bound(&self) -> bool {
        matches!(self.min, AxisBound::Fixed(_)) || matches!(self.max, AxisBound::Fixed(_))
    }
}

/// Edge of the body an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPosition {
    Left,
    Bottom,
    Right,
}

impl AxisPosition {
    /// Pixel extent gridlines of this axis span across the body.
    #[must_use]
    pub fn cross_extent(self, body: Body) -> f64 {
        match self {
            Self::Left | Self::Right => body.width,
            Self::Bottom => body.height,
        }
    }

    /// Pixel range the axis scale maps onto.
    #[must_use]
    pub fn range(self, body: Body) -> (f64, f64) {
        match self {
            Self::Left | Self::Right => body.vertical_range(),
            Self::Bottom => body.horizontal_range(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub label: String,
    /// Scale output for the tick value; band start for discrete axes.
    pub position: f64,
}

/// An axis after domain resolution: scale, tick set and gridline geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxis {
    pub position: AxisPosition,
    pub domain: Domain,
    pub scale: Scale,
    pub ticks: Vec<Tick>,
    /// Offset added to every tick anchor; non-zero only for band axes.
    pub tick_adjust: f64,
    /// Gridline length across the body, 0 when gridlines are hidden.
    pub gridline_length: f64,
}

impl ResolvedAxis {
    #[must_use]
    pub fn resolve(
        position: AxisPosition,
        config: &AxisConfig,
        domain: Domain,
        body: Body,
    ) -> Self {
        let scale = resolve_scale(position.range(body), &domain, config);
        let ticks = ticks_for(&scale, &domain);
        let tick_adjust = match &scale {
            Scale::Band(band) => tick_adjust(band.bandwidth(), config.padding),
            Scale::Point(point) => tick_adjust(point.bandwidth(), 0.0),
            Scale::Linear(_) => 0.0,
        };
        let gridline_length = if config.gridlines.hidden {
            0.0
        } else {
            position.cross_extent(body)
        };

        Self {
            position,
            domain,
            scale,
            ticks,
            tick_adjust,
            gridline_length,
        }
    }

    /// Linear view of the scale; discrete axes yield a degenerate scale.
    #[must_use]
    pub fn linear(&self) -> LinearScale {
        self.scale
            .as_linear()
            .unwrap_or_else(|| LinearScale::new((0.0, 0.0), self.position_range()))
    }

    fn position_range(&self) -> (f64, f64) {
        match &self.scale {
            Scale::Linear(scale) => scale.range(),
            Scale::Band(scale) | Scale::Point(scale) => scale.range(),
        }
    }

    /// Lower end of a numeric domain, 0 for discrete ones.
    #[must_use]
    pub fn domain_min(&self) -> f64 {
        self.domain.numeric_bounds().map_or(0.0, |(min, _)| min)
    }
}

/// Builds the scale for `domain` over `range` according to the axis kind.
///
/// A domain that does not match the kind (numeric for a band axis or the
/// reverse) resolves to an empty scale instead of failing.
#[must_use]
pub fn resolve_scale(range: (f64, f64), domain: &Domain, config: &AxisConfig) -> Scale {
    match (config.kind, domain) {
        (AxisKind::Linear, Domain::Numeric { min, max }) => {
            Scale::Linear(LinearScale::new((*min, *max), range))
        }
        (AxisKind::Linear, Domain::Categorical(_)) => {
            Scale::Linear(LinearScale::new((0.0, 0.0), range))
        }
        (AxisKind::Band, Domain::Categorical(categories)) => {
            Scale::Band(BandScale::new(categories.iter().cloned(), range, config.padding))
        }
        (AxisKind::Point, Domain::Categorical(categories)) => {
            Scale::Point(BandScale::points(categories.iter().cloned(), range))
        }
        (AxisKind::Band, Domain::Numeric { .. }) => {
            Scale::Band(BandScale::new(std::iter::empty(), range, config.padding))
        }
        (AxisKind::Point, Domain::Numeric { .. }) => {
            Scale::Point(BandScale::points(std::iter::empty(), range))
        }
    }
}

fn ticks_for(scale: &Scale, domain: &Domain) -> Vec<Tick> {
    match (scale, domain) {
        (Scale::Linear(linear), Domain::Numeric { .. }) => linear
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                label: format_number(value),
                position: linear.map(value),
            })
            .collect(),
        (Scale::Band(_) | Scale::Point(_), Domain::Categorical(categories)) => categories
            .iter()
            .filter_map(|category| {
                scale.position(category).map(|position| Tick {
                    label: category.to_string(),
                    position,
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}
