use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, Category};

/// Semantic role of a rendered element.
///
/// Each role has a stable class name so hosts can target groups and marks
/// for styling or testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    Body,
    Axes,
    Axis(AxisPosition),
    SeriesLayer,
    SeriesGroup,
    Area,
    Line,
    Circle,
    ColumnLayer,
    ColumnGroup,
    Column,
    BarLayer,
    BarGroup,
    Bar,
}

impl ElementRole {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Body => "chart__body",
            Self::Axes => "chart__axes",
            Self::Axis(AxisPosition::Left) => "axis__left",
            Self::Axis(AxisPosition::Bottom) => "axis__bottom",
            Self::Axis(AxisPosition::Right) => "axis__right",
            Self::SeriesLayer => "chart__series",
            Self::SeriesGroup => "series__group",
            Self::Area => "area",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::ColumnLayer => "chart__columns",
            Self::ColumnGroup => "column-group",
            Self::Column => "column",
            Self::BarLayer => "chart__bars",
            Self::BarGroup => "bar-group",
            Self::Bar => "bar",
        }
    }
}

/// Identity of an element within its role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    /// Singleton elements such as the body or an axis.
    Unique,
    /// Dataset name.
    Series(String),
    /// Category value.
    Category(Category),
}

/// Reconciliation key: role plus identity.
///
/// Keys must stay stable across cycles for the same logical entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey {
    pub role: ElementRole,
    pub id: ElementId,
}

impl ElementKey {
    #[must_use]
    pub const fn unique(role: ElementRole) -> Self {
        Self {
            role,
            id: ElementId::Unique,
        }
    }

    #[must_use]
    pub fn series(role: ElementRole, name: impl Into<String>) -> Self {
        Self {
            role,
            id: ElementId::Series(name.into()),
        }
    }

    #[must_use]
    pub fn category(role: ElementRole, category: Category) -> Self {
        Self {
            role,
            id: ElementId::Category(category),
        }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            ElementId::Unique => f.write_str(self.role.class_name()),
            ElementId::Series(name) => write!(f, "{}[{name}]", self.role.class_name()),
            ElementId::Category(category) => {
                write!(f, "{}[{category}]", self.role.class_name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementKey, ElementRole};
    use crate::core::{AxisPosition, Category};

    #[test]
    fn class_names_are_stable() {
        assert_eq!(ElementRole::Axis(AxisPosition::Bottom).class_name(), "axis__bottom");
        assert_eq!(ElementRole::ColumnGroup.class_name(), "column-group");
        assert_eq!(ElementRole::SeriesGroup.class_name(), "series__group");
    }

    #[test]
    fn numeric_and_named_ids_do_not_collide() {
        let named = ElementKey::series(ElementRole::Circle, "1");
        let numeric = ElementKey::category(ElementRole::Circle, Category::from(1.0));
        assert_ne!(named, numeric);
        assert_eq!(numeric.to_string(), "circle[1]");
    }
}
