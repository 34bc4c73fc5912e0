use crate::core::{Body, ResolvedAxis};
use crate::error::ChartResult;
use crate::render::{
    AxisDescriptor, CircleDescriptor, ElementKey, ElementRole, GroupDescriptor, PathDescriptor,
    RectDescriptor,
};

/// Geometry and style of one visual element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Group(GroupDescriptor),
    Axis(AxisDescriptor),
    Path(PathDescriptor),
    Rect(RectDescriptor),
    Circle(CircleDescriptor),
}

impl Element {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Group(group) => group.validate(),
            Self::Axis(axis) => axis.validate(),
            Self::Path(path) => path.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
        }
    }
}

/// Keyed visual element descriptor with its nested children.
///
/// Children are reconciled independently, keyed by their own identity.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualElement {
    pub key: ElementKey,
    pub element: Element,
    pub children: Vec<VisualElement>,
}

impl VisualElement {
    #[must_use]
    pub fn leaf(key: ElementKey, element: Element) -> Self {
        Self {
            key,
            element,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn group(key: ElementKey, group: GroupDescriptor, children: Vec<VisualElement>) -> Self {
        Self {
            key,
            element: Element::Group(group),
            children,
        }
    }

    /// Depth-first search for the first element with `role`.
    #[must_use]
    pub fn find(&self, role: ElementRole) -> Option<&VisualElement> {
        if self.key.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// All elements with `role`, depth-first.
    #[must_use]
    pub fn find_all(&self, role: ElementRole) -> Vec<&VisualElement> {
        let mut found = Vec::new();
        self.collect_role(role, &mut found);
        found
    }

    fn collect_role<'a>(&'a self, role: ElementRole, found: &mut Vec<&'a VisualElement>) {
        if self.key.role == role {
            found.push(self);
        }
        for child in &self.children {
            child.collect_role(role, found);
        }
    }

    /// Total number of elements in this subtree, including `self`.
    #[must_use]
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(VisualElement::element_count)
            .sum::<usize>()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.element.validate()?;
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

/// Everything one update cycle computed: body, resolved axes and the
/// element tree rooted at the body group.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub body: Body,
    pub axes: Vec<ResolvedAxis>,
    pub root: VisualElement,
}

impl Scene {
    #[must_use]
    pub fn axis(&self, position: crate::core::AxisPosition) -> Option<&ResolvedAxis> {
        self.axes.iter().find(|axis| axis.position == position)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.root.validate()
    }
}
