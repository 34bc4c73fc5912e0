use crate::core::{AxisConfig, AxisPosition, Body, ResolvedAxis};
use crate::render::{
    AxisDescriptor, Element, ElementKey, ElementRole, GroupDescriptor, Scene, VisualElement,
};

/// Axis origin inside the body group.
fn axis_translation(position: AxisPosition, body: Body) -> (f64, f64) {
    match position {
        AxisPosition::Left => (0.0, 0.0),
        AxisPosition::Bottom => (0.0, body.height),
        AxisPosition::Right => (body.width, 0.0),
    }
}

fn label_offset(position: AxisPosition) -> (f64, f64) {
    match position {
        AxisPosition::Left => (-4.0, 0.0),
        AxisPosition::Bottom => (0.0, 6.0),
        AxisPosition::Right => (0.0, 0.0),
    }
}

pub(super) fn axis_element(axis: &ResolvedAxis, config: &AxisConfig, body: Body) -> VisualElement {
    let (translate_x, translate_y) = axis_translation(axis.position, body);
    VisualElement::leaf(
        ElementKey::unique(ElementRole::Axis(axis.position)),
        Element::Axis(AxisDescriptor {
            position: axis.position,
            translate_x,
            translate_y,
            ticks: axis.ticks.clone(),
            tick_adjust: axis.tick_adjust,
            gridline_length: axis.gridline_length,
            gridline_color: config.gridlines.color.clone(),
            gridline_width: config.gridlines.width,
            label_offset: label_offset(axis.position),
        }),
    )
}

/// Wraps the axes and the variant's mark layer into the clipped body group.
pub(super) fn assemble_scene(
    body: Body,
    axes: Vec<(ResolvedAxis, &AxisConfig)>,
    marks: VisualElement,
) -> Scene {
    let axis_elements = axes
        .iter()
        .map(|(axis, config)| axis_element(axis, config, body))
        .collect();
    let axes_layer = VisualElement::group(
        ElementKey::unique(ElementRole::Axes),
        GroupDescriptor::plain(),
        axis_elements,
    );

    let root = VisualElement::group(
        ElementKey::unique(ElementRole::Body),
        GroupDescriptor {
            clip: Some((body.width, body.height)),
            ..GroupDescriptor::translated(body.margins.left, body.margins.top)
        },
        vec![axes_layer, marks],
    );

    Scene {
        body,
        axes: axes.into_iter().map(|(axis, _)| axis).collect(),
        root,
    }
}
