use tracing::{trace, warn};

use crate::core::{
    AxisPosition, AxisSide, BandScale, Body, Category, CategoryStack, DomainSource, ResolvedAxis,
    resolve_domain, resolve_stacked_domain, stack_categories,
};
use crate::render::{
    Element, ElementKey, ElementRole, GroupDescriptor, RectDescriptor, Scene, VisualElement,
};

use super::ChartConfig;
use super::axis_scene::assemble_scene;
use super::mark_geometry::{grouped_interval, pixel_span, stacked_interval};

/// Column and stacked-column scene: band categories on the bottom axis and
/// values on the left axis.
pub(super) fn build_column_scene(config: &ChartConfig, body: Body, stacked: bool) -> Scene {
    warn_on_right_axis_datasets(config, "column");

    let category_domain = resolve_domain(
        &config.axis_bottom,
        &config.datasets,
        DomainSource::Categories,
    );
    let categories = category_domain.categories().to_vec();
    let bottom = ResolvedAxis::resolve(
        AxisPosition::Bottom,
        &config.axis_bottom,
        category_domain,
        body,
    );

    let (left, groups) = if stacked {
        let stacks = stack_categories(&categories, &config.datasets);
        let value_domain = resolve_stacked_domain(&config.axis_left, &stacks);
        let left =
            ResolvedAxis::resolve(AxisPosition::Left, &config.axis_left, value_domain, body);
        let groups = stacks
            .iter()
            .map(|stack| stacked_column_group(stack, &bottom, &left))
            .collect();
        (left, groups)
    } else {
        let value_domain =
            resolve_domain(&config.axis_left, &config.datasets, DomainSource::Values);
        let left =
            ResolvedAxis::resolve(AxisPosition::Left, &config.axis_left, value_domain, body);
        let groups = categories
            .iter()
            .map(|category| grouped_column_group(config, category, &bottom, &left))
            .collect();
        (left, groups)
    };

    trace!(
        categories = categories.len(),
        datasets = config.datasets.len(),
        stacked,
        "built column geometry"
    );

    let marks = VisualElement::group(
        ElementKey::unique(ElementRole::ColumnLayer),
        GroupDescriptor::plain(),
        groups,
    );
    assemble_scene(
        body,
        vec![(bottom, &config.axis_bottom), (left, &config.axis_left)],
        marks,
    )
}

fn column_group(
    category: &Category,
    bottom: &ResolvedAxis,
    columns: Vec<VisualElement>,
) -> VisualElement {
    let band_start = bottom.scale.position(category).unwrap_or(0.0);
    VisualElement::group(
        ElementKey::category(ElementRole::ColumnGroup, category.clone()),
        GroupDescriptor {
            extent: Some(bottom.scale.bandwidth().unwrap_or(0.0)),
            ..GroupDescriptor::translated(band_start, 0.0)
        },
        columns,
    )
}

fn grouped_column_group(
    config: &ChartConfig,
    category: &Category,
    bottom: &ResolvedAxis,
    left: &ResolvedAxis,
) -> VisualElement {
    let bandwidth = bottom.scale.bandwidth().unwrap_or(0.0);
    let inner = BandScale::new(
        config.datasets.iter().map(|dataset| dataset.name.as_str()),
        (0.0, bandwidth),
        config.axis_bottom.inner_padding,
    );
    let scale = left.linear();
    let domain_min = left.domain_min();

    let columns = config
        .datasets
        .iter()
        .filter_map(|dataset| {
            let value = dataset.value_at(category)?;
            let (y, height) = pixel_span(scale, grouped_interval(value, domain_min));
            Some(VisualElement::leaf(
                ElementKey::series(ElementRole::Column, dataset.name.clone()),
                Element::Rect(RectDescriptor {
                    x: inner.position(dataset.name.as_str()).unwrap_or(0.0),
                    y,
                    width: inner.bandwidth(),
                    height,
                    fill: dataset.color.clone(),
                }),
            ))
        })
        .collect();
    column_group(category, bottom, columns)
}

fn stacked_column_group(
    stack: &CategoryStack,
    bottom: &ResolvedAxis,
    left: &ResolvedAxis,
) -> VisualElement {
    let bandwidth = bottom.scale.bandwidth().unwrap_or(0.0);
    let scale = left.linear();
    let domain_min = left.domain_min();

    let columns = stack
        .intervals
        .iter()
        .map(|interval| {
            let (y, height) =
                pixel_span(scale, stacked_interval(interval.y0, interval.y1, domain_min));
            VisualElement::leaf(
                ElementKey::series(ElementRole::Column, interval.series_key.clone()),
                Element::Rect(RectDescriptor {
                    x: 0.0,
                    y,
                    width: bandwidth,
                    height,
                    fill: interval.color.clone(),
                }),
            )
        })
        .collect();
    column_group(&stack.category, bottom, columns)
}

/// Only the line variant has a right axis; other variants plot every dataset
/// against their single value axis.
pub(super) fn warn_on_right_axis_datasets(config: &ChartConfig, variant: &str) {
    let ignored = config
        .datasets
        .iter()
        .filter(|dataset| dataset.axis == AxisSide::Right)
        .count();
    if ignored > 0 {
        warn!(
            variant,
            datasets = ignored,
            "right-axis assignment ignored; plotting against the value axis"
        );
    }
}
