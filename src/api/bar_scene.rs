use tracing::trace;

use crate::core::{
    AxisPosition, BandScale, Body, Category, CategoryStack, DomainSource, ResolvedAxis,
    resolve_domain, resolve_stacked_domain, stack_categories,
};
use crate::render::{
    Element, ElementKey, ElementRole, GroupDescriptor, RectDescriptor, Scene, VisualElement,
};

use super::ChartConfig;
use super::axis_scene::assemble_scene;
use super::column_scene::warn_on_right_axis_datasets;
use super::mark_geometry::{grouped_interval, pixel_span, stacked_interval};

/// Bar and stacked-bar scene: reversed band categories on the left axis and
/// values on the bottom axis.
pub(super) fn build_bar_scene(config: &ChartConfig, body: Body, stacked: bool) -> Scene {
    warn_on_right_axis_datasets(config, "bar");

    let category_domain = resolve_domain(
        &config.axis_left,
        &config.datasets,
        DomainSource::ReversedCategories,
    );
    let categories = category_domain.categories().to_vec();
    let left = ResolvedAxis::resolve(
        AxisPosition::Left,
        &config.axis_left,
        category_domain,
        body,
    );

    let (bottom, groups) = if stacked {
        let stacks = stack_categories(&categories, &config.datasets);
        let value_domain = resolve_stacked_domain(&config.axis_bottom, &stacks);
        let bottom = ResolvedAxis::resolve(
            AxisPosition::Bottom,
            &config.axis_bottom,
            value_domain,
            body,
        );
        let groups = stacks
            .iter()
            .map(|stack| stacked_bar_group(stack, &left, &bottom))
            .collect();
        (bottom, groups)
    } else {
        let value_domain =
            resolve_domain(&config.axis_bottom, &config.datasets, DomainSource::Values);
        let bottom = ResolvedAxis::resolve(
            AxisPosition::Bottom,
            &config.axis_bottom,
            value_domain,
            body,
        );
        let groups = categories
            .iter()
            .map(|category| grouped_bar_group(config, category, &left, &bottom))
            .collect();
        (bottom, groups)
    };

    trace!(
        categories = categories.len(),
        datasets = config.datasets.len(),
        stacked,
        "built bar geometry"
    );

    let marks = VisualElement::group(
        ElementKey::unique(ElementRole::BarLayer),
        GroupDescriptor::plain(),
        groups,
    );
    assemble_scene(
        body,
        vec![(left, &config.axis_left), (bottom, &config.axis_bottom)],
        marks,
    )
}

fn bar_group(category: &Category, left: &ResolvedAxis, bars: Vec<VisualElement>) -> VisualElement {
    let band_start = left.scale.position(category).unwrap_or(0.0);
    VisualElement::group(
        ElementKey::category(ElementRole::BarGroup, category.clone()),
        GroupDescriptor {
            extent: Some(left.scale.bandwidth().unwrap_or(0.0)),
            ..GroupDescriptor::translated(0.0, band_start)
        },
        bars,
    )
}

fn grouped_bar_group(
    config: &ChartConfig,
    category: &Category,
    left: &ResolvedAxis,
    bottom: &ResolvedAxis,
) -> VisualElement {
    let bandwidth = left.scale.bandwidth().unwrap_or(0.0);
    let inner = BandScale::new(
        config.datasets.iter().map(|dataset| dataset.name.as_str()),
        (0.0, bandwidth),
        config.axis_left.inner_padding,
    );
    let scale = bottom.linear();
    let domain_min = bottom.domain_min();

    let bars = config
        .datasets
        .iter()
        .filter_map(|dataset| {
            let value = dataset.value_at(category)?;
            let (x, width) = pixel_span(scale, grouped_interval(value, domain_min));
            Some(VisualElement::leaf(
                ElementKey::series(ElementRole::Bar, dataset.name.clone()),
                Element::Rect(RectDescriptor {
                    x,
                    y: inner.position(dataset.name.as_str()).unwrap_or(0.0),
                    width,
                    height: inner.bandwidth(),
                    fill: dataset.color.clone(),
                }),
            ))
        })
        .collect();
    bar_group(category, left, bars)
}

fn stacked_bar_group(
    stack: &CategoryStack,
    left: &ResolvedAxis,
    bottom: &ResolvedAxis,
) -> VisualElement {
    let bandwidth = left.scale.bandwidth().unwrap_or(0.0);
    let scale = bottom.linear();
    let domain_min = bottom.domain_min();

    let bars = stack
        .intervals
        .iter()
        .map(|interval| {
            let (x, width) =
                pixel_span(scale, stacked_interval(interval.y0, interval.y1, domain_min));
            VisualElement::leaf(
                ElementKey::series(ElementRole::Bar, interval.series_key.clone()),
                Element::Rect(RectDescriptor {
                    x,
                    y: 0.0,
                    width,
                    height: bandwidth,
                    fill: interval.color.clone(),
                }),
            )
        })
        .collect();
    bar_group(&stack.category, left, bars)
}
