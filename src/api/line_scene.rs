use indexmap::IndexSet;
use tracing::trace;

use crate::core::{
    AxisPosition, AxisSide, Body, Category, Dataset, DomainSource, GapPolicy, ResolvedAxis,
    defined_runs, normalize, resolve_domain,
};
use crate::render::{
    AreaVertex, CircleDescriptor, Element, ElementKey, ElementRole, GroupDescriptor,
    PathDescriptor, PathShape, PathStyle, SERIES_CURVE, Scene, Vertex, VisualElement,
};

use super::ChartConfig;
use super::axis_scene::assemble_scene;

/// One observation placed on the bottom axis.
#[derive(Debug, Clone, PartialEq)]
struct PlotPoint {
    category: Category,
    x: f64,
    y: Option<f64>,
}

/// Line scene: overlaid series on a point, band or linear bottom axis with
/// independent left and right value axes.
pub(super) fn build_line_scene(config: &ChartConfig, body: Body) -> Scene {
    let bottom_source = if config.axis_bottom.kind.is_discrete() {
        DomainSource::Categories
    } else {
        DomainSource::Positions
    };
    let bottom_domain = resolve_domain(&config.axis_bottom, &config.datasets, bottom_source);
    let bottom = ResolvedAxis::resolve(
        AxisPosition::Bottom,
        &config.axis_bottom,
        bottom_domain,
        body,
    );

    let left_domain = resolve_domain(
        &config.axis_left,
        datasets_on(config, AxisSide::Left),
        DomainSource::Values,
    );
    let left = ResolvedAxis::resolve(AxisPosition::Left, &config.axis_left, left_domain, body);

    let uses_right = config
        .datasets
        .iter()
        .any(|dataset| dataset.axis == AxisSide::Right)
        || config.axis_right.has_fixed_bound();
    let right = uses_right.then(|| {
        let right_domain = resolve_domain(
            &config.axis_right,
            datasets_on(config, AxisSide::Right),
            DomainSource::Values,
        );
        ResolvedAxis::resolve(AxisPosition::Right, &config.axis_right, right_domain, body)
    });

    let groups = config
        .datasets
        .iter()
        .map(|dataset| {
            let value_axis = match (dataset.axis, &right) {
                (AxisSide::Right, Some(right)) => right,
                _ => &left,
            };
            let points = plot_points(dataset, &bottom, config.gap_policy);
            series_group(dataset, &points, value_axis)
        })
        .collect();

    trace!(
        datasets = config.datasets.len(),
        right_axis = right.is_some(),
        "built line geometry"
    );

    let marks = VisualElement::group(
        ElementKey::unique(ElementRole::SeriesLayer),
        GroupDescriptor::plain(),
        groups,
    );
    let mut axes = vec![(bottom, &config.axis_bottom), (left, &config.axis_left)];
    if let Some(right) = right {
        axes.push((right, &config.axis_right));
    }
    assemble_scene(body, axes, marks)
}

fn datasets_on(config: &ChartConfig, side: AxisSide) -> impl Iterator<Item = &Dataset> {
    config
        .datasets
        .iter()
        .filter(move |dataset| dataset.axis == side)
}

/// Aligns a dataset onto the bottom axis.
///
/// Discrete axes normalize onto the full category domain. Linear axes keep
/// input order, skip non-numeric x values and keep the first observation of
/// a repeated x.
fn plot_points(dataset: &Dataset, bottom: &ResolvedAxis, policy: GapPolicy) -> Vec<PlotPoint> {
    let place = |category: Category, y: Option<f64>| {
        bottom.scale.position(&category).map(|x| PlotPoint { category, x, y })
    };

    if bottom.scale.as_band().is_some() {
        return normalize(dataset, bottom.domain.categories(), policy)
            .into_iter()
            .filter_map(|point| place(point.x, point.y))
            .collect();
    }

    let mut seen = IndexSet::new();
    dataset
        .values
        .iter()
        .filter(|point| point.x.as_number().is_some())
        .filter(|point| seen.insert(point.x.clone()))
        .filter_map(|point| {
            let y = match policy {
                GapPolicy::ZeroFill => Some(point.y.unwrap_or(0.0)),
                GapPolicy::Break => point.y,
            };
            place(point.x.clone(), y)
        })
        .collect()
}

fn series_group(
    dataset: &Dataset,
    points: &[PlotPoint],
    value_axis: &ResolvedAxis,
) -> VisualElement {
    let scale = value_axis.linear();
    let baseline = scale.map(value_axis.domain_min().max(0.0));

    let vertices: Vec<Option<Vertex>> = points
        .iter()
        .map(|point| {
            point.y.map(|y| Vertex {
                x: point.x,
                y: scale.map(y),
            })
        })
        .collect();
    let area_vertices: Vec<Option<AreaVertex>> = vertices
        .iter()
        .map(|vertex| {
            vertex.map(|vertex| AreaVertex {
                x: vertex.x,
                y0: baseline,
                y1: vertex.y,
            })
        })
        .collect();

    let area = VisualElement::leaf(
        ElementKey::series(ElementRole::Area, dataset.name.clone()),
        Element::Path(PathDescriptor {
            shape: PathShape::Area {
                runs: defined_runs(&area_vertices),
            },
            curve: SERIES_CURVE,
            style: PathStyle {
                stroke: None,
                stroke_width: 0.0,
                fill: Some(dataset.color.clone()),
                opacity: dataset.opacity,
            },
        }),
    );
    let line = VisualElement::leaf(
        ElementKey::series(ElementRole::Line, dataset.name.clone()),
        Element::Path(PathDescriptor {
            shape: PathShape::Line {
                runs: defined_runs(&vertices),
            },
            curve: SERIES_CURVE,
            style: PathStyle {
                stroke: Some(dataset.color.clone()),
                stroke_width: dataset.line_width,
                fill: None,
                opacity: 1.0,
            },
        }),
    );

    let mut children = vec![area, line];
    children.extend(points.iter().zip(&vertices).filter_map(|(point, vertex)| {
        let vertex = (*vertex)?;
        Some(VisualElement::leaf(
            ElementKey::category(ElementRole::Circle, point.category.clone()),
            Element::Circle(CircleDescriptor {
                cx: vertex.x,
                cy: vertex.y,
                r: dataset.circle_radius,
                fill: dataset.color.clone(),
            }),
        ))
    }));

    VisualElement::group(
        ElementKey::series(ElementRole::SeriesGroup, dataset.name.clone()),
        GroupDescriptor::plain(),
        children,
    )
}
