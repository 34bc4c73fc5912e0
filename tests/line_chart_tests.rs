use approx::assert_abs_diff_eq;
use chartkit::api::{AxisPatch, Chart, ChartConfigPatch, ChartSetup, ChartVariant};
use chartkit::core::{
    AxisBound, AxisKind, AxisPosition, AxisSide, ContainerSize, Dataset, GapPolicy, Point,
};
use chartkit::render::{
    AreaVertex, CircleDescriptor, Element, ElementRole, PathDescriptor, PathShape,
    RecordingCanvas, SERIES_CURVE, Vertex, VisualElement,
};

fn canvas() -> RecordingCanvas {
    RecordingCanvas::new().with_mount("#chart", ContainerSize::new(450.0, 300.0))
}

fn datasets() -> Vec<Dataset> {
    vec![
        Dataset::new(
            "A",
            vec![Point::new("Jan", 10.0), Point::new("Feb", 20.0), Point::missing("Mar")],
        )
        .with_color("#2ca02c")
        .with_line_width(3.0),
        Dataset::new("B", vec![Point::new("Jan", 100.0), Point::new("Feb", 300.0)])
            .on_axis(AxisSide::Right),
    ]
}

fn zero_min() -> ChartConfigPatch {
    ChartConfigPatch::new()
        .with_datasets(datasets())
        .with_axis_left(AxisPatch::new().with_min(AxisBound::Fixed(0.0)))
}

fn path(element: &VisualElement) -> &PathDescriptor {
    match &element.element {
        Element::Path(path) => path,
        other => panic!("expected path, got {other:?}"),
    }
}

fn line_runs(element: &VisualElement) -> Vec<Vec<(f64, f64)>> {
    match &path(element).shape {
        PathShape::Line { runs } => runs
            .iter()
            .map(|run| run.iter().map(|Vertex { x, y }| (*x, *y)).collect())
            .collect(),
        other => panic!("expected line shape, got {other:?}"),
    }
}

fn circles(group: &VisualElement) -> Vec<&CircleDescriptor> {
    group
        .children
        .iter()
        .filter_map(|child| match &child.element {
            Element::Circle(circle) => Some(circle),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_fill_dips_missing_points_to_zero() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        zero_min(),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");

    let bottom = scene.axis(AxisPosition::Bottom).expect("bottom axis");
    assert_eq!(bottom.scale.bandwidth(), Some(0.0));
    assert_eq!(bottom.tick_adjust, 0.0);

    let series = scene.root.find_all(ElementRole::SeriesGroup);
    assert_eq!(series.len(), 2);
    let a = series[0];
    assert_eq!(
        a.children.iter().map(|child| child.key.role).collect::<Vec<_>>(),
        vec![
            ElementRole::Area,
            ElementRole::Line,
            ElementRole::Circle,
            ElementRole::Circle,
            ElementRole::Circle,
        ]
    );
    assert_eq!(
        line_runs(&a.children[1]),
        vec![vec![(0.0, 125.0), (200.0, 0.0), (400.0, 250.0)]]
    );

    let line = path(&a.children[1]);
    assert_eq!(line.curve, SERIES_CURVE);
    assert_eq!(line.style.stroke.as_deref(), Some("#2ca02c"));
    assert_eq!(line.style.stroke_width, 3.0);
    assert_eq!(line.style.fill, None);

    let area = path(&a.children[0]);
    assert_eq!(area.style.fill.as_deref(), Some("#2ca02c"));
    assert_abs_diff_eq!(area.style.opacity, 0.3);
    match &area.shape {
        PathShape::Area { runs } => {
            assert_eq!(runs.len(), 1);
            assert_eq!(
                runs[0][0],
                AreaVertex {
                    x: 0.0,
                    y0: 250.0,
                    y1: 125.0
                }
            );
        }
        other => panic!("expected area shape, got {other:?}"),
    }
}

#[test]
fn break_policy_splits_paths_and_skips_circles() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        zero_min().with_gap_policy(GapPolicy::Break),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");
    let a = scene.root.find(ElementRole::SeriesGroup).expect("series");

    assert_eq!(
        line_runs(&a.children[1]),
        vec![vec![(0.0, 125.0), (200.0, 0.0)]]
    );
    assert_eq!(circles(a).len(), 2);
}

#[test]
fn right_axis_series_use_their_own_scale() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        zero_min(),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");

    let right = scene.axis(AxisPosition::Right).expect("right axis");
    assert_eq!(right.domain.numeric_bounds(), Some((100.0, 300.0)));
    assert_eq!(right.gridline_length, 0.0);

    let b = scene.root.find_all(ElementRole::SeriesGroup)[1];
    let cys: Vec<_> = circles(b).iter().map(|circle| circle.cy).collect();
    assert_eq!(cys[..2], [250.0, 0.0]);
}

#[test]
fn right_axis_is_absent_without_right_datasets() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        ChartConfigPatch::new().with_datasets(vec![Dataset::new(
            "A",
            vec![Point::new("Jan", 1.0)],
        )]),
    )
    .expect("chart");
    assert!(
        chart
            .scene()
            .and_then(|scene| scene.axis(AxisPosition::Right))
            .is_none()
    );
}

#[test]
fn area_baseline_sits_at_zero_for_mixed_sign_domains() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        ChartConfigPatch::new().with_datasets(vec![Dataset::new(
            "net",
            vec![Point::new("Mon", -10.0), Point::new("Tue", 20.0)],
        )]),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");
    let group = scene.root.find(ElementRole::SeriesGroup).expect("series");
    match &path(&group.children[0]).shape {
        PathShape::Area { runs } => {
            // Domain [-10, 20]: zero maps to 250 - 10 / 30 * 250, rounded.
            assert!(runs[0].iter().all(|vertex| vertex.y0 == 167.0));
            assert_eq!(runs[0][0].y1, 250.0);
        }
        other => panic!("expected area shape, got {other:?}"),
    }
}

#[test]
fn area_baseline_sits_on_positive_domain_minimum() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line),
        ChartConfigPatch::new().with_datasets(vec![Dataset::new(
            "warm",
            vec![Point::new("Mon", 10.0), Point::new("Tue", 20.0)],
        )]),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");
    let group = scene.root.find(ElementRole::SeriesGroup).expect("series");
    match &path(&group.children[0]).shape {
        PathShape::Area { runs } => {
            assert!(runs[0].iter().all(|vertex| vertex.y0 == 250.0));
        }
        other => panic!("expected area shape, got {other:?}"),
    }
}

#[test]
fn linear_bottom_axis_plots_numeric_positions() {
    let dataset = Dataset::new(
        "A",
        vec![
            Point::new(0.0, 1.0),
            Point::new(10.0, 3.0),
            Point::new("label", 7.0),
            Point::new(5.0, 2.0),
            Point::new(10.0, 9.0),
        ],
    );
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line).with_category_axis(AxisKind::Linear),
        ChartConfigPatch::new()
            .with_datasets(vec![dataset])
            .with_axis_left(AxisPatch::new().with_min(AxisBound::Fixed(0.0))),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");

    let bottom = scene.axis(AxisPosition::Bottom).expect("bottom axis");
    assert_eq!(bottom.domain.numeric_bounds(), Some((0.0, 10.0)));

    let group = scene.root.find(ElementRole::SeriesGroup).expect("series");
    let xs: Vec<_> = circles(group).iter().map(|circle| circle.cx).collect();
    assert_eq!(xs, vec![0.0, 400.0, 200.0]);
}

#[test]
fn band_bottom_axis_places_points_at_band_start() {
    let chart = Chart::create(
        canvas(),
        ChartSetup::new("#chart", ChartVariant::Line).with_category_axis(AxisKind::Band),
        ChartConfigPatch::new().with_datasets(vec![Dataset::new(
            "A",
            vec![Point::new("Jan", 1.0), Point::new("Feb", 2.0)],
        )]),
    )
    .expect("chart");
    let scene = chart.scene().expect("scene");
    let bottom = scene.axis(AxisPosition::Bottom).expect("bottom axis");
    assert_eq!(bottom.tick_adjust, 100.0);

    let group = scene.root.find(ElementRole::SeriesGroup).expect("series");
    let xs: Vec<_> = circles(group).iter().map(|circle| circle.cx).collect();
    assert_eq!(xs, vec![0.0, 200.0]);
}
