use chartkit::api::{
    AxisPatch, BodyPatch, Chart, ChartConfigPatch, ChartSetup, ChartState, ChartVariant,
    ReconcileStats,
};
use chartkit::core::{AxisPosition, ContainerSize, Dataset, Point};
use chartkit::render::{ElementRole, RecordedElement, RecordingCanvas};
use chartkit::ChartError;

const MOUNT: &str = "#chart";

fn canvas(width: f64, height: f64) -> RecordingCanvas {
    RecordingCanvas::new().with_mount(MOUNT, ContainerSize::new(width, height))
}

fn monthly() -> Vec<Dataset> {
    vec![
        Dataset::new("A", vec![Point::new("Jan", 10.0), Point::new("Feb", 20.0)]),
        Dataset::new("B", vec![Point::new("Jan", 5.0)]).with_order(1.0),
    ]
}

fn mounted(variant: ChartVariant, datasets: Vec<Dataset>) -> Chart<RecordingCanvas> {
    let mut chart = Chart::new(
        canvas(450.0, 300.0),
        ChartSetup::new(MOUNT, variant),
        ChartConfigPatch::new().with_datasets(datasets),
    )
    .expect("chart");
    chart.mount().expect("mount");
    assert_eq!(chart.state(), ChartState::Mounted);
    chart
}

#[test]
fn first_update_creates_the_whole_tree() {
    let mut chart = mounted(ChartVariant::StackedColumn, monthly());
    let stats = chart.update(None).expect("update");

    // body, axes, two axes, column layer, two groups, four columns
    assert_eq!(
        stats,
        ReconcileStats {
            entered: 11,
            updated: 0,
            exited: 0,
        }
    );
    assert_eq!(chart.state(), ChartState::Rendered);
    let canvas = chart.adapter();
    assert_eq!(canvas.live_count(), 12);
    assert_eq!(canvas.created_count, 11);
    assert_eq!(canvas.updated_count, 0);
    assert_eq!(chart.scene().expect("scene").root.element_count(), 11);
    assert_eq!(canvas.find_by_class("chart__body").len(), 1);
    assert_eq!(canvas.find_by_class("axis__bottom").len(), 1);
    assert_eq!(canvas.find_by_class("column-group").len(), 2);
    assert_eq!(canvas.find_by_class("column").len(), 4);
}

#[test]
fn unchanged_update_only_refreshes() {
    let mut chart = mounted(ChartVariant::Line, monthly());
    let first = chart.update(None).expect("first");
    chart.adapter_mut().reset_counters();
    let second = chart.update(None).expect("second");
    assert_eq!(second.entered, 0);
    assert_eq!(second.exited, 0);
    assert_eq!(second.updated, first.entered);

    let canvas = chart.adapter();
    assert_eq!(canvas.created_count, 0);
    assert_eq!(canvas.removed_count, 0);
    assert_eq!(canvas.updated_count, second.updated);
}

#[test]
fn persisting_columns_keep_identity_when_values_change() {
    let mut chart = mounted(ChartVariant::Column, monthly());
    chart.update(None).expect("first");
    let before: Vec<_> = chart
        .adapter()
        .find_by_class("column")
        .iter()
        .map(|(handle, _)| *handle)
        .collect();

    let changed = vec![
        Dataset::new("A", vec![Point::new("Jan", 12.0), Point::new("Feb", 4.0)]),
        Dataset::new("B", vec![Point::new("Jan", 7.0)]).with_order(1.0),
    ];
    let stats = chart
        .update(Some(ChartConfigPatch::new().with_datasets(changed)))
        .expect("second");
    assert_eq!(stats.entered, 0);
    assert_eq!(stats.exited, 0);

    let after: Vec<_> = chart
        .adapter()
        .find_by_class("column")
        .iter()
        .map(|(handle, node)| {
            assert_eq!(node.revision, 1);
            *handle
        })
        .collect();
    assert_eq!(before, after);
}

#[test]
fn removed_category_exits_with_its_marks() {
    let mut chart = mounted(ChartVariant::StackedBar, monthly());
    chart.update(None).expect("first");

    let only_jan = vec![
        Dataset::new("A", vec![Point::new("Jan", 10.0)]),
        Dataset::new("B", vec![Point::new("Jan", 5.0)]).with_order(1.0),
    ];
    let stats = chart
        .update(Some(ChartConfigPatch::new().with_datasets(only_jan)))
        .expect("second");
    assert_eq!(stats.exited, 1);

    let canvas = chart.adapter();
    assert_eq!(canvas.find_by_class("bar-group").len(), 1);
    assert_eq!(canvas.find_by_class("bar").len(), 2);
}

#[test]
fn removed_dataset_exits_its_series_group() {
    let mut chart = mounted(ChartVariant::Line, monthly());
    chart.update(None).expect("first");
    let stats = chart
        .update(Some(
            ChartConfigPatch::new().with_datasets(vec![monthly().remove(0)]),
        ))
        .expect("second");
    assert_eq!(stats.entered, 0);
    assert_eq!(stats.exited, 1);
    assert_eq!(chart.adapter().find_by_class("series__group").len(), 1);
    assert_eq!(chart.adapter().find_by_class("circle").len(), 2);
}

#[test]
fn resize_then_update_matches_fresh_render() {
    let mut resized = Chart::create(
        canvas(450.0, 300.0),
        ChartSetup::new(MOUNT, ChartVariant::Column),
        ChartConfigPatch::new().with_datasets(monthly()),
    )
    .expect("chart");
    resized
        .adapter_mut()
        .set_container_size(MOUNT, ContainerSize::new(640.0, 480.0));
    let stats = resized.update(None).expect("resize");
    assert_eq!(stats.entered, 0);

    let fresh = Chart::create(
        canvas(640.0, 480.0),
        ChartSetup::new(MOUNT, ChartVariant::Column),
        ChartConfigPatch::new().with_datasets(monthly()),
    )
    .expect("fresh");

    assert_eq!(resized.scene(), fresh.scene());
    let body = resized.body().expect("body");
    assert_eq!((body.width, body.height), (590.0, 430.0));

    let surfaces: Vec<_> = resized
        .adapter()
        .find_by_class("chart__body")
        .iter()
        .filter_map(|(_, node)| node.parent)
        .filter_map(|parent| resized.adapter().node(parent))
        .map(|node| node.element.clone())
        .collect();
    assert_eq!(
        surfaces,
        vec![RecordedElement::Surface(ContainerSize::new(640.0, 480.0))]
    );
}

#[test]
fn empty_datasets_render_valid_axes() {
    let mut chart = mounted(ChartVariant::StackedColumn, Vec::new());
    chart.update(None).expect("update");
    let scene = chart.scene().expect("scene");

    let bottom = scene.axis(AxisPosition::Bottom).expect("bottom axis");
    assert!(bottom.ticks.is_empty());
    assert_eq!(bottom.scale.bandwidth(), Some(0.0));
    let left = scene.axis(AxisPosition::Left).expect("left axis");
    assert_eq!(left.domain.numeric_bounds(), Some((0.0, 0.0)));
    assert!(scene.root.find_all(ElementRole::ColumnGroup).is_empty());
}

#[test]
fn oversized_margins_clamp_body_to_zero() {
    let chart = Chart::create(
        canvas(100.0, 80.0),
        ChartSetup::new(MOUNT, ChartVariant::Bar),
        ChartConfigPatch::new()
            .with_datasets(monthly())
            .with_body(BodyPatch::margins(60.0, 60.0, 60.0, 60.0)),
    )
    .expect("chart");
    let body = chart.body().expect("body");
    assert_eq!((body.width, body.height), (0.0, 0.0));
    let scene = chart.scene().expect("scene");
    assert!(scene.validate().is_ok());
}

#[test]
fn invalid_patch_keeps_previous_render() {
    let mut chart = Chart::create(
        canvas(450.0, 300.0),
        ChartSetup::new(MOUNT, ChartVariant::Column),
        ChartConfigPatch::new().with_datasets(monthly()),
    )
    .expect("chart");
    let before = chart.scene().cloned();

    let duplicate = vec![
        Dataset::new("A", vec![Point::new("Jan", 1.0)]),
        Dataset::new("A", vec![Point::new("Feb", 2.0)]),
    ];
    let result = chart.update(Some(ChartConfigPatch::new().with_datasets(duplicate)));
    assert!(matches!(result, Err(ChartError::InvalidData(_))));

    let bad_padding = chart.update(Some(
        ChartConfigPatch::new().with_axis_bottom(AxisPatch::new().with_padding(1.5)),
    ));
    assert!(matches!(bad_padding, Err(ChartError::InvalidData(_))));

    assert_eq!(chart.scene().cloned(), before);
    assert_eq!(chart.config().datasets.len(), 2);
}

#[test]
fn destroy_removes_every_element() {
    let mut chart = Chart::create(
        canvas(450.0, 300.0),
        ChartSetup::new(MOUNT, ChartVariant::Line),
        ChartConfigPatch::new().with_datasets(monthly()),
    )
    .expect("chart");
    chart.destroy().expect("destroy");
    assert_eq!(chart.state(), ChartState::Destroyed);
    assert!(chart.scene().is_none());

    let canvas = chart.into_adapter();
    assert_eq!(canvas.live_count(), 0);
    assert_eq!(canvas.removed_count, 1);
}
