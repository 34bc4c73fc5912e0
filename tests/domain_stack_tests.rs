use chartkit::core::{
    AxisBound, AxisConfig, AxisKind, AxisSide, Category, Dataset, Domain, DomainSource,
    GridlineStyle, Point, resolve_domain, resolve_stacked_domain, stack, stack_categories,
};

fn linear() -> AxisConfig {
    AxisConfig::new(AxisKind::Linear, GridlineStyle::visible())
}

fn monthly() -> Vec<Dataset> {
    vec![
        Dataset::new("A", vec![Point::new("Jan", 10.0), Point::new("Feb", 20.0)])
            .with_color("#1f77b4"),
        Dataset::new("B", vec![Point::new("Jan", 5.0)])
            .with_color("#ff7f0e")
            .with_order(1.0),
    ]
}

fn spans(category: &str, datasets: &[Dataset]) -> Vec<(String, f64, f64)> {
    stack(&Category::from(category), datasets)
        .intervals
        .iter()
        .map(|interval| (interval.series_key.clone(), interval.y0, interval.y1))
        .collect()
}

#[test]
fn stacks_follow_order_with_missing_values_as_zero() {
    let datasets = monthly();
    assert_eq!(
        spans("Jan", &datasets),
        vec![("A".to_owned(), 0.0, 10.0), ("B".to_owned(), 10.0, 15.0)]
    );
    assert_eq!(
        spans("Feb", &datasets),
        vec![("A".to_owned(), 0.0, 20.0), ("B".to_owned(), 20.0, 20.0)]
    );
}

#[test]
fn lower_order_stacks_first() {
    let mut datasets = monthly();
    datasets[0].order = 2.0;
    assert_eq!(
        spans("Jan", &datasets),
        vec![("B".to_owned(), 0.0, 5.0), ("A".to_owned(), 5.0, 15.0)]
    );
}

#[test]
fn stacked_domain_covers_every_cumulative_value() {
    let datasets = vec![
        Dataset::new("gain", vec![Point::new("Q1", 8.0), Point::new("Q2", 3.0)]),
        Dataset::new("loss", vec![Point::new("Q1", -12.0), Point::new("Q2", -1.0)]),
    ];
    let categories = [Category::from("Q1"), Category::from("Q2")];
    let stacks = stack_categories(&categories, &datasets);
    let domain = resolve_stacked_domain(&linear(), &stacks);
    assert_eq!(domain, Domain::Numeric { min: -4.0, max: 8.0 });

    let mut fixed = linear();
    fixed.min = AxisBound::Fixed(-20.0);
    assert_eq!(
        resolve_stacked_domain(&fixed, &stacks),
        Domain::Numeric {
            min: -20.0,
            max: 8.0
        }
    );
}

#[test]
fn dual_axis_domains_are_partitioned() {
    let datasets = vec![
        Dataset::new("temp", vec![Point::new("Mon", 12.0), Point::new("Tue", 18.0)]),
        Dataset::new("rain", vec![Point::new("Mon", 140.0), Point::new("Tue", 60.0)])
            .on_axis(AxisSide::Right),
    ];
    let left = resolve_domain(
        &linear(),
        datasets.iter().filter(|dataset| dataset.axis == AxisSide::Left),
        DomainSource::Values,
    );
    let right = resolve_domain(
        &linear(),
        datasets.iter().filter(|dataset| dataset.axis == AxisSide::Right),
        DomainSource::Values,
    );
    assert_eq!(left, Domain::Numeric { min: 12.0, max: 18.0 });
    assert_eq!(right, Domain::Numeric { min: 60.0, max: 140.0 });
}

#[test]
fn numeric_and_text_categories_stay_distinct() {
    let datasets = vec![Dataset::new(
        "A",
        vec![Point::new(1.0, 3.0), Point::new("1", 4.0), Point::new(1.0, 9.0)],
    )];
    let domain = resolve_domain(&linear(), &datasets, DomainSource::Categories);
    assert_eq!(
        domain,
        Domain::Categorical(vec![Category::from(1.0), Category::from("1")])
    );
}
