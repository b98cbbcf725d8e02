use overtime_grid::api::{ColumnPolicy, GridPlotter, PlotterConfig, SeriesKind};
use overtime_grid::data::{DEFAULT_SPECIES_KEYS, Dataset};
use overtime_grid::{GridError, plot_overtime};

fn dataset(json: &str) -> Dataset {
    Dataset::from_json_str(json).expect("valid dataset json")
}

#[test]
fn one_subkey_per_species_fills_first_column() {
    let dataset = dataset(
        r#"{"overtime": {"animal": {"p1": [1, 2, 3]}, "plant": {"p1": [4, 5, 6]}}}"#,
    );

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!(figure.rows(), 2);
    assert_eq!(figure.populated_count(), 2);

    let animal = figure.subplot(0, 0).expect("cell");
    assert_eq!(animal.title(), Some("animal, p1"));
    assert_eq!(animal.series(), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(animal.requested_x_min(), Some(0.0));
    assert_eq!(animal.x_limits().expect("x limits").min, 0.0);

    let plant = figure.subplot(1, 0).expect("cell");
    assert_eq!(plant.title(), Some("plant, p1"));
    assert_eq!(plant.series(), Some(&[4.0, 5.0, 6.0][..]));
    assert_eq!(plant.x_limits().expect("x limits").min, 0.0);
}

#[test]
fn categories_outside_species_keys_are_ignored() {
    let dataset = dataset(
        r#"{"overtime": {
            "fungus": {"p0": [9, 9], "p1": [9]},
            "animal": {"p1": [1], "p2": [2]},
            "population": [3, 4, 5]
        }}"#,
    );

    let figure = plot_overtime(&dataset).expect("plot");

    let positions: Vec<(usize, usize)> =
        figure.populated().map(|(row, col, _)| (row, col)).collect();
    assert_eq!(positions, vec![(0, 0), (0, 1)]);
    assert_eq!(figure.titles(), vec!["animal, p1", "animal, p2"]);
}

#[test]
fn species_key_missing_from_overtime_leaves_row_empty() {
    let dataset = dataset(r#"{"overtime": {"plant": {"p1": [1, 2]}}}"#);

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!(figure.rows(), 2);
    assert_eq!(figure.populated_count(), 1);
    assert!(!figure.subplot(0, 0).expect("cell").is_populated());
    assert_eq!(figure.subplot(1, 0).expect("cell").title(), Some("plant, p1"));
}

#[test]
fn empty_category_yields_no_subplots_for_its_row() {
    let dataset = dataset(r#"{"overtime": {"animal": {}, "plant": {"p1": [1]}}}"#);

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!(figure.populated_count(), 1);
    assert!(figure.populated().all(|(row, _, _)| row == 1));
}

#[test]
fn missing_overtime_fails_before_any_subplot() {
    let dataset = dataset(r#"{"current": {"population": 3}}"#);

    let err = plot_overtime(&dataset).expect_err("must fail");

    assert!(matches!(err, GridError::MissingKey(ref key) if key == "overtime"));
}

#[test]
fn plotting_twice_yields_identical_figures() {
    let dataset = dataset(
        r#"{"overtime": {"plant": {"b": [3, 1], "a": [2]}, "animal": {"x": [1, 2, 3]}}}"#,
    );
    let plotter = GridPlotter::default();

    let first = plotter.plot_default_species(&dataset).expect("first");
    let second = plotter.plot_default_species(&dataset).expect("second");

    assert_eq!(first, second);
    assert_eq!(first.titles(), vec!["animal, x", "plant, b", "plant, a"]);
}

#[test]
fn row_follows_species_key_position_not_document_order() {
    let dataset = dataset(r#"{"overtime": {"plant": {"p": [1]}, "animal": {"p": [2]}}}"#);

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!(figure.subplot(0, 0).expect("cell").title(), Some("animal, p"));
    assert_eq!(figure.subplot(1, 0).expect("cell").title(), Some("plant, p"));
}

#[test]
fn legacy_fixed_grid_rejects_third_subkey() {
    let dataset = dataset(r#"{"overtime": {"animal": {"a": [1], "b": [2], "c": [3]}}}"#);
    let plotter = GridPlotter::new(PlotterConfig::new().with_column_policy(ColumnPolicy::LEGACY));

    let err = plotter
        .plot_default_species(&dataset)
        .expect_err("third column must not fit");

    assert!(matches!(
        err,
        GridError::SubplotOutOfBounds {
            row: 0,
            col: 2,
            rows: 2,
            cols: 2
        }
    ));
}

#[test]
fn legacy_fixed_grid_keeps_two_columns_for_single_subkey() {
    let dataset = dataset(r#"{"overtime": {"animal": {"a": [1]}}}"#);
    let plotter = GridPlotter::new(PlotterConfig::new().with_column_policy(ColumnPolicy::LEGACY));

    let figure = plotter.plot_default_species(&dataset).expect("plot");

    assert_eq!(figure.cols(), 2);
    assert_eq!(figure.populated_count(), 1);
}

#[test]
fn dynamic_grid_grows_to_widest_category() {
    let dataset = dataset(
        r#"{"overtime": {"animal": {"a": [1], "b": [2], "c": [3]}, "plant": {"a": [1]}}}"#,
    );

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!(figure.cols(), 3);
    assert_eq!(figure.subplot(0, 2).expect("cell").title(), Some("animal, c"));
}

#[test]
fn custom_species_keys_define_rows() {
    let dataset = dataset(r#"{"overtime": {"animal": {"a": [1]}, "plant": {"a": [2]}}}"#);

    let figure = GridPlotter::default()
        .plot(&dataset, &["plant"])
        .expect("plot");

    assert_eq!(figure.rows(), 1);
    assert_eq!(figure.titles(), vec!["plant, a"]);
}

#[test]
fn malformed_retained_category_fails_run() {
    let dataset = dataset(r#"{"overtime": {"animal": [1, 2, 3]}}"#);

    let err = plot_overtime(&dataset).expect_err("must fail");

    assert!(matches!(err, GridError::InvalidData(_)));
}

#[test]
fn histogram_kind_is_applied_to_every_subplot() {
    let dataset = dataset(r#"{"overtime": {"animal": {"a": [1, 2]}, "plant": {"a": [3]}}}"#);
    let plotter =
        GridPlotter::new(PlotterConfig::new().with_series_kind(SeriesKind::Histogram));

    let figure = plotter.plot(&dataset, &DEFAULT_SPECIES_KEYS).expect("plot");

    assert!(
        figure
            .populated()
            .all(|(_, _, subplot)| subplot.kind() == SeriesKind::Histogram)
    );
}

#[test]
fn producer_dump_fixture_plots_two_by_two() {
    let dataset = Dataset::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/overtime_stats.json"
    ))
    .expect("fixture");

    let figure = plot_overtime(&dataset).expect("plot");

    assert_eq!((figure.rows(), figure.cols()), (2, 2));
    assert_eq!(
        figure.titles(),
        vec![
            "animal, population",
            "animal, highest_generation",
            "plant, population",
            "plant, highest_generation",
        ]
    );
}

#[test]
fn missing_input_file_reports_path() {
    let err = Dataset::load("definitely/not/here/test.json").expect_err("must fail");

    assert!(matches!(err, GridError::Io { ref path, .. } if path.ends_with("test.json")));
}
