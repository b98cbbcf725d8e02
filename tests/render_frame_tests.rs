use overtime_grid::GridError;
use overtime_grid::api::{
    Figure, GridStyle, PlotterConfig, SeriesKind, build_render_frame, plot_overtime,
    render_figure,
};
use overtime_grid::core::Viewport;
use overtime_grid::data::Dataset;
use overtime_grid::render::{NullRenderer, TextHAlign};

fn two_species_dataset() -> Dataset {
    Dataset::from_json_str(
        r#"{"overtime": {"animal": {"p1": [1, 2, 3]}, "plant": {"p1": [4, 5, 6]}}}"#,
    )
    .expect("dataset")
}

#[test]
fn frame_contains_title_ticks_and_segments_per_populated_subplot() {
    let figure = plot_overtime(&two_species_dataset()).expect("plot");

    let frame = build_render_frame(&figure, Viewport::new(800, 600), &GridStyle::default())
        .expect("frame");
    frame.validate().expect("valid frame");

    // background + one axes box per cell
    assert_eq!(frame.rects.len(), 1 + 2);
    // three points -> two segments, per subplot
    assert_eq!(frame.lines.len(), 4);
    // title + four tick labels, per subplot
    assert_eq!(frame.texts.len(), 10);

    let titles: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(titles, vec!["animal, p1", "plant, p1"]);
}

#[test]
fn x_axis_starts_at_zero_in_tick_labels() {
    let figure = plot_overtime(&two_species_dataset()).expect("plot");

    let frame = build_render_frame(&figure, Viewport::new(800, 600), &GridStyle::default())
        .expect("frame");

    let left_ticks: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Left)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(left_ticks, vec!["0", "0"]);
}

#[test]
fn line_starts_on_left_edge_of_axes() {
    let figure = plot_overtime(&two_species_dataset()).expect("plot");
    let style = GridStyle::default();

    let frame = build_render_frame(&figure, Viewport::new(800, 600), &style).expect("frame");

    let axes = frame.rects[1];
    let first_segment = frame.lines[0];
    approx::assert_abs_diff_eq!(first_segment.x1, axes.x, epsilon = 1e-9);
    assert!(first_segment.x2 > first_segment.x1);
    // Rising series: the second sample sits higher on screen.
    assert!(first_segment.y2 < first_segment.y1);
}

#[test]
fn unpopulated_cells_are_drawn_as_empty_axes() {
    let figure = Figure::new(2, 3);

    let frame = build_render_frame(&figure, Viewport::new(900, 600), &GridStyle::default())
        .expect("frame");

    assert_eq!(frame.rects.len(), 1 + 6);
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
}

#[test]
fn grid_without_rows_only_paints_background() {
    let figure = Figure::new(0, 1);

    let frame = build_render_frame(&figure, Viewport::new(320, 240), &GridStyle::default())
        .expect("frame");

    assert_eq!(frame.rects.len(), 1);
}

#[test]
fn single_sample_series_draws_no_segments() {
    let mut figure = Figure::new(1, 1);
    let subplot = figure.subplot_mut(0, 0).expect("cell");
    subplot.plot(&[42.0]);
    subplot.set_title("animal, p1");
    subplot.set_x_min(0.0);

    let frame = build_render_frame(&figure, Viewport::new(400, 300), &GridStyle::default())
        .expect("frame");

    assert!(frame.lines.is_empty());
    assert_eq!(frame.texts.len(), 5);
}

#[test]
fn histogram_subplot_emits_one_bar_per_non_empty_bin() {
    let dataset = Dataset::from_json_str(r#"{"overtime": {"animal": {"p1": [1, 1, 2, 4]}}}"#)
        .expect("dataset");
    let plotter = overtime_grid::GridPlotter::new(
        PlotterConfig::new().with_series_kind(SeriesKind::Histogram),
    );
    let figure = plotter.plot(&dataset, &["animal"]).expect("plot");

    let frame = build_render_frame(&figure, Viewport::new(400, 300), &GridStyle::default())
        .expect("frame");
    frame.validate().expect("valid frame");

    // bins [1,2) [2,3) [3,4]: counts 2, 1, 1
    assert_eq!(frame.rects.len(), 1 + 1 + 3);
    assert!(frame.lines.is_empty());
}

#[test]
fn zero_viewport_is_rejected() {
    let figure = Figure::new(1, 1);

    let err = build_render_frame(&figure, Viewport::new(0, 300), &GridStyle::default())
        .expect_err("must fail");

    assert!(matches!(
        err,
        GridError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let figure = plot_overtime(&two_species_dataset()).expect("plot");
    let mut renderer = NullRenderer::default();

    let frame = render_figure(
        &mut renderer,
        &figure,
        Viewport::new(1024, 768),
        &GridStyle::default(),
    )
    .expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, frame.lines.len());
    assert_eq!(renderer.last_rect_count, 3);
    assert_eq!(renderer.last_text_count, 10);
}
