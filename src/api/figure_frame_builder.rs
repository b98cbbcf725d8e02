use crate::core::{AxisLimits, LinearScale, PixelRange, PlotRect, Viewport, project_line_segments};
use crate::error::{GridError, GridResult};
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{Figure, GridStyle, SeriesKind, Subplot};

const TITLE_BAND_RATIO: f64 = 1.8;
const TICK_BAND_RATIO: f64 = 2.0;
const TICK_LABEL_GAP_PX: f64 = 4.0;

/// Lays out every cell of `figure` over `viewport`.
///
/// Each cell gets an axes box; populated cells add a centred title, tick
/// labels at the resolved axis bounds and the series geometry.
pub fn build_render_frame(
    figure: &Figure,
    viewport: Viewport,
    style: &GridStyle,
) -> GridResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(GridError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    style.validate()?;

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        width,
        height,
        style.background_color,
    ));

    if figure.rows() == 0 || figure.cols() == 0 {
        return Ok(frame);
    }

    let cell_width = width / figure.cols() as f64;
    let cell_height = height / figure.rows() as f64;
    for (row, col, subplot) in figure.cells() {
        let cell = PlotRect::new(
            col as f64 * cell_width,
            row as f64 * cell_height,
            cell_width,
            cell_height,
        )
        .inset(
            style.cell_padding_px,
            style.cell_padding_px,
            style.cell_padding_px,
            style.cell_padding_px,
        );
        let axes = cell.inset(
            style.y_label_gutter_px,
            style.title_font_size_px * TITLE_BAND_RATIO,
            0.0,
            style.tick_font_size_px * TICK_BAND_RATIO,
        );
        if !axes.is_drawable() {
            continue;
        }

        frame.rects.push(
            RectPrimitive::new(axes.x, axes.y, axes.width, axes.height, style.axes_fill_color)
                .with_border(style.axes_border_width, style.axes_border_color),
        );
        if subplot.is_populated() {
            append_subplot(&mut frame, subplot, cell, axes, style)?;
        }
    }

    Ok(frame)
}

/// Builds the frame for `figure` and hands it to `renderer`.
pub fn render_figure<R: Renderer>(
    renderer: &mut R,
    figure: &Figure,
    viewport: Viewport,
    style: &GridStyle,
) -> GridResult<RenderFrame> {
    let frame = build_render_frame(figure, viewport, style)?;
    renderer.render(&frame)?;
    Ok(frame)
}

/// Tick label text: at most two decimals, trailing zeros dropped.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Values near the f64 limits overflow when scaled; print those unrounded.
    let text = if rounded.is_finite() {
        format!("{rounded:.2}")
    } else {
        format!("{value:.2}")
    };
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn append_subplot(
    frame: &mut RenderFrame,
    subplot: &Subplot,
    cell: PlotRect,
    axes: PlotRect,
    style: &GridStyle,
) -> GridResult<()> {
    if let Some(title) = subplot.title().filter(|title| !title.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title,
            axes.x + axes.width / 2.0,
            cell.y,
            style.title_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    let x_limits = subplot.x_limits()?;
    let y_limits = subplot.y_limits()?;
    append_tick_labels(frame, x_limits, y_limits, axes, style);

    let x_scale = LinearScale::new(x_limits.min, x_limits.max)?;
    let y_scale = LinearScale::new(y_limits.min, y_limits.max)?;
    let x_range = PixelRange::new(axes.x, axes.right());
    let y_range = PixelRange::new(axes.bottom(), axes.y);

    match subplot.kind() {
        SeriesKind::Line => {
            let segments =
                project_line_segments(&subplot.points(), x_scale, x_range, y_scale, y_range)?;
            frame.lines.extend(segments.into_iter().map(|segment| {
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.series_line_width,
                    style.series_line_color,
                )
            }));
        }
        SeriesKind::Histogram => {
            let baseline = y_scale.domain_to_pixel(y_limits.min, y_range)?;
            for bin in subplot.bins()? {
                let start = bin.start.max(x_limits.min);
                let end = bin.end.min(x_limits.max);
                if bin.count == 0 || end <= start {
                    continue;
                }
                let left = x_scale.domain_to_pixel(start, x_range)?;
                let right = x_scale.domain_to_pixel(end, x_range)?;
                let top = y_scale.domain_to_pixel(bin.count as f64, y_range)?;
                frame.rects.push(RectPrimitive::new(
                    left,
                    top,
                    right - left,
                    baseline - top,
                    style.histogram_bar_color,
                ));
            }
        }
    }

    Ok(())
}

fn append_tick_labels(
    frame: &mut RenderFrame,
    x_limits: AxisLimits,
    y_limits: AxisLimits,
    axes: PlotRect,
    style: &GridStyle,
) {
    let font = style.tick_font_size_px;
    let below_axes = axes.bottom() + TICK_LABEL_GAP_PX;
    let left_of_axes = axes.x - TICK_LABEL_GAP_PX;

    for (text, x, y, h_align) in [
        (format_tick_label(x_limits.min), axes.x, below_axes, TextHAlign::Left),
        (format_tick_label(x_limits.max), axes.right(), below_axes, TextHAlign::Right),
        (format_tick_label(y_limits.min), left_of_axes, axes.bottom() - font, TextHAlign::Right),
        (format_tick_label(y_limits.max), left_of_axes, axes.y, TextHAlign::Right),
    ] {
        frame
            .texts
            .push(TextPrimitive::new(text, x, y, font, style.text_color, h_align));
    }
}

#[cfg(test)]
mod tests {
    use super::format_tick_label;

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick_label(2.1), "2.1");
        assert_eq!(format_tick_label(0.0), "0");
        assert_eq!(format_tick_label(-0.001), "0");
        assert_eq!(format_tick_label(12.346), "12.35");
        assert_eq!(format_tick_label(-3.0), "-3");
    }

    #[test]
    fn tick_label_near_f64_limit_is_not_infinite() {
        let label = format_tick_label(-1.1e308);
        assert!(label.starts_with("-11"));
        assert!(!label.contains("inf"));
    }
}
