use std::path::Path;

use tracing::debug;

use crate::error::GridResult;
use crate::render::NullRenderer;

use super::{DisplayTarget, Figure, PlotterConfig, render_figure};

/// Displays `figure` on the target named by `config.display`.
///
/// `Window` blocks until the window is closed; the other targets return once
/// the frame is drawn.
pub fn show(figure: &Figure, config: &PlotterConfig) -> GridResult<()> {
    config.validate()?;
    debug!(
        rows = figure.rows(),
        cols = figure.cols(),
        populated = figure.populated_count(),
        target = ?config.display,
        "showing figure"
    );

    match &config.display {
        DisplayTarget::Headless => {
            let mut renderer = NullRenderer::default();
            render_figure(&mut renderer, figure, config.viewport, &config.style)?;
            debug!(
                lines = renderer.last_line_count,
                rects = renderer.last_rect_count,
                texts = renderer.last_text_count,
                "validated headless frame"
            );
            Ok(())
        }
        DisplayTarget::Png(path) => write_png(figure, config, path),
        DisplayTarget::Window => show_window(figure, config),
    }
}

/// Renders `figure` offscreen and writes it as PNG.
#[cfg(feature = "cairo-backend")]
pub fn write_png(figure: &Figure, config: &PlotterConfig, path: &Path) -> GridResult<()> {
    use crate::render::CairoRenderer;

    let mut renderer = CairoRenderer::new(config.viewport, config.style.background_color)?;
    render_figure(&mut renderer, figure, config.viewport, &config.style)?;
    renderer.write_png(path)
}

#[cfg(not(feature = "cairo-backend"))]
pub fn write_png(_figure: &Figure, _config: &PlotterConfig, _path: &Path) -> GridResult<()> {
    Err(crate::error::GridError::UnsupportedBackend("cairo"))
}

#[cfg(feature = "gtk4-adapter")]
fn show_window(figure: &Figure, config: &PlotterConfig) -> GridResult<()> {
    crate::platform_gtk::show_window(figure, config)
}

#[cfg(not(feature = "gtk4-adapter"))]
fn show_window(_figure: &Figure, _config: &PlotterConfig) -> GridResult<()> {
    Err(crate::error::GridError::UnsupportedBackend("gtk4"))
}
