use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::core::Viewport;
use crate::error::{GridError, GridResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const FONT_FAMILY: &str = "Sans";

/// Primitive counts from the most recent draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Draws figure frames with Cairo, and text with Pango.
///
/// `Renderer::render` paints the owned offscreen surface (see `write_png`);
/// `draw_on` paints a caller's context, such as a GTK draw callback.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport, background: Color) -> GridResult<Self> {
        let invalid = || GridError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid());
        }
        let width = i32::try_from(viewport.width).map_err(|_| invalid())?;
        let height = i32::try_from(viewport.height).map_err(|_| invalid())?;
        background.validate()?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| cairo_error("failed to create surface", err))?;
        Ok(Self {
            surface,
            background,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Paints `frame` onto `context` after clearing it to the background.
    pub fn draw_on(&mut self, context: &Context, frame: &RenderFrame) -> GridResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| cairo_error("failed to clear background", err))?;

        self.last_stats = CairoRenderStats {
            rects_drawn: draw_rects(context, &frame.rects)?,
            lines_drawn: draw_lines(context, &frame.lines)?,
            texts_drawn: draw_texts(context, &frame.texts),
        };
        Ok(())
    }

    /// Encodes the offscreen surface as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> GridResult<()> {
        let mut file = File::create(path).map_err(|source| GridError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.surface.flush();
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| GridError::InvalidData(format!("failed to encode png: {err}")))?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GridResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| cairo_error("failed to create context", err))?;
        self.draw_on(&context, frame)
    }
}

// Axes boxes and histogram bars; bordered rects keep their path for the stroke.
fn draw_rects(context: &Context, rects: &[RectPrimitive]) -> GridResult<usize> {
    for rect in rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        set_source(context, rect.fill_color);
        if rect.border_width <= 0.0 {
            context
                .fill()
                .map_err(|err| cairo_error("failed to fill rect", err))?;
            continue;
        }
        context
            .fill_preserve()
            .map_err(|err| cairo_error("failed to fill rect", err))?;
        set_source(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| cairo_error("failed to stroke rect border", err))?;
    }
    Ok(rects.len())
}

fn draw_lines(context: &Context, lines: &[LinePrimitive]) -> GridResult<usize> {
    for line in lines {
        set_source(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| cairo_error("failed to stroke series segment", err))?;
    }
    Ok(lines.len())
}

// Titles and tick labels. `y` is the top of the layout box.
fn draw_texts(context: &Context, texts: &[TextPrimitive]) -> usize {
    for text in texts {
        let layout = pangocairo::functions::create_layout(context);
        let font = FontDescription::from_string(&format!("{FONT_FAMILY} {}", text.font_size_px));
        layout.set_font_description(Some(&font));
        layout.set_text(&text.text);

        let width = f64::from(layout.pixel_size().0);
        let left = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - width / 2.0,
            TextHAlign::Right => text.x - width,
        };
        set_source(context, text.color);
        context.move_to(left, text.y);
        pangocairo::functions::show_layout(context, &layout);
    }
    texts.len()
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn cairo_error(action: &str, err: cairo::Error) -> GridError {
    GridError::InvalidData(format!("cairo: {action}: {err}"))
}
