//! GTK4 window that draws a figure through the Cairo backend.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::{Figure, PlotterConfig, build_render_frame};
use crate::core::Viewport;
use crate::error::GridResult;
use crate::render::CairoRenderer;

pub const APPLICATION_ID: &str = "rs.overtime.grid";

/// Opens a window showing `figure` and runs the GTK main loop until it
/// closes. The figure is laid out again on every resize.
pub fn show_window(figure: &Figure, config: &PlotterConfig) -> GridResult<()> {
    // Draws go to the window's context; the renderer's own surface stays 1x1.
    let renderer = CairoRenderer::new(Viewport::new(1, 1), config.style.background_color)?;
    let renderer = Rc::new(RefCell::new(renderer));
    let figure = Rc::new(figure.clone());
    let config = Rc::new(config.clone());

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();

    app.connect_activate(move |app| {
        let area = build_drawing_area(
            Rc::clone(&figure),
            Rc::clone(&config),
            Rc::clone(&renderer),
        );

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(config.window_title.as_str())
            .default_width(to_gtk_size(config.viewport.width))
            .default_height(to_gtk_size(config.viewport.height))
            .build();
        window.set_child(Some(&area));
        window.present();
    });

    debug!("entering gtk main loop");
    // Our own CLI arguments must not reach GTK's option parser.
    let _ = app.run_with_args::<&str>(&[]);
    Ok(())
}

fn build_drawing_area(
    figure: Rc<Figure>,
    config: Rc<PlotterConfig>,
    renderer: Rc<RefCell<CairoRenderer>>,
) -> gtk::DrawingArea {
    let area = gtk::DrawingArea::builder()
        .content_width(to_gtk_size(config.viewport.width))
        .content_height(to_gtk_size(config.viewport.height))
        .hexpand(true)
        .vexpand(true)
        .build();

    area.set_draw_func(move |_area, context, width, height| {
        let viewport = Viewport::new(from_gtk_size(width), from_gtk_size(height));
        let frame = match build_render_frame(&figure, viewport, &config.style) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(%err, "failed to lay out figure");
                return;
            }
        };
        if let Err(err) = renderer.borrow_mut().draw_on(context, &frame) {
            warn!(%err, "failed to draw figure");
        }
    });

    area
}

fn to_gtk_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn from_gtk_size(value: i32) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(1)
}
