//! Grid plotting API: configuration, figure model, layout and display.

mod figure;
mod figure_frame_builder;
mod grid_plotter;
mod plotter_config;
mod render_style;
mod show;

pub use figure::{Figure, Subplot};
pub use figure_frame_builder::{build_render_frame, format_tick_label, render_figure};
pub use grid_plotter::{GridPlotter, plot_overtime};
pub use plotter_config::{ColumnPolicy, DisplayTarget, PlotterConfig, SeriesKind};
pub use render_style::GridStyle;
pub use show::{show, write_png};
