use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::render::Color;

/// Style contract for figure frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub background_color: Color,
    pub axes_fill_color: Color,
    pub axes_border_color: Color,
    pub axes_border_width: f64,
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub histogram_bar_color: Color,
    pub text_color: Color,
    pub title_font_size_px: f64,
    pub tick_font_size_px: f64,
    /// Gap kept free around every cell.
    pub cell_padding_px: f64,
    /// Room reserved left of the axes for y tick labels.
    pub y_label_gutter_px: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            axes_fill_color: Color::WHITE,
            axes_border_color: Color::BLACK,
            axes_border_width: 1.0,
            // Tableau blue.
            series_line_color: Color::rgb(0.122, 0.467, 0.706),
            series_line_width: 1.5,
            histogram_bar_color: Color::rgb(0.122, 0.467, 0.706),
            text_color: Color::BLACK,
            title_font_size_px: 12.0,
            tick_font_size_px: 9.0,
            cell_padding_px: 12.0,
            y_label_gutter_px: 48.0,
        }
    }
}

impl GridStyle {
    pub fn validate(&self) -> GridResult<()> {
        for color in [
            self.background_color,
            self.axes_fill_color,
            self.axes_border_color,
            self.series_line_color,
            self.histogram_bar_color,
            self.text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series_line_width", self.series_line_width),
            ("title_font_size_px", self.title_font_size_px),
            ("tick_font_size_px", self.tick_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("axes_border_width", self.axes_border_width),
            ("cell_padding_px", self.cell_padding_px),
            ("y_label_gutter_px", self.y_label_gutter_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }
}
