use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GridError, GridResult};

use super::GridStyle;

/// How many columns the subplot grid gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// One column per subkey of the widest retained category (at least one).
    #[default]
    Dynamic,
    /// Exactly this many columns; extra subkeys fail the run.
    Fixed(usize),
}

impl ColumnPolicy {
    /// Column count used by the legacy two-statistics layout.
    pub const LEGACY: Self = Self::Fixed(2);

    #[must_use]
    pub fn resolve(self, widest_category: usize) -> usize {
        match self {
            Self::Dynamic => widest_category.max(1),
            Self::Fixed(columns) => columns,
        }
    }
}

/// How each series is drawn inside its subplot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Connected line against positional index.
    #[default]
    Line,
    /// Unit-width bin counts of the series values.
    Histogram,
}

/// Where `show` sends the finished figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTarget {
    /// Interactive window; blocks until closed.
    Window,
    /// Offscreen render written as PNG.
    Png(PathBuf),
    /// Validate the frame and return immediately.
    Headless,
}

impl Default for DisplayTarget {
    fn default() -> Self {
        if cfg!(feature = "gtk4-adapter") {
            Self::Window
        } else {
            Self::Headless
        }
    }
}

/// Plotter and display configuration.
///
/// Serializable so runs can be reproduced from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub column_policy: ColumnPolicy,
    #[serde(default)]
    pub series_kind: SeriesKind,
    /// Lower x bound forced on every populated subplot.
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    #[serde(default)]
    pub display: DisplayTarget,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub style: GridStyle,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            column_policy: ColumnPolicy::default(),
            series_kind: SeriesKind::default(),
            x_min: default_x_min(),
            display: DisplayTarget::default(),
            window_title: default_window_title(),
            style: GridStyle::default(),
        }
    }
}

impl PlotterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }

    #[must_use]
    pub fn with_series_kind(mut self, kind: SeriesKind) -> Self {
        self.series_kind = kind;
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayTarget) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.viewport.is_valid() {
            return Err(GridError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.x_min.is_finite() {
            return Err(GridError::InvalidData("x_min must be finite".to_owned()));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&input)
    }

    pub fn to_json_pretty(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_x_min() -> f64 {
    0.0
}

fn default_window_title() -> String {
    "overtime".to_owned()
}
