//! overtime-grid: plots simulation over-time statistics as a grid of line
//! charts, one row per species and one column per subkey.
//!
//! The pipeline is `Dataset` -> `GridPlotter::plot` -> `Figure` -> `show`.
//! Layout produces a backend-agnostic `RenderFrame`; drawing backends live
//! behind the `cairo-backend` and `desktop` features.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Figure, GridPlotter, PlotterConfig, Subplot, plot_overtime, show};
pub use data::{DEFAULT_SPECIES_KEYS, Dataset};
pub use error::{GridError, GridResult};
