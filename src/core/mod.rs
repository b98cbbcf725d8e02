pub mod axis;
pub mod histogram;
pub mod line_series;
pub mod scale;
pub mod types;

pub use axis::{AUTOSCALE_MARGIN_RATIO, AxisLimits};
pub use histogram::{HistogramBin, MAX_HISTOGRAM_BINS, unit_width_bins};
pub use line_series::{LineSegment, project_line_segments};
pub use scale::{LinearScale, PixelRange};
pub use types::{DataPoint, PlotRect, Viewport};
