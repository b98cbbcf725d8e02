use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN_RATIO: f64 = 0.05;

/// Half-width used to widen a degenerate (single-valued) data range.
const DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Resolved lower/upper bounds of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> GridResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GridError::InvalidData(format!(
                "axis limits must be finite with min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// Data bounds padded by `AUTOSCALE_MARGIN_RATIO` on both sides.
    ///
    /// Non-finite values are ignored. No finite values yields `[0, 1]`.
    #[must_use]
    pub fn autoscale<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        if !min.is_finite() || !max.is_finite() {
            return Self::default();
        }
        if min == max {
            return Self {
                min: min - DEGENERATE_HALF_SPAN,
                max: max + DEGENERATE_HALF_SPAN,
            };
        }

        // Scale before subtracting: `max - min` overflows near the f64 limits.
        let margin = max * AUTOSCALE_MARGIN_RATIO - min * AUTOSCALE_MARGIN_RATIO;
        Self {
            min: (min - margin).max(f64::MIN),
            max: (max + margin).min(f64::MAX),
        }
    }

    /// Pins the lower bound to an explicit request.
    ///
    /// When the request reaches the upper bound, the upper bound is moved so
    /// the axis keeps a unit span.
    #[must_use]
    pub fn with_lower_bound(self, min: Option<f64>) -> Self {
        let Some(min) = min.filter(|v| v.is_finite()) else {
            return self;
        };
        if min >= self.max {
            return Self { min, max: min + 1.0 };
        }
        Self { min, max: self.max }
    }
}
