use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Largest number of unit-width bins one series may produce.
pub const MAX_HISTOGRAM_BINS: usize = 10_000;

/// One histogram bucket covering `[start, end)`; the last bucket is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Buckets `values` into unit-width bins with integer edges running from
/// `trunc(min)` to `trunc(max)`.
///
/// Values that fall outside the edge range are not counted. When both
/// truncated bounds coincide a single bin `[edge, edge + 1]` is produced.
/// Ranges needing more than `MAX_HISTOGRAM_BINS` bins are rejected.
pub fn unit_width_bins(values: &[f64]) -> GridResult<Vec<HistogramBin>> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some(first) = finite.first().copied() else {
        return Ok(Vec::new());
    };

    let (min, max) = finite
        .iter()
        .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let low_edge = min.trunc();
    let mut high_edge = max.trunc();
    if high_edge <= low_edge {
        high_edge = low_edge + 1.0;
    }

    let edge_span = high_edge - low_edge;
    if !edge_span.is_finite() || edge_span > MAX_HISTOGRAM_BINS as f64 {
        return Err(GridError::InvalidData(format!(
            "histogram range [{low_edge}, {high_edge}] needs more than {MAX_HISTOGRAM_BINS} unit bins"
        )));
    }

    let bin_count = edge_span as usize;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|offset| {
            let start = low_edge + offset as f64;
            HistogramBin {
                start,
                end: start + 1.0,
                count: 0,
            }
        })
        .collect();

    for value in finite {
        if value < low_edge || value > high_edge {
            continue;
        }
        let index = ((value - low_edge).floor() as usize).min(bin_count - 1);
        bins[index].count += 1;
    }

    Ok(bins)
}
