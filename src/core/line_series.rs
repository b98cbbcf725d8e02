use crate::core::{DataPoint, LinearScale, PixelRange};
use crate::error::GridResult;
use serde::{Deserialize, Serialize};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects series points into adjacent line segments.
///
/// Deterministic and side-effect free so the frame builder and tests consume
/// the same geometry.
pub fn project_line_segments(
    points: &[DataPoint],
    x_scale: LinearScale,
    x_range: PixelRange,
    y_scale: LinearScale,
    y_range: PixelRange,
) -> GridResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        let x = x_scale.domain_to_pixel(point.x, x_range)?;
        let y = y_scale.domain_to_pixel(point.y, y_range)?;
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}
