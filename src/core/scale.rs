use crate::error::{GridError, GridResult};

/// Pixel interval a scale maps onto. `end < start` is allowed and flips the
/// axis (used for y, where pixels grow downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> GridResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(GridError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64, range: PixelRange) -> GridResult<f64> {
        if !value.is_finite() {
            return Err(GridError::InvalidData("value must be finite".to_owned()));
        }
        validate_range(range)?;

        let normalized = (value * 0.5 - self.domain_start * 0.5) / self.half_span();
        Ok(range.start + normalized * range.span())
    }

    pub fn pixel_to_domain(self, pixel: f64, range: PixelRange) -> GridResult<f64> {
        if !pixel.is_finite() {
            return Err(GridError::InvalidData("pixel must be finite".to_owned()));
        }
        validate_range(range)?;

        let normalized = (pixel - range.start) / range.span();
        Ok(self.domain_start * (1.0 - normalized) + self.domain_end * normalized)
    }

    // Half of the domain width, finite even when the full width is not.
    fn half_span(self) -> f64 {
        self.domain_end * 0.5 - self.domain_start * 0.5
    }
}

fn validate_range(range: PixelRange) -> GridResult<()> {
    if !range.start.is_finite() || !range.end.is_finite() || range.start == range.end {
        return Err(GridError::InvalidData(
            "pixel range must be finite and non-empty".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, PixelRange};

    #[test]
    fn inverted_range_maps_domain_start_to_bottom() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        let range = PixelRange::new(200.0, 100.0);

        assert_eq!(scale.domain_to_pixel(0.0, range).expect("px"), 200.0);
        assert_eq!(scale.domain_to_pixel(10.0, range).expect("px"), 100.0);
        assert_eq!(scale.domain_to_pixel(5.0, range).expect("px"), 150.0);
    }

    #[test]
    fn pixel_round_trip_recovers_domain_value() {
        let scale = LinearScale::new(-3.0, 7.0).expect("scale");
        let range = PixelRange::new(40.0, 440.0);
        let px = scale.domain_to_pixel(2.5, range).expect("px");
        let value = scale.pixel_to_domain(px, range).expect("domain");
        assert!((value - 2.5).abs() < 1e-12);
    }

    #[test]
    fn domain_wider_than_f64_max_maps_to_finite_pixels() {
        let scale = LinearScale::new(-1.1e308, 1.1e308).expect("scale");
        let range = PixelRange::new(0.0, 100.0);

        assert_eq!(scale.domain_to_pixel(-1.1e308, range).expect("px"), 0.0);
        assert_eq!(scale.domain_to_pixel(0.0, range).expect("px"), 50.0);
        assert_eq!(scale.domain_to_pixel(1.1e308, range).expect("px"), 100.0);
        assert_eq!(scale.pixel_to_domain(100.0, range).expect("domain"), 1.1e308);
    }

    #[test]
    fn empty_pixel_range_is_rejected() {
        let scale = LinearScale::new(0.0, 1.0).expect("scale");
        assert!(scale.domain_to_pixel(0.5, PixelRange::new(10.0, 10.0)).is_err());
    }
}
