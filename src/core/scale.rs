use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping between a data domain and a pixel range.
///
/// Both mappings are total: values outside the domain extrapolate linearly and
/// collapsed domains/ranges resolve to a midpoint instead of dividing by zero.
/// Reversed ranges are allowed, which is how Y axes grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        validate_bounds("domain", domain)?;
        validate_bounds("range", range)?;

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> ChartResult<()> {
        validate_bounds("domain", (start, end))?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        validate_bounds("range", (start, end))?;
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    #[must_use]
    pub fn is_degenerate_domain(self) -> bool {
        self.domain_end - self.domain_start == 0.0
    }

    #[must_use]
    pub fn is_degenerate_range(self) -> bool {
        self.range_end - self.range_start == 0.0
    }

    /// Maps a data value to a pixel offset.
    #[must_use]
    pub fn project(self, value: f64) -> f64 {
        if self.is_degenerate_domain() {
            return midpoint(self.range_start, self.range_end);
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        interpolate(self.range_start, self.range_end, normalized)
    }

    /// Maps a pixel offset back to a data value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        if self.is_degenerate_range() || self.is_degenerate_domain() {
            return midpoint(self.domain_start, self.domain_end);
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        interpolate(self.domain_start, self.domain_end, normalized)
    }
}

// Weighted form so both endpoints map exactly.
fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

fn midpoint(start: f64, end: f64) -> f64 {
    start * 0.5 + end * 0.5
}

fn validate_bounds(name: &str, (start, end): (f64, f64)) -> ChartResult<()> {
    if !start.is_finite() || !end.is_finite() || !(end - start).is_finite() {
        return Err(ChartError::InvalidData(format!(
            "scale {name} bounds and span must be finite"
        )));
    }
    Ok(())
}
