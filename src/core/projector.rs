use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, LinearScale, ScreenPoint, Series, Viewport};
use crate::error::{ChartError, ChartResult};

/// Axis id used for the fallback Y-scale.
pub const DEFAULT_Y_AXIS_ID: &str = "default";

/// Maps one data point to pixel space.
///
/// Returns `None` when the point has no Y value: callers must hide the beacon
/// rather than draw it at the origin.
#[must_use]
pub fn project_point(
    point: DataPoint,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Option<ScreenPoint> {
    let y_value = point.y_value.filter(|value| value.is_finite())?;
    Some(ScreenPoint::new(
        x_scale.project(point.x_value),
        y_scale.project(y_value),
    ))
}

/// X-scale plus Y-scales keyed by axis id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScales {
    pub x: LinearScale,
    pub y: IndexMap<String, LinearScale>,
}

impl AxisScales {
    /// Creates scales with a single default Y axis.
    #[must_use]
    pub fn new(x: LinearScale, default_y: LinearScale) -> Self {
        let mut y = IndexMap::new();
        y.insert(DEFAULT_Y_AXIS_ID.to_owned(), default_y);
        Self { x, y }
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis_id: impl Into<String>, scale: LinearScale) -> Self {
        self.y.insert(axis_id.into(), scale);
        self
    }

    /// Derives an index X-scale and one Y-scale per axis from series data.
    ///
    /// X maps `[0, len - 1]` onto `[0, width]`; each Y-scale maps the value
    /// extent of its series onto `[height, 0]`. Series without an axis id go
    /// to the default axis.
    pub fn fit_to_series(series: &[Series], viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let len = series.iter().map(Series::len).max().unwrap_or(0);
        let x_end = len.saturating_sub(1) as f64;
        let x = LinearScale::new((0.0, x_end), (0.0, width))?;

        let mut extents: IndexMap<String, Option<(f64, f64)>> = IndexMap::new();
        extents.insert(DEFAULT_Y_AXIS_ID.to_owned(), None);
        for item in series {
            let axis_id = item.y_axis_id.as_deref().unwrap_or(DEFAULT_Y_AXIS_ID);
            let extent = extents.entry(axis_id.to_owned()).or_insert(None);
            if let Some((min, max)) = item.value_range() {
                *extent = Some(match *extent {
                    Some((lo, hi)) => (lo.min(min), hi.max(max)),
                    None => (min, max),
                });
            }
        }

        let mut y = IndexMap::with_capacity(extents.len());
        for (axis_id, extent) in extents {
            let domain = extent.unwrap_or((0.0, 0.0));
            y.insert(axis_id, LinearScale::new(domain, (height, 0.0))?);
        }

        Ok(Self { x, y })
    }

    /// Default Y-scale: the `default` axis, or the first registered one.
    #[must_use]
    pub fn default_y(&self) -> Option<LinearScale> {
        self.y
            .get(DEFAULT_Y_AXIS_ID)
            .or_else(|| self.y.values().next())
            .copied()
    }
}

/// Projection of one series at one index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectedValue {
    Point(ScreenPoint),
    /// The index resolved but the series has a gap there; the X position is
    /// still valid for scrub lines and labels.
    MissingValue { x: f64 },
}

impl ProjectedValue {
    #[must_use]
    pub fn x(self) -> f64 {
        match self {
            Self::Point(point) => point.x,
            Self::MissingValue { x } => x,
        }
    }

    #[must_use]
    pub fn point(self) -> Option<ScreenPoint> {
        match self {
            Self::Point(point) => Some(point),
            Self::MissingValue { .. } => None,
        }
    }
}

/// Resolves the scale pair for a series and projects its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    scales: AxisScales,
    default_y: LinearScale,
}

impl Projector {
    pub fn new(scales: AxisScales) -> ChartResult<Self> {
        let Some(default_y) = scales.default_y() else {
            return Err(ChartError::InvalidData(
                "at least one y-axis scale is required".to_owned(),
            ));
        };
        Ok(Self { scales, default_y })
    }

    #[must_use]
    pub fn scales(&self) -> &AxisScales {
        &self.scales
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.scales.x
    }

    /// Y-scale for the series' axis; unknown or absent ids use the default.
    #[must_use]
    pub fn y_scale_for(&self, series: &Series) -> LinearScale {
        let Some(axis_id) = series.y_axis_id.as_deref() else {
            return self.default_y;
        };
        match self.scales.y.get(axis_id) {
            Some(scale) => *scale,
            None => {
                trace!(series = %series.id, axis_id, "unknown y-axis id, using default scale");
                self.default_y
            }
        }
    }

    #[must_use]
    pub fn project(&self, point: DataPoint, series: &Series) -> Option<ScreenPoint> {
        project_point(point, self.scales.x, self.y_scale_for(series))
    }

    #[must_use]
    pub fn project_index(&self, series: &Series, index: usize) -> ProjectedValue {
        let point = DataPoint::at_index(index, series.value_at(index));
        match self.project(point, series) {
            Some(point) => ProjectedValue::Point(point),
            None => ProjectedValue::MissingValue {
                x: self.scales.x.project(point.x_value),
            },
        }
    }

    /// Projects a fractional index position, interpolating between neighbours.
    ///
    /// Missing if either neighbour is a gap or the position is outside the
    /// series.
    #[must_use]
    pub fn project_position(&self, series: &Series, position: f64) -> ProjectedValue {
        let x = self.scales.x.project(position);
        let missing = ProjectedValue::MissingValue { x };
        if !position.is_finite() || position < 0.0 || series.is_empty() {
            return missing;
        }

        let lower = position.floor();
        let lower_index = lower as usize;
        let Some(lower_value) = series.value_at(lower_index) else {
            return missing;
        };
        let fraction = position - lower;
        let value = if fraction == 0.0 {
            lower_value
        } else {
            let Some(upper_value) = series.value_at(lower_index + 1) else {
                return missing;
            };
            lower_value + (upper_value - lower_value) * fraction
        };

        let point = DataPoint::new(lower_index, position, Some(value));
        self.project(point, series)
            .map_or(missing, ProjectedValue::Point)
    }
}
