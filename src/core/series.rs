use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One data series laid out along the shared index axis.
///
/// `None` entries are gaps. Index `i` refers to the same logical X position in
/// every series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub data: Vec<Option<f64>>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub y_axis_id: Option<String>,
    /// Line-drawing hint only; a gap never gets a beacon value.
    #[serde(default)]
    pub connect_nulls: bool,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, data: impl IntoIterator<Item = f64>) -> Self {
        Self::with_gaps(id, data.into_iter().map(Some))
    }

    #[must_use]
    pub fn with_gaps(id: impl Into<String>, data: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            id: id.into(),
            data: data.into_iter().collect(),
            label: None,
            color: None,
            y_axis_id: None,
            connect_nulls: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis_id: impl Into<String>) -> Self {
        self.y_axis_id = Some(axis_id.into());
        self
    }

    #[must_use]
    pub fn with_connect_nulls(mut self, connect_nulls: bool) -> Self {
        self.connect_nulls = connect_nulls;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `index`, or `None` for gaps, non-finite samples and
    /// out-of-bounds indexes.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.data
            .get(index)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }

    #[must_use]
    pub fn latest_index(&self) -> Option<usize> {
        self.data.len().checked_sub(1)
    }

    /// Min/max over present finite values.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let values = || {
            self.data
                .iter()
                .copied()
                .flatten()
                .filter(|value| value.is_finite())
                .map(OrderedFloat)
        };
        let min = values().min()?;
        let max = values().max()?;
        Some((min.into_inner(), max.into_inner()))
    }
}

/// Rejects series collections whose ids are not unique.
pub fn validate_series_ids(series: &[Series]) -> ChartResult<()> {
    let mut seen = IndexSet::with_capacity(series.len());
    for item in series {
        if !seen.insert(item.id.as_str()) {
            return Err(ChartError::DuplicateSeriesId(item.id.clone()));
        }
    }
    Ok(())
}

/// Pads shorter series with gaps so every series shares one length.
///
/// Returns the common length.
pub fn pad_series_to_common_length(series: &mut [Series]) -> usize {
    let len = series.iter().map(Series::len).max().unwrap_or(0);
    for item in series.iter_mut() {
        item.data.resize(len, None);
    }
    len
}
