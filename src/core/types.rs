use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_epoch_millis;
use crate::error::{DataError, DataResult};

/// Single sample of a series. `y` is `None` for missing buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y: Some(y) }
    }

    #[must_use]
    pub fn null(x: f64) -> Self {
        Self { x, y: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub label: String,
    pub values: Vec<Point>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// One renderable unit: a row or column of a split chart, or the whole
/// payload for single-series input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub label: String,
    pub series: Vec<Series>,
}

impl Chart {
    #[must_use]
    pub fn new(label: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            label: label.into(),
            series,
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.values.len()).sum()
    }

    pub(crate) fn validate(&self) -> DataResult<()> {
        if self.series.is_empty() {
            return Err(DataError::InvalidData(format!(
                "chart `{}` must contain at least one series",
                self.label
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoExtent {
    pub min: f64,
    pub max: f64,
}

/// Inclusive bound on point `x` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XDomain {
    min: f64,
    max: f64,
}

impl XDomain {
    /// Builds a domain from two finite bounds, swapping them when reversed.
    pub fn new(start: f64, end: f64) -> DataResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DataError::InvalidData(
                "x-domain bounds must be finite".to_owned(),
            ));
        }

        let (min, max) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        Ok(Self { min, max })
    }

    /// Domain over epoch milliseconds, the unit date histogram buckets use.
    pub fn from_dates(start: DateTime<Utc>, end: DateTime<Utc>) -> DataResult<Self> {
        Self::new(
            datetime_to_epoch_millis(start),
            datetime_to_epoch_millis(end),
        )
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Point view handed to y-extent value getters.
///
/// `y0` is the stack baseline: the sum of earlier series' `y` at the same
/// `x` within the chart. It is `0.0` when stacking does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedPoint {
    pub x: f64,
    pub y: Option<f64>,
    pub y0: f64,
}

impl StackedPoint {
    /// Top of the stacked bar, `None` for null samples.
    #[must_use]
    pub fn stacked_y(&self) -> Option<f64> {
        self.y.map(|y| self.y0 + y)
    }
}

impl From<Point> for StackedPoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            y0: 0.0,
        }
    }
}
