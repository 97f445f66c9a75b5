use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{
    Chart, DataKind, GeoExtent, GeoRow, GeoRowsInput, Ordered, Point, RawInput, SliceTree,
    StackedPoint, XDomain, geo_extents, inject_zeros, ordered_x_values, points_in_x_domain,
    stack_chart, stacked_in_x_domain, totals_per_x,
};
use crate::error::DataResult;

use super::{Axis, DataConfig, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Charts(Vec<Chart>),
    Slices(SliceTree),
    GeoRows(GeoRowsInput),
}

/// Normalized chart data plus the domain statistics renderers ask for.
///
/// Built once from a raw payload; every accessor afterwards is a pure read.
#[derive(Debug, Clone, PartialEq)]
pub struct VisData {
    kind: DataKind,
    config: DataConfig,
    ordered: Option<Ordered>,
    x_domain: Option<XDomain>,
    payload: Payload,
}

impl VisData {
    /// Normalizes `raw` and resolves the x-domain against `ui_state`.
    ///
    /// An x-axis hint already present in `ui_state` wins. Otherwise the
    /// payload's `ordered` range is used and written back as the hint.
    pub fn new(raw: RawInput, config: DataConfig, ui_state: &mut dyn UiState) -> DataResult<Self> {
        let kind = raw.kind();
        let ordered = raw.ordered();

        let mut payload = match raw {
            RawInput::Series(input) => Payload::Charts(vec![Chart::new(input.label, input.series)]),
            RawInput::Rows(input) => Payload::Charts(input.rows),
            RawInput::Columns(input) => Payload::Charts(input.columns),
            RawInput::Slices(input) => Payload::Slices(input.slices),
            RawInput::GeoRows(input) => Payload::GeoRows(input),
        };

        let mut x_domain = None;
        if let Payload::Charts(charts) = &mut payload {
            for chart in charts.iter() {
                chart.validate()?;
            }

            if config.inject_zeros {
                let x_values = ordered_x_values(charts, ordered.is_some());
                let inserted = inject_zeros(charts, &x_values);
                trace!(x_values = x_values.len(), inserted, "injected zero points");
            }

            x_domain = resolve_x_domain(ordered, ui_state);
        }

        let data = Self {
            kind,
            config,
            ordered,
            x_domain,
            payload,
        };
        debug!(
            ?kind,
            charts = data.chart_data().len(),
            points = data.point_count(),
            stacked = data.should_be_stacked(),
            x_domain = ?data.x_domain,
            "built chart data"
        );
        Ok(data)
    }

    /// Classifies and parses a JSON payload, then builds the data object.
    pub fn from_value(
        value: Value,
        config: DataConfig,
        ui_state: &mut dyn UiState,
    ) -> DataResult<Self> {
        Self::new(RawInput::from_value(value)?, config, ui_state)
    }

    pub fn from_json_str(
        input: &str,
        config: DataConfig,
        ui_state: &mut dyn UiState,
    ) -> DataResult<Self> {
        Self::new(RawInput::from_json_str(input)?, config, ui_state)
    }

    #[must_use]
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    #[must_use]
    pub fn ordered(&self) -> Option<Ordered> {
        self.ordered
    }

    #[must_use]
    pub fn x_domain(&self) -> Option<XDomain> {
        self.x_domain
    }

    #[must_use]
    pub fn should_be_stacked(&self) -> bool {
        self.config.should_be_stacked()
    }

    /// Charts in payload order. Empty for pie and geo payloads.
    #[must_use]
    pub fn chart_data(&self) -> &[Chart] {
        match &self.payload {
            Payload::Charts(charts) => charts.as_slice(),
            Payload::Slices(_) | Payload::GeoRows(_) => &[],
        }
    }

    /// Every point of every series, in chart then series order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Point> {
        self.chart_data()
            .iter()
            .flat_map(|chart| chart.series.iter())
            .flat_map(|series| series.values.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.chart_data().iter().map(Chart::point_count).sum()
    }

    #[must_use]
    pub fn has_null_values(&self) -> bool {
        self.chart_data()
            .iter()
            .flat_map(|chart| chart.series.iter())
            .flat_map(|series| series.values.iter())
            .any(|point| point.y.is_none())
    }

    /// Unique series labels in first-seen order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let labels: IndexSet<&str> = self
            .chart_data()
            .iter()
            .flat_map(|chart| chart.series.iter())
            .map(|series| series.label.as_str())
            .collect();
        labels.into_iter().map(str::to_owned).collect()
    }

    /// Distinct x values; ascending for ordered payloads.
    #[must_use]
    pub fn x_values(&self) -> Vec<f64> {
        ordered_x_values(self.chart_data(), self.ordered.is_some())
    }

    /// Smallest y inside the x-domain, or `None` when nothing is left.
    ///
    /// Under stacked semantics the values of points sharing an `x` within a
    /// chart are summed first.
    #[must_use]
    pub fn y_min(&self) -> Option<f64> {
        self.y_extent(Extent::Min, |point| point.y)
    }

    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.y_extent(Extent::Max, |point| point.y)
    }

    /// Like [`Self::y_min`] but reduces `value(point)` instead of `y`.
    ///
    /// Stacked points carry their baseline in `y0`.
    pub fn y_min_by<F>(&self, value: F) -> Option<f64>
    where
        F: Fn(&StackedPoint) -> Option<f64>,
    {
        self.y_extent(Extent::Min, value)
    }

    pub fn y_max_by<F>(&self, value: F) -> Option<f64>
    where
        F: Fn(&StackedPoint) -> Option<f64>,
    {
        self.y_extent(Extent::Max, value)
    }

    /// Raw pie tree as supplied.
    #[must_use]
    pub fn slices(&self) -> Option<&SliceTree> {
        match &self.payload {
            Payload::Slices(slices) => Some(slices),
            Payload::Charts(_) | Payload::GeoRows(_) => None,
        }
    }

    /// Pie tree with zero-sized slices removed.
    #[must_use]
    pub fn pie_data(&self) -> Option<SliceTree> {
        self.slices().map(SliceTree::remove_zero_slices)
    }

    #[must_use]
    pub fn pie_names(&self) -> Vec<String> {
        self.pie_data()
            .map(|slices| slices.names())
            .unwrap_or_default()
    }

    /// Geo grid rows exactly as supplied.
    #[must_use]
    pub fn vis_data(&self) -> Option<&[GeoRow]> {
        match &self.payload {
            Payload::GeoRows(input) => Some(input.rows.as_slice()),
            Payload::Charts(_) | Payload::Slices(_) => None,
        }
    }

    #[must_use]
    pub fn hits(&self) -> Option<u64> {
        match &self.payload {
            Payload::GeoRows(input) => Some(input.hits),
            Payload::Charts(_) | Payload::Slices(_) => None,
        }
    }

    /// Min/max over the geo rows' properties, `None` without rows.
    #[must_use]
    pub fn geo_extents(&self) -> Option<GeoExtent> {
        self.vis_data().and_then(geo_extents)
    }

    fn y_extent<F>(&self, extent: Extent, value: F) -> Option<f64>
    where
        F: Fn(&StackedPoint) -> Option<f64>,
    {
        let charts = self.extent_points();
        if charts.iter().all(Vec::is_empty) {
            return None;
        }
        if self.config.is_percentage() {
            return Some(match extent {
                Extent::Min => 0.0,
                Extent::Max => 1.0,
            });
        }

        let values: Vec<f64> = if self.should_be_stacked() {
            charts
                .into_iter()
                .flat_map(|points| totals_per_x(points, &value))
                .collect()
        } else {
            charts
                .into_iter()
                .flatten()
                .filter_map(|point| value(&point))
                .filter(|y| !y.is_nan())
                .collect()
        };

        match extent {
            Extent::Min => values.into_iter().reduce(f64::min),
            Extent::Max => values.into_iter().reduce(f64::max),
        }
    }

    /// Points inside the x-domain, one group per chart.
    fn extent_points(&self) -> Vec<Vec<StackedPoint>> {
        let domain = self.x_domain;
        let stacked = self.should_be_stacked();
        self.chart_data()
            .iter()
            .map(|chart| -> Vec<StackedPoint> {
                if stacked {
                    stacked_in_x_domain(stack_chart(chart), domain).collect()
                } else {
                    chart
                        .series
                        .iter()
                        .flat_map(|series| points_in_x_domain(&series.values, domain))
                        .map(|point| StackedPoint::from(*point))
                        .collect()
                }
            })
            .collect()
    }
}

fn resolve_x_domain(ordered: Option<Ordered>, ui_state: &mut dyn UiState) -> Option<XDomain> {
    if let Some(hint) = ui_state.axis_hint(Axis::X) {
        trace!(min = hint.min(), max = hint.max(), "using x-axis hint from ui state");
        return Some(hint);
    }

    let ordered = ordered?;
    let (Some(min), Some(max)) = (ordered.min, ordered.max) else {
        return None;
    };
    match XDomain::new(min, max) {
        Ok(domain) => {
            ui_state.set_axis_hint(Axis::X, domain);
            Some(domain)
        }
        Err(err) => {
            warn!(min, max, error = %err, "ignoring ordered x range");
            None
        }
    }
}
