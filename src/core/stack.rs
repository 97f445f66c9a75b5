use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::primitives::x_key;
use crate::core::{Chart, StackedPoint};

/// Stacks a chart's series in order and returns every point with its baseline.
///
/// Baselines accumulate per exact `x`; null samples contribute nothing and
/// keep `y = None`. Output order matches the chart's flattened order.
#[must_use]
pub fn stack_chart(chart: &Chart) -> Vec<StackedPoint> {
    let mut baselines: IndexMap<OrderedFloat<f64>, f64> = IndexMap::new();
    let mut stacked = Vec::with_capacity(chart.point_count());

    for series in &chart.series {
        for point in &series.values {
            let baseline = baselines.entry(x_key(point.x)).or_insert(0.0);
            stacked.push(StackedPoint {
                x: point.x,
                y: point.y,
                y0: *baseline,
            });
            if let Some(y) = point.y {
                *baseline += y;
            }
        }
    }

    stacked
}

/// Sums `value(point)` over the points sharing an exact `x`.
///
/// `None` and NaN contributions are skipped; an `x` left without any
/// contribution produces no total. Totals come out in first-seen `x` order.
pub fn totals_per_x<F>(points: impl IntoIterator<Item = StackedPoint>, value: F) -> Vec<f64>
where
    F: Fn(&StackedPoint) -> Option<f64>,
{
    let mut totals: IndexMap<OrderedFloat<f64>, f64> = IndexMap::new();
    for point in points {
        if let Some(y) = value(&point).filter(|y| !y.is_nan()) {
            *totals.entry(x_key(point.x)).or_insert(0.0) += y;
        }
    }
    totals.into_values().collect()
}
