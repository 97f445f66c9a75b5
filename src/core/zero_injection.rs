use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;

use crate::core::primitives::x_key;
use crate::core::{Chart, Point};

/// Distinct x values across every chart, in first-appearance order.
///
/// `sorted` orders them ascending instead, which is what ordered (date
/// histogram) payloads use.
#[must_use]
pub fn ordered_x_values(charts: &[Chart], sorted: bool) -> Vec<f64> {
    let mut keys: IndexSet<OrderedFloat<f64>> = charts
        .iter()
        .flat_map(|chart| chart.series.iter())
        .flat_map(|series| series.values.iter())
        .map(|point| x_key(point.x))
        .collect();

    if sorted {
        keys.sort();
    }

    keys.into_iter().map(|key| key.0).collect()
}

/// Pads every series so it has a point at each of `x_values`.
///
/// Missing buckets get `y = 0`. Series are rewritten in `x_values` order;
/// existing points at the same x keep their relative order. Returns the
/// number of inserted points.
pub fn inject_zeros(charts: &mut [Chart], x_values: &[f64]) -> usize {
    let mut inserted = 0;

    for series in charts.iter_mut().flat_map(|chart| chart.series.iter_mut()) {
        let mut by_x: IndexMap<OrderedFloat<f64>, Vec<Point>> = IndexMap::new();
        for point in series.values.drain(..) {
            by_x.entry(x_key(point.x)).or_default().push(point);
        }

        let mut values = Vec::with_capacity(x_values.len().max(by_x.len()));
        for &x in x_values {
            match by_x.shift_remove(&x_key(x)) {
                Some(points) => values.extend(points),
                None => {
                    values.push(Point::new(x, 0.0));
                    inserted += 1;
                }
            }
        }
        // Points whose x is not in `x_values` stay at the end.
        values.extend(by_x.into_values().flatten());
        series.values = values;
    }

    inserted
}
