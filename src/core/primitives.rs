use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

#[must_use]
pub fn datetime_to_epoch_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Hashable, totally ordered key for exact-x grouping.
#[must_use]
pub fn x_key(x: f64) -> OrderedFloat<f64> {
    // -0.0 and 0.0 must land in the same bucket.
    OrderedFloat(if x == 0.0 { 0.0 } else { x })
}
