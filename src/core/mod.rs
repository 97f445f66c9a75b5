pub mod geo;
pub mod primitives;
pub mod raw;
pub mod slices;
pub mod stack;
pub mod types;
pub mod windowing;
pub mod zero_injection;

pub use geo::{GeoJson, GeoProperties, GeoRow, geo_extents};
pub use raw::{
    ColumnsInput, DataKind, GeoRowsInput, Ordered, RawInput, RowsInput, SeriesInput, SlicesInput,
    classify,
};
pub use slices::{SliceNode, SliceTree};
pub use stack::{stack_chart, totals_per_x};
pub use types::{Chart, GeoExtent, Point, Series, StackedPoint, XDomain};
pub use windowing::{points_in_x_domain, stacked_in_x_domain};
pub use zero_injection::{inject_zeros, ordered_x_values};
