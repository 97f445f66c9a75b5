//! chart-data: normalization layer between raw aggregation payloads and chart renderers.
//!
//! Raw payloads come in five shapes (single series, rows, columns, pie slices
//! and geo grid rows). [`VisData`] classifies them, normalizes series data
//! into charts and answers the domain questions renderers ask: y extents,
//! null detection, geo extents and pie trees without empty slices.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DataConfig, PersistedState, UiState, VisData};
pub use error::{DataError, DataResult};
