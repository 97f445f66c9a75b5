use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::core::{Chart, GeoRow, Series, SliceTree};
use crate::error::{DataError, DataResult};

/// Shape tag produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Series,
    Rows,
    Columns,
    Slices,
    GeoRows,
}

/// X-axis ordering hints shipped with date histogram style payloads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ordered {
    #[serde(default)]
    pub date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    #[serde(default)]
    pub label: String,
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<Ordered>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowsInput {
    pub rows: Vec<Chart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<Ordered>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnsInput {
    pub columns: Vec<Chart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<Ordered>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicesInput {
    pub slices: SliceTree,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRowsInput {
    pub rows: Vec<GeoRow>,
    #[serde(default)]
    pub hits: u64,
}

/// Raw chart payload, one variant per supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Series(SeriesInput),
    Rows(RowsInput),
    Columns(ColumnsInput),
    Slices(SlicesInput),
    GeoRows(GeoRowsInput),
}

impl RawInput {
    /// Classifies a JSON payload and parses it into the matching variant.
    pub fn from_value(value: Value) -> DataResult<Self> {
        let kind = classify(&value)?;
        trace!(?kind, "classified raw input");
        Ok(match kind {
            DataKind::Series => Self::Series(parse_body(value, kind)?),
            DataKind::Rows => Self::Rows(parse_body(value, kind)?),
            DataKind::Columns => Self::Columns(parse_body(value, kind)?),
            DataKind::Slices => Self::Slices(parse_body(value, kind)?),
            DataKind::GeoRows => Self::GeoRows(parse_body(value, kind)?),
        })
    }

    pub fn from_json_str(input: &str) -> DataResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| DataError::InvalidData(format!("failed to parse chart payload: {e}")))?;
        Self::from_value(value)
    }

    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Series(_) => DataKind::Series,
            Self::Rows(_) => DataKind::Rows,
            Self::Columns(_) => DataKind::Columns,
            Self::Slices(_) => DataKind::Slices,
            Self::GeoRows(_) => DataKind::GeoRows,
        }
    }

    #[must_use]
    pub fn ordered(&self) -> Option<Ordered> {
        match self {
            Self::Series(input) => input.ordered,
            Self::Rows(input) => input.ordered,
            Self::Columns(input) => input.ordered,
            Self::Slices(_) | Self::GeoRows(_) => None,
        }
    }
}

/// Detects the payload shape from its top-level keys.
pub fn classify(value: &Value) -> DataResult<DataKind> {
    let Some(object) = value.as_object() else {
        return Err(DataError::UnrecognizedShape { keys: Vec::new() });
    };

    if object.contains_key("series") {
        return Ok(DataKind::Series);
    }

    if let Some(rows) = object.get("rows") {
        return classify_rows(rows, object.contains_key("hits"));
    }

    if object.contains_key("columns") {
        return Ok(DataKind::Columns);
    }

    if object.contains_key("slices") {
        return Ok(DataKind::Slices);
    }

    Err(DataError::UnrecognizedShape {
        keys: object.keys().cloned().collect(),
    })
}

fn classify_rows(rows: &Value, has_hits: bool) -> DataResult<DataKind> {
    let Some(rows) = rows.as_array() else {
        return Err(DataError::InvalidData("`rows` must be an array".to_owned()));
    };

    if rows.is_empty() {
        return Ok(if has_hits {
            DataKind::GeoRows
        } else {
            DataKind::Rows
        });
    }

    let geo_rows = rows.iter().filter(|row| row.get("geoJson").is_some()).count();
    match geo_rows {
        0 => Ok(DataKind::Rows),
        n if n == rows.len() => Ok(DataKind::GeoRows),
        n => Err(DataError::InvalidData(format!(
            "rows mix geoJson and series charts ({n} of {} rows carry geoJson)",
            rows.len()
        ))),
    }
}

fn parse_body<T: DeserializeOwned>(value: Value, kind: DataKind) -> DataResult<T> {
    serde_json::from_value(value)
        .map_err(|e| DataError::InvalidData(format!("malformed {kind:?} payload: {e}")))
}
