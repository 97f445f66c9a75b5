use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::GeoExtent;

/// One geohash grid aggregation row.
///
/// Keys this crate does not interpret are kept in `extra` so rows pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "geoJson")]
    pub geo_json: GeoJson,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJson {
    #[serde(rename = "type", default = "feature_collection")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Value>,
    pub properties: GeoProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProperties {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn feature_collection() -> String {
    "FeatureCollection".to_owned()
}

impl GeoRow {
    #[must_use]
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: Some(label.into()),
            title: None,
            geo_json: GeoJson {
                kind: feature_collection(),
                features: Vec::new(),
                properties: GeoProperties {
                    min,
                    max,
                    zoom: None,
                    center: None,
                    extra: Map::new(),
                },
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}

/// Min of row mins and max of row maxes; `None` for no rows.
#[must_use]
pub fn geo_extents(rows: &[GeoRow]) -> Option<GeoExtent> {
    rows.iter().fold(None, |acc, row| {
        let properties = &row.geo_json.properties;
        Some(match acc {
            None => GeoExtent {
                min: properties.min,
                max: properties.max,
            },
            Some(extent) => GeoExtent {
                min: extent.min.min(properties.min),
                max: extent.max.max(properties.max),
            },
        })
    })
}
