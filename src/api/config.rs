use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};

/// Chart family the data is rendered as.
///
/// Unknown names are kept verbatim in `Other` so configs from newer
/// renderers still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Histogram,
    Area,
    Line,
    Pie,
    TileMap,
    Other(String),
}

impl From<String> for ChartType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "histogram" => Self::Histogram,
            "area" => Self::Area,
            "line" => Self::Line,
            "pie" => Self::Pie,
            "tile_map" => Self::TileMap,
            _ => Self::Other(value),
        }
    }
}

impl From<ChartType> for String {
    fn from(value: ChartType) -> Self {
        match value {
            ChartType::Histogram => "histogram".to_owned(),
            ChartType::Area => "area".to_owned(),
            ChartType::Line => "line".to_owned(),
            ChartType::Pie => "pie".to_owned(),
            ChartType::TileMap => "tile_map".to_owned(),
            ChartType::Other(name) => name,
        }
    }
}

/// How multiple series share an x bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackMode {
    Stacked,
    Grouped,
    Overlap,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<StackMode>,
    #[serde(default)]
    pub inject_zeros: bool,
}

impl DataConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: StackMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_inject_zeros(mut self, inject_zeros: bool) -> Self {
        self.inject_zeros = inject_zeros;
        self
    }

    pub fn from_json_str(input: &str) -> DataResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DataError::InvalidData(format!("failed to parse data config: {e}")))
    }

    /// Histograms stack unless grouped; areas stack unless overlapping.
    #[must_use]
    pub fn should_be_stacked(&self) -> bool {
        match self.chart_type {
            Some(ChartType::Histogram) => self.mode != Some(StackMode::Grouped),
            Some(ChartType::Area) => self.mode != Some(StackMode::Overlap),
            _ => false,
        }
    }

    /// Percentage stacks pin the y domain to `0..=1`.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        self.should_be_stacked() && self.mode == Some(StackMode::Percentage)
    }
}
