use serde::{Deserialize, Serialize};

use crate::core::Chart;
use crate::error::{DataError, DataResult};

use super::VisData;

pub const CHART_DATA_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataJsonContractV1 {
    pub schema_version: u32,
    pub charts: Vec<Chart>,
}

impl ChartDataJsonContractV1 {
    #[must_use]
    pub fn new(charts: Vec<Chart>) -> Self {
        Self {
            schema_version: CHART_DATA_JSON_SCHEMA_V1,
            charts,
        }
    }

    pub fn to_json_pretty(&self) -> DataResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DataError::InvalidData(format!("failed to serialize chart data contract v1: {e}"))
        })
    }

    /// Reads a versioned document, or a bare chart array for older exports.
    ///
    /// Every chart must contain at least one series.
    pub fn from_json_compat_str(input: &str) -> DataResult<Self> {
        let payload = Self::parse_compat(input)?;
        for chart in &payload.charts {
            chart.validate()?;
        }
        Ok(payload)
    }

    fn parse_compat(input: &str) -> DataResult<Self> {
        if let Ok(charts) = serde_json::from_str::<Vec<Chart>>(input) {
            return Ok(Self::new(charts));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            DataError::InvalidData(format!("failed to parse chart data json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DATA_JSON_SCHEMA_V1 {
            return Err(DataError::InvalidData(format!(
                "unsupported chart data schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl VisData {
    pub fn chart_data_json_contract_v1_pretty(&self) -> DataResult<String> {
        ChartDataJsonContractV1::new(self.chart_data().to_vec()).to_json_pretty()
    }
}
