mod config;
mod json_contract;
mod ui_state;
mod vis_data;

pub use config::{ChartType, DataConfig, StackMode};
pub use json_contract::{CHART_DATA_JSON_SCHEMA_V1, ChartDataJsonContractV1};
pub use ui_state::{Axis, PersistedState, UiState};
pub use vis_data::VisData;
