use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::XDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Key the axis range is stored under in a [`PersistedState`].
    #[must_use]
    pub fn state_key(self) -> &'static str {
        match self {
            Self::X => "vis.xAxis.range",
            Self::Y => "vis.yAxis.range",
        }
    }
}

/// UI state shared with the rendering layer.
///
/// The host owns and persists it; data objects only read and write axis
/// range hints.
pub trait UiState {
    fn axis_hint(&self, axis: Axis) -> Option<XDomain>;

    fn set_axis_hint(&mut self, axis: Axis, range: XDomain);
}

/// In-memory key/value UI state with stable key order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    values: IndexMap<String, Value>,
}

#[derive(Deserialize)]
struct StoredRange {
    min: f64,
    max: f64,
}

impl PersistedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl UiState for PersistedState {
    fn axis_hint(&self, axis: Axis) -> Option<XDomain> {
        let value = self.get(axis.state_key())?;
        let stored: StoredRange = match serde_json::from_value(value.clone()) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(key = axis.state_key(), error = %err, "ignoring malformed axis hint");
                return None;
            }
        };
        match XDomain::new(stored.min, stored.max) {
            Ok(range) => Some(range),
            Err(err) => {
                warn!(key = axis.state_key(), error = %err, "ignoring invalid axis hint");
                None
            }
        }
    }

    fn set_axis_hint(&mut self, axis: Axis, range: XDomain) {
        self.set(
            axis.state_key(),
            serde_json::json!({ "min": range.min(), "max": range.max() }),
        );
    }
}
