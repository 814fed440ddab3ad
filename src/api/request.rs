use serde::{Deserialize, Serialize};

use crate::core::deserialize_gapped_values;
use crate::error::{ChartError, ChartResult};

/// Input of one render call: target surface plus index-aligned series.
///
/// On the wire the surface id is called `canvasId`, matching what page
/// templates pass; `surfaceId` is accepted as well. `null` values are gaps
/// and reach the charting library as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "canvasId", alias = "surfaceId")]
    pub surface_id: String,
    pub labels: Vec<String>,
    #[serde(deserialize_with = "deserialize_gapped_values")]
    pub values: Vec<f64>,
}

impl ChartRequest {
    #[must_use]
    pub fn new<L, S>(surface_id: impl Into<String>, labels: L, values: Vec<f64>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surface_id: surface_id.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            values,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart request json: {e}"))
        })
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart request: {e}"))
        })
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.values.len()
    }

    pub fn ensure_aligned(&self) -> ChartResult<()> {
        if self.is_aligned() {
            return Ok(());
        }
        Err(ChartError::LengthMismatch {
            labels: self.labels.len(),
            values: self.values.len(),
        })
    }
}
