use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How the renderer treats labels/values of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Hand mismatched series to the charting library untouched.
    #[default]
    Permissive,
    /// Reject mismatched series with `ChartError::LengthMismatch`.
    Strict,
}

/// Host-facing renderer configuration.
///
/// Visual styling is intentionally absent: every chart uses the fixed
/// valence style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default)]
    pub input_policy: InputPolicy,
}

impl RendererConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse renderer config json: {e}"))
        })
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize renderer config: {e}"))
        })
    }
}
