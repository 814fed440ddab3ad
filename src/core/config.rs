use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Series name shown in the legend and tooltips.
pub const VALENCE_SERIES_LABEL: &str = "valence";
/// Translucent green used for the legend swatch and area fill.
pub const VALENCE_FILL_COLOR: Color = Color::rgba(30, 215, 96, 0.2);
/// Solid green stroke of the valence line.
pub const VALENCE_LINE_COLOR: Color = Color::rgb(30, 215, 96);
pub const VALENCE_LINE_WIDTH: u32 = 3;
pub const VALENCE_LINE_TENSION: f64 = 0.2;
pub const VALENCE_POINT_RADIUS: u32 = 3;

/// Chart kinds understood by the charting library. Only lines are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// Declarative chart description handed to a `ChartFactory`.
///
/// Field names serialize to the charting library's JSON option keys, so the
/// value can be passed to a JavaScript constructor unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    #[serde(deserialize_with = "deserialize_gapped_values")]
    pub data: Vec<f64>,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: u32,
    pub tension: f64,
    pub point_radius: u32,
    pub point_border_color: Color,
    pub point_background_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub elements: ElementOptions,
    pub scales: ScaleSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementOptions {
    pub point: PointElementOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointElementOptions {
    pub radius: u32,
}

/// Per-axis options. `y` is declared first to keep the emitted key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub y: AxisOptions,
    pub x: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub grid: GridOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub display: bool,
    pub draw_border: bool,
}

impl GridOptions {
    /// No gridlines and no axis border line.
    pub const HIDDEN: Self = Self {
        display: false,
        draw_border: false,
    };
}

impl ChartConfiguration {
    /// Builds the single-series valence line chart for `labels`/`values`.
    ///
    /// Only the data varies between calls; every visual constant is fixed.
    /// Lengths are not reconciled here.
    #[must_use]
    pub fn mood_line(labels: &[String], values: &[f64]) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: labels.to_vec(),
                datasets: vec![LineDataset::valence(values)],
            },
            options: ChartOptions::mood_line(),
        }
    }

    /// The valence dataset. Always present for configurations built by
    /// `mood_line`; `None` only for hand-edited payloads without datasets.
    #[must_use]
    pub fn primary_dataset(&self) -> Option<&LineDataset> {
        self.data.datasets.first()
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart configuration json: {e}"))
        })
    }
}

impl LineDataset {
    #[must_use]
    pub fn valence(values: &[f64]) -> Self {
        Self {
            label: VALENCE_SERIES_LABEL.to_owned(),
            data: values.to_vec(),
            background_color: VALENCE_FILL_COLOR,
            border_color: VALENCE_LINE_COLOR,
            border_width: VALENCE_LINE_WIDTH,
            tension: VALENCE_LINE_TENSION,
            point_radius: VALENCE_POINT_RADIUS,
            point_border_color: Color::TRANSPARENT,
            point_background_color: Color::TRANSPARENT,
        }
    }

    /// Points keep their radius for hit-testing but paint nothing.
    #[must_use]
    pub fn points_invisible(&self) -> bool {
        self.point_border_color.is_transparent() && self.point_background_color.is_transparent()
    }
}

impl ChartOptions {
    #[must_use]
    pub const fn mood_line() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            elements: ElementOptions {
                point: PointElementOptions {
                    radius: VALENCE_POINT_RADIUS,
                },
            },
            scales: ScaleSet {
                y: AxisOptions {
                    grid: GridOptions::HIDDEN,
                },
                x: AxisOptions {
                    grid: GridOptions::HIDDEN,
                },
            },
        }
    }
}

/// Reads a numeric series where `null` marks a gap, as written for
/// non-finite values. Gaps come back as `f64::NAN`.
pub fn deserialize_gapped_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}
