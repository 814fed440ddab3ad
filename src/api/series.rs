use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::deserialize_gapped_values;
use crate::error::{ChartError, ChartResult};

use super::ChartRequest;

/// Samples kept on each side of a detected period when charting it.
pub const DEFAULT_PERIOD_PADDING: usize = 3;
/// Surface ids for period charts are `lineChart-1`, `lineChart-2`, ...
pub const PERIOD_SURFACE_PREFIX: &str = "lineChart-";
pub const LABEL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Index-aligned mood observations: one label and one valence per sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMoodSeries")]
pub struct MoodSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawMoodSeries {
    labels: Vec<String>,
    #[serde(deserialize_with = "deserialize_gapped_values")]
    values: Vec<f64>,
}

impl TryFrom<RawMoodSeries> for MoodSeries {
    type Error = ChartError;

    fn try_from(raw: RawMoodSeries) -> ChartResult<Self> {
        Self::new(raw.labels, raw.values)
    }
}

/// Detected mood cycle, as sample indices into a `MoodSeries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPeriod {
    pub start_index: usize,
    pub end_index: usize,
}

impl MoodPeriod {
    #[must_use]
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }
}

impl MoodSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    /// Builds a series from dated samples, labelling each with its
    /// `YYYY-MM-DD` date.
    pub fn from_dated<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let (labels, values) = samples
            .into_iter()
            .map(|(date, value)| (date.format(LABEL_DATE_FORMAT).to_string(), value))
            .unzip();
        Self { labels, values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Drops the first `rolling_window` samples, whose smoothed values are
    /// still warming up.
    #[must_use]
    pub fn skip_warmup(&self, rolling_window: usize) -> Self {
        self.window(rolling_window, self.len())
    }

    /// Samples in `[start, end)`, clamped to the series bounds.
    #[must_use]
    pub fn window(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.labels.len()).min(self.values.len());
        let start = start.min(end);
        Self {
            labels: self.labels[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        }
    }

    #[must_use]
    pub fn to_request(&self, surface_id: impl Into<String>) -> ChartRequest {
        ChartRequest {
            surface_id: surface_id.into(),
            labels: self.labels.clone(),
            values: self.values.clone(),
        }
    }

    /// One request per period, widened by `padding` samples on both sides
    /// and targeted at `lineChart-<n>` (1-based).
    #[must_use]
    pub fn period_requests(&self, periods: &[MoodPeriod], padding: usize) -> Vec<ChartRequest> {
        periods
            .iter()
            .enumerate()
            .map(|(position, period)| {
                let start = period.start_index.saturating_sub(padding);
                let end = period.end_index.saturating_add(padding);
                self.window(start, end)
                    .to_request(period_surface_id(position + 1))
            })
            .collect()
    }
}

#[must_use]
pub fn period_surface_id(number: usize) -> String {
    format!("{PERIOD_SURFACE_PREFIX}{number}")
}
