//! mood-chart: renders a mood-over-time line chart through an injected
//! charting library.
//!
//! The crate builds the fixed single-series valence configuration and hands
//! it to a `ChartFactory` bound to a surface found through a
//! `SurfaceProvider`. Missing surfaces or libraries are reported as no-op
//! `RenderOutcome`s instead of errors.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartRequest, MoodChartRenderer, RenderOutcome, RendererConfig, render_mood_chart};
pub use crate::core::ChartConfiguration;
pub use error::{ChartError, ChartResult};
