mod renderer;
mod renderer_config;
mod request;
mod series;

pub use renderer::{MoodChartRenderer, RenderOutcome, render_mood_chart};
pub use renderer_config::{InputPolicy, RendererConfig};
pub use request::ChartRequest;
pub use series::{
    DEFAULT_PERIOD_PADDING, LABEL_DATE_FORMAT, MoodPeriod, MoodSeries, PERIOD_SURFACE_PREFIX,
    period_surface_id,
};
