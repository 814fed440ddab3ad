pub mod color;
pub mod config;
pub mod geometry;

pub use color::Color;
pub use config::{
    AxisOptions, ChartConfiguration, ChartData, ChartKind, ChartOptions, ElementOptions,
    GridOptions, LineDataset, PointElementOptions, ScaleSet, VALENCE_FILL_COLOR,
    VALENCE_LINE_COLOR, VALENCE_LINE_TENSION, VALENCE_LINE_WIDTH, VALENCE_POINT_RADIUS,
    VALENCE_SERIES_LABEL, deserialize_gapped_values,
};
pub use geometry::{CubicSegment, PlotArea, PlotPoint};
