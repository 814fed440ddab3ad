use std::io::Write;

use cairo::{Context, Format, ImageSurface, LineJoin};
use indexmap::IndexMap;
use pango::FontDescription;
use tracing::debug;

use crate::core::geometry::{self, PlotArea, PlotPoint};
use crate::core::{ChartConfiguration, Color, LineDataset};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFactory, Surface, SurfaceProvider};

const LABEL_FONT_SIZE_PX: f64 = 11.0;
const LABEL_COLOR: Color = Color::rgb(102, 102, 102);
const LEGEND_BOX_WIDTH: f64 = 40.0;
const LEGEND_BOX_HEIGHT: f64 = 12.0;
const PLOT_INSET_LEFT: f64 = 48.0;
const PLOT_INSET_TOP: f64 = 28.0;
const PLOT_INSET_RIGHT: f64 = 12.0;
const PLOT_INSET_BOTTOM: f64 = 24.0;
const Y_GRID_LINES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoDrawStats {
    pub segments_drawn: usize,
    pub points_drawn: usize,
    pub texts_drawn: usize,
    pub grid_lines_drawn: usize,
}

/// Named offscreen image surfaces.
#[derive(Debug, Default)]
pub struct CairoSurfaces {
    surfaces: IndexMap<String, ImageSurface>,
}

impl CairoSurfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a transparent ARGB surface under `id`.
    pub fn create(&mut self, id: impl Into<String>, width: i32, height: i32) -> ChartResult<()> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        self.surfaces.insert(id.into(), surface);
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>, surface: ImageSurface) {
        self.surfaces.insert(id.into(), surface);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ImageSurface> {
        self.surfaces.get(id)
    }

    pub fn write_png<W: Write>(&self, id: &str, writer: &mut W) -> ChartResult<()> {
        let surface = self
            .surfaces
            .get(id)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown cairo surface `{id}`")))?;
        surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }
}

impl SurfaceProvider for CairoSurfaces {
    type Surface = ImageSurface;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface> {
        self.surfaces.get(id).cloned()
    }
}

impl Surface for ImageSurface {
    type Context = Context;

    fn context_2d(&self) -> Option<Self::Context> {
        Context::new(self).ok()
    }
}

/// Chart drawn into a Cairo context, kept for hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct CairoChartHandle {
    id: u64,
    stats: CairoDrawStats,
    points: Vec<PlotPoint>,
    hit_radius: f64,
}

impl CairoChartHandle {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn stats(&self) -> CairoDrawStats {
        self.stats
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Sample index under `(x, y)`. Points answer hits even when painted
    /// fully transparent.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        geometry::hit_test(&self.points, x, y, self.hit_radius)
    }
}

/// Line chart painter on Cairo + Pango + PangoCairo.
///
/// Draws the dataset stroke with its tension spline, the dataset legend,
/// category and value labels. Gridlines and axis borders follow the
/// configuration flags; y gridlines are evenly spaced over the plot height.
#[derive(Debug)]
pub struct CairoChartFactory {
    available: bool,
    next_id: u64,
}

impl Default for CairoChartFactory {
    fn default() -> Self {
        Self {
            available: true,
            next_id: 1,
        }
    }
}

impl CairoChartFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    fn draw(
        &self,
        context: &Context,
        config: &ChartConfiguration,
    ) -> ChartResult<(CairoDrawStats, Vec<PlotPoint>)> {
        let (x1, y1, x2, y2) = context
            .clip_extents()
            .map_err(|err| map_backend_error("failed to read clip extents", err))?;
        let canvas = PlotArea::new(x1, y1, x2 - x1, y2 - y1)?;
        // Canvases smaller than the label margins plot edge to edge.
        let area = canvas
            .inset(
                PLOT_INSET_LEFT,
                PLOT_INSET_TOP,
                PLOT_INSET_RIGHT,
                PLOT_INSET_BOTTOM,
            )
            .unwrap_or(canvas);

        let mut stats = CairoDrawStats::default();
        let Some(dataset) = config.primary_dataset() else {
            return Ok((stats, Vec::new()));
        };
        dataset.background_color.validate()?;
        dataset.border_color.validate()?;

        let labels = &config.data.labels;
        let slots = labels.len().max(dataset.data.len());
        let projected = geometry::project_points(&dataset.data, labels.len(), area);

        self.draw_grid(context, config, area, slots, &mut stats)?;
        self.draw_legend(context, dataset, canvas, &mut stats)?;

        apply_color(context, dataset.border_color);
        context.set_line_width(f64::from(dataset.border_width));
        context.set_line_join(LineJoin::Round);
        for run in geometry::split_runs(&projected) {
            let segments = geometry::spline_segments(&run, dataset.tension);
            let Some(first) = segments.first() else {
                continue;
            };
            context.move_to(first.start.0, first.start.1);
            for segment in &segments {
                context.curve_to(
                    segment.control1.0,
                    segment.control1.1,
                    segment.control2.0,
                    segment.control2.1,
                    segment.end.0,
                    segment.end.1,
                );
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.segments_drawn += segments.len();
        }

        let points: Vec<PlotPoint> = projected.into_iter().flatten().collect();
        if !dataset.points_invisible() {
            let radius = f64::from(dataset.point_radius);
            for point in &points {
                context.new_sub_path();
                context.arc(point.x, point.y, radius, 0.0, std::f64::consts::TAU);
                apply_color(context, dataset.point_background_color);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill point", err))?;
                apply_color(context, dataset.point_border_color);
                context.set_line_width(1.0);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke point", err))?;
                stats.points_drawn += 1;
            }
        }

        for (index, label) in labels.iter().enumerate() {
            let x = geometry::category_x(index, slots, area);
            draw_text(context, label, x, area.bottom() + 6.0, TextAnchor::Center);
            stats.texts_drawn += 1;
        }
        if let Some((min, max)) = geometry::value_range(&dataset.data) {
            let x = area.left - 6.0;
            let y_offset = LABEL_FONT_SIZE_PX / 2.0 + 2.0;
            draw_text(context, &format!("{max:.2}"), x, area.top - y_offset, TextAnchor::Right);
            draw_text(context, &format!("{min:.2}"), x, area.bottom() - y_offset, TextAnchor::Right);
            stats.texts_drawn += 2;
        }

        Ok((stats, points))
    }

    fn draw_grid(
        &self,
        context: &Context,
        config: &ChartConfiguration,
        area: PlotArea,
        slots: usize,
        stats: &mut CairoDrawStats,
    ) -> ChartResult<()> {
        let scales = config.options.scales;
        apply_color(context, Color::rgba(0, 0, 0, 0.1));
        context.set_line_width(1.0);

        if scales.x.grid.display {
            for index in 0..slots {
                let x = geometry::category_x(index, slots, area);
                context.move_to(x, area.top);
                context.line_to(x, area.bottom());
                stats.grid_lines_drawn += 1;
            }
        }
        if scales.y.grid.display {
            for step in 0..Y_GRID_LINES {
                let y = area.top + area.height * step as f64 / (Y_GRID_LINES - 1) as f64;
                context.move_to(area.left, y);
                context.line_to(area.right(), y);
                stats.grid_lines_drawn += 1;
            }
        }
        if scales.x.grid.draw_border {
            context.move_to(area.left, area.bottom());
            context.line_to(area.right(), area.bottom());
            stats.grid_lines_drawn += 1;
        }
        if scales.y.grid.draw_border {
            context.move_to(area.left, area.top);
            context.line_to(area.left, area.bottom());
            stats.grid_lines_drawn += 1;
        }
        if stats.grid_lines_drawn > 0 {
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke grid", err))?;
        }
        Ok(())
    }

    fn draw_legend(
        &self,
        context: &Context,
        dataset: &LineDataset,
        canvas: PlotArea,
        stats: &mut CairoDrawStats,
    ) -> ChartResult<()> {
        let center = canvas.left + canvas.width / 2.0;
        let box_x = center - LEGEND_BOX_WIDTH - 4.0;
        let box_y = canvas.top + 8.0;

        context.rectangle(box_x, box_y, LEGEND_BOX_WIDTH, LEGEND_BOX_HEIGHT);
        apply_color(context, dataset.background_color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill legend box", err))?;
        apply_color(context, dataset.border_color);
        context.set_line_width(f64::from(dataset.border_width));
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke legend box", err))?;

        draw_text(context, &dataset.label, center + 4.0, box_y - 1.0, TextAnchor::Left);
        stats.texts_drawn += 1;
        Ok(())
    }
}

impl ChartFactory<Context> for CairoChartFactory {
    type Handle = CairoChartHandle;

    fn is_available(&self) -> bool {
        self.available
    }

    fn create_chart(
        &mut self,
        context: Context,
        config: ChartConfiguration,
    ) -> ChartResult<Self::Handle> {
        let (stats, points) = self.draw(&context, &config)?;
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, ?stats, "cairo chart drawn");

        let hit_radius = config
            .primary_dataset()
            .map_or(0.0, |dataset| f64::from(dataset.point_radius));
        Ok(CairoChartHandle {
            id,
            stats,
            points,
            hit_radius,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum TextAnchor {
    Left,
    Center,
    Right,
}

fn draw_text(context: &Context, text: &str, x: f64, y: f64, anchor: TextAnchor) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {LABEL_FONT_SIZE_PX}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match anchor {
        TextAnchor::Left => x,
        TextAnchor::Center => x - f64::from(text_width) / 2.0,
        TextAnchor::Right => x - f64::from(text_width),
    };

    apply_color(context, LABEL_COLOR);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    let (red, green, blue, alpha) = color.normalized();
    context.set_source_rgba(red, green, blue, alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
