use tracing::{debug, trace, warn};

use crate::core::ChartConfiguration;
use crate::error::ChartResult;
use crate::render::{ChartFactory, Surface, SurfaceProvider};

use super::{ChartRequest, InputPolicy, RendererConfig};

type ContextOf<P> = <<P as SurfaceProvider>::Surface as Surface>::Context;

/// What a render call did.
///
/// Every variant except `Rendered` is a silent no-op: nothing was drawn and
/// no error is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome<H> {
    Rendered(H),
    SurfaceMissing,
    LibraryUnavailable,
    ContextUnavailable,
}

impl<H> RenderOutcome<H> {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        match self {
            Self::Rendered(handle) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_handle(self) -> Option<H> {
        match self {
            Self::Rendered(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Draws the valence line chart for `request` onto its surface.
///
/// Resolves the surface, checks the charting library, obtains a 2-D context
/// and hands a freshly built configuration to `charts`. A missing surface,
/// library or context returns the matching no-op outcome. Only errors raised
/// by the library itself are propagated.
pub fn render_mood_chart<P, F>(
    surfaces: &P,
    charts: &mut F,
    request: &ChartRequest,
) -> ChartResult<RenderOutcome<F::Handle>>
where
    P: SurfaceProvider,
    F: ChartFactory<ContextOf<P>>,
{
    let Some(surface) = surfaces.surface_by_id(&request.surface_id) else {
        debug!(surface_id = %request.surface_id, "surface not found, skipping chart");
        return Ok(RenderOutcome::SurfaceMissing);
    };
    if !charts.is_available() {
        debug!(surface_id = %request.surface_id, "charting library unavailable, skipping chart");
        return Ok(RenderOutcome::LibraryUnavailable);
    }
    let Some(context) = surface.context_2d() else {
        debug!(surface_id = %request.surface_id, "surface refused 2d context, skipping chart");
        return Ok(RenderOutcome::ContextUnavailable);
    };

    let config = ChartConfiguration::mood_line(&request.labels, &request.values);
    trace!(
        surface_id = %request.surface_id,
        labels = request.labels.len(),
        values = request.values.len(),
        "built mood chart configuration"
    );

    match charts.create_chart(context, config) {
        Ok(handle) => Ok(RenderOutcome::Rendered(handle)),
        Err(err) => {
            warn!(
                surface_id = %request.surface_id,
                error = %err,
                "charting library rejected chart"
            );
            Err(err)
        }
    }
}

/// Renderer owning its surface provider and charting library.
pub struct MoodChartRenderer<P, F> {
    surfaces: P,
    charts: F,
    config: RendererConfig,
}

impl<P, F> MoodChartRenderer<P, F>
where
    P: SurfaceProvider,
    F: ChartFactory<ContextOf<P>>,
{
    #[must_use]
    pub fn new(surfaces: P, charts: F) -> Self {
        Self::with_config(surfaces, charts, RendererConfig::default())
    }

    #[must_use]
    pub fn with_config(surfaces: P, charts: F, config: RendererConfig) -> Self {
        Self {
            surfaces,
            charts,
            config,
        }
    }

    /// Renders one chart. Under `InputPolicy::Strict` misaligned input fails
    /// before any collaborator is touched.
    pub fn render(&mut self, request: &ChartRequest) -> ChartResult<RenderOutcome<F::Handle>> {
        if self.config.input_policy == InputPolicy::Strict {
            if let Err(err) = request.ensure_aligned() {
                warn!(
                    surface_id = %request.surface_id,
                    error = %err,
                    "rejecting misaligned chart request"
                );
                return Err(err);
            }
        }
        render_mood_chart(&self.surfaces, &mut self.charts, request)
    }

    /// Renders each request in order, stopping at the first error.
    pub fn render_all<'a, I>(&mut self, requests: I) -> ChartResult<Vec<RenderOutcome<F::Handle>>>
    where
        I: IntoIterator<Item = &'a ChartRequest>,
    {
        requests
            .into_iter()
            .map(|request| self.render(request))
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> RendererConfig {
        self.config
    }

    #[must_use]
    pub fn surfaces(&self) -> &P {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut P {
        &mut self.surfaces
    }

    #[must_use]
    pub fn charts(&self) -> &F {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut F {
        &mut self.charts
    }

    #[must_use]
    pub fn into_parts(self) -> (P, F) {
        (self.surfaces, self.charts)
    }
}
